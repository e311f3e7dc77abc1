//! # 绘制表面与唤醒命令执行
//!
//! 处理 SetLogoVisible、RequestRedraw、ScheduleWake、CancelWake。

use std::time::Duration;

use tracing::trace;

use super::CommandExecutor;
use super::types::{ExecuteContext, ExecuteResult};

impl CommandExecutor {
    /// 执行 SetLogoVisible
    pub(super) fn execute_set_logo_visible(
        &mut self,
        visible: bool,
        ctx: &mut ExecuteContext<'_>,
    ) -> ExecuteResult {
        ctx.render_state.set_logo_visible(visible);
        ExecuteResult::Ok
    }

    /// 执行 RequestRedraw
    pub(super) fn execute_request_redraw(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        ctx.renderer.request_redraw();
        ExecuteResult::RedrawRequested
    }

    /// 执行 ScheduleWake
    pub(super) fn execute_schedule_wake(
        &mut self,
        delay: Duration,
        ctx: &mut ExecuteContext<'_>,
    ) -> ExecuteResult {
        if ctx.timer.is_armed() {
            trace!("覆盖尚未触发的唤醒");
        }
        ctx.timer.schedule(ctx.now, delay);
        ExecuteResult::WakeScheduled(delay)
    }

    /// 执行 CancelWake
    pub(super) fn execute_cancel_wake(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        ctx.timer.cancel();
        ExecuteResult::WakeCancelled
    }
}
