//! # Scheduler 模块
//!
//! 逐秒 tick 的一次性唤醒调度。
//!
//! 任何时刻至多存在一个待触发的唤醒：重新调度前总是先取消旧的。
//! 表盘不可见或处于环境模式时不调度（计时器挂起）。

use std::time::Duration;

use tracing::debug;

use crate::command::Command;
use crate::time::{ClockReading, DisplayMode};

/// tick 周期
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// 一次性唤醒调度器
#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    pending: bool,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有待触发的唤醒
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// 到下一整秒的延迟
    pub fn delay_to_next_second(now: ClockReading) -> Duration {
        TICK_INTERVAL - Duration::from_millis(u64::from(now.millis))
    }

    /// 取消旧唤醒，必要时重新调度
    pub fn rearm(&mut self, visible: bool, mode: DisplayMode, now: ClockReading) -> Vec<Command> {
        let mut commands = self.cancel();

        if visible && !mode.is_ambient() {
            let delay = Self::delay_to_next_second(now);
            self.pending = true;
            commands.push(Command::ScheduleWake { delay });
            debug!(delay_ms = delay.as_millis() as u64, "调度下一次 tick");
        } else {
            debug!(visible = visible, mode = ?mode, "计时器挂起");
        }

        commands
    }

    /// 取消待触发的唤醒（若有）
    pub fn cancel(&mut self) -> Vec<Command> {
        if std::mem::take(&mut self.pending) {
            vec![Command::CancelWake]
        } else {
            Vec::new()
        }
    }

    /// 消费一次唤醒
    ///
    /// # 返回
    /// - `true`: 唤醒有效
    /// - `false`: 没有待触发的唤醒（过期事件）
    pub fn fire(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}
