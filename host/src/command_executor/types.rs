//! Command Executor 类型定义
//!
//! 定义执行结果与执行上下文。

use std::time::Duration;

use crate::player::DigitPlayer;
use crate::renderer::{RenderState, Renderer};
use crate::timer::WakeTimer;

/// Command 执行结果
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ExecuteResult {
    /// 执行成功，继续
    #[default]
    Ok,
    /// 已请求重绘
    RedrawRequested,
    /// 已调度唤醒
    WakeScheduled(Duration),
    /// 已取消唤醒
    WakeCancelled,
}

impl ExecuteResult {
    /// 是否与唤醒定时器相关
    pub fn is_wake(&self) -> bool {
        matches!(self, Self::WakeScheduled(_) | Self::WakeCancelled)
    }
}

/// 执行上下文
///
/// Command 会作用到的全部 Host 对象。
#[derive(Debug)]
pub struct ExecuteContext<'a> {
    pub player: &'a mut DigitPlayer,
    pub timer: &'a mut WakeTimer,
    pub renderer: &'a mut Renderer,
    pub render_state: &'a mut RenderState,
    /// Host 单调时间线上的当前时刻
    pub now: Duration,
}

/// 命令执行输出
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// 执行结果
    pub result: ExecuteResult,
    /// 累计执行的指令数
    pub executed: u64,
}
