//! # Command Executor 模块
//!
//! Command 执行器，负责将 Runtime 发出的 Command 转换为实际操作。
//!
//! ## 设计说明
//!
//! - `CommandExecutor` 接收 `Command`，驱动播放器、唤醒定时器和渲染状态
//! - 执行器不直接渲染，只登记重绘请求，绘制由 `Renderer` 负责
//!
//! ## 模块结构
//!
//! - `player`: 播放器命令执行
//! - `surface`: logo、重绘与唤醒命令执行
//! - `types`: 类型定义

mod player;
mod surface;
mod types;

pub use types::*;

use face_runtime::Command;
use tracing::debug;

/// Command 执行器
#[derive(Debug, Default)]
pub struct CommandExecutor {
    /// 最近一次执行的输出
    pub last_output: CommandOutput,
}

impl CommandExecutor {
    /// 创建新的 Command 执行器
    pub fn new() -> Self {
        Self::default()
    }

    /// 执行单个 Command
    pub fn execute(&mut self, command: &Command, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        debug!(command = %command, "执行指令");

        let result = match command {
            cmd if cmd.is_player_command() => self.execute_player_command(cmd, ctx.player),
            Command::SetLogoVisible { visible } => self.execute_set_logo_visible(*visible, ctx),
            Command::RequestRedraw => self.execute_request_redraw(ctx),
            Command::ScheduleWake { delay } => self.execute_schedule_wake(*delay, ctx),
            Command::CancelWake => self.execute_cancel_wake(ctx),
            _ => ExecuteResult::Ok,
        };

        self.last_output.result = result;
        self.last_output.executed += 1;
        result
    }

    /// 批量执行 Commands
    ///
    /// 返回最后一个与唤醒相关的结果；没有时返回最后一个非 `Ok` 的结果。
    pub fn execute_batch(
        &mut self,
        commands: &[Command],
        ctx: &mut ExecuteContext<'_>,
    ) -> ExecuteResult {
        let mut last_result = ExecuteResult::Ok;

        for command in commands {
            let result = self.execute(command, ctx);
            if result.is_wake() || (!last_result.is_wake() && result != ExecuteResult::Ok) {
                last_result = result;
            }
        }

        last_result
    }
}
