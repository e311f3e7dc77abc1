//! # 播放器相关命令执行
//!
//! 处理 SetAsset、SetPlaybackBounds、SetProgress、Play、StartOutDriver、SetSlotVisible。

use face_runtime::Command;
use tracing::warn;

use super::CommandExecutor;
use super::types::ExecuteResult;
use crate::player::DigitPlayer;

impl CommandExecutor {
    /// 执行播放器指令
    pub(super) fn execute_player_command(
        &mut self,
        command: &Command,
        player: &mut DigitPlayer,
    ) -> ExecuteResult {
        match *command {
            Command::SetAsset { slot, digit } => {
                if digit > 9 {
                    warn!(slot = slot.index(), digit, "无效的数字资源");
                    return ExecuteResult::Ok;
                }
                player.set_asset(slot, digit);
            }
            Command::SetPlaybackBounds { slot, start, end } => {
                player.set_playback_bounds(slot, start, end);
            }
            Command::SetProgress { slot, value } => player.set_progress(slot, value),
            Command::Play { slot } => player.play(slot),
            Command::StartOutDriver { from, to, duration } => {
                player.start_out_driver(from, to, duration);
            }
            Command::SetSlotVisible { slot, visible } => player.set_visible(slot, visible),
            _ => {}
        }
        ExecuteResult::Ok
    }
}
