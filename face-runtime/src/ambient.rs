//! # Ambient 模块
//!
//! 环境（低功耗）模式下的显示策略：隐藏 logo 与秒，停止动画。
//! 退出时由 Runtime 从秒十位开始强制重建，时、分在环境模式下一直保持最新。

use tracing::debug;

use crate::command::Command;
use crate::digit::{DigitSet, SlotIndex};
use crate::time::DisplayMode;

/// 退出环境模式时强制重建的起始槽位
pub const AMBIENT_EXIT_REGEN: SlotIndex = SlotIndex::SECOND_TENS;

/// 环境模式策略
#[derive(Debug, Clone)]
pub struct AmbientModePolicy {
    mode: DisplayMode,
    logo_visible: bool,
}

impl Default for AmbientModePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl AmbientModePolicy {
    pub fn new() -> Self {
        Self {
            mode: DisplayMode::Interactive,
            logo_visible: true,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn logo_visible(&self) -> bool {
        self.logo_visible
    }

    /// 进入环境模式：隐藏 logo 与秒槽位并请求重绘
    pub fn enter(&mut self, digits: &mut DigitSet) -> Vec<Command> {
        self.mode = DisplayMode::Ambient;
        debug!("进入环境模式");
        let mut commands = self.show_decorations(false, digits);
        commands.push(Command::RequestRedraw);
        commands
    }

    /// 退出环境模式：恢复 logo 与秒槽位
    ///
    /// 返回的指令之后，调用方需以 [`AMBIENT_EXIT_REGEN`] 强制重建。
    pub fn exit(&mut self, digits: &mut DigitSet) -> Vec<Command> {
        self.mode = DisplayMode::Interactive;
        debug!("退出环境模式");
        self.show_decorations(true, digits)
    }

    fn show_decorations(&mut self, visible: bool, digits: &mut DigitSet) -> Vec<Command> {
        self.logo_visible = visible;
        let mut commands = vec![Command::SetLogoVisible { visible }];
        for slot in SlotIndex::SECONDS {
            digits.slot_mut(slot).visible = visible;
            commands.push(Command::SetSlotVisible { slot, visible });
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::trace;

    #[test]
    fn test_enter_hides_seconds_and_logo() {
        let mut policy = AmbientModePolicy::new();
        let mut digits = DigitSet::new();

        let commands = policy.enter(&mut digits);
        insta::assert_snapshot!(trace(&commands), @"logo=false; visible 4=false; visible 5=false; redraw");
        assert!(policy.mode().is_ambient());
        assert!(!policy.logo_visible());
        assert!(!digits.slot(SlotIndex::SECOND_TENS).visible);
        assert!(digits.slot(SlotIndex::MINUTE_ONES).visible);
    }

    #[test]
    fn test_exit_restores_visibility() {
        let mut policy = AmbientModePolicy::new();
        let mut digits = DigitSet::new();
        policy.enter(&mut digits);

        let commands = policy.exit(&mut digits);
        insta::assert_snapshot!(trace(&commands), @"logo=true; visible 4=true; visible 5=true");
        assert_eq!(policy.mode(), DisplayMode::Interactive);
        assert!(digits.iter().all(|(_, slot)| slot.visible));
    }
}
