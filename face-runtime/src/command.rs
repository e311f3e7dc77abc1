//! # Command 模块
//!
//! 定义 Runtime 向 Host 发出的所有指令。
//! Command 是 Runtime 与动画播放器、重绘表面、唤醒定时器之间的**唯一通信方式**。
//!
//! ## 设计原则
//!
//! - **声明式**：Command 描述"做什么"，不描述"怎么做"
//! - **无副作用**：Command 本身不执行任何操作
//! - **播放器无关**：动画资源只通过数字值引用

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::digit::SlotIndex;

/// Runtime 向 Host 发出的指令
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// 为槽位指定数字动画资源
    SetAsset { slot: SlotIndex, digit: u8 },

    /// 设置槽位的播放区间
    SetPlaybackBounds { slot: SlotIndex, start: f32, end: f32 },

    /// 直接设置槽位进度（无动画）
    SetProgress { slot: SlotIndex, value: f32 },

    /// 槽位按自己的播放区间独立播放
    Play { slot: SlotIndex },

    /// 启动（或重启）共享的退场驱动动画
    StartOutDriver {
        from: f32,
        to: f32,
        duration: Duration,
    },

    /// 显示/隐藏槽位
    SetSlotVisible { slot: SlotIndex, visible: bool },

    /// 显示/隐藏装饰元素（logo）
    SetLogoVisible { visible: bool },

    /// 请求重绘（Host 合并为每帧至多一次）
    RequestRedraw,

    /// 在 `delay` 后触发一次性唤醒
    ScheduleWake { delay: Duration },

    /// 取消尚未触发的唤醒
    CancelWake,
}

impl Command {
    /// 是否为动画播放器指令
    pub fn is_player_command(&self) -> bool {
        matches!(
            self,
            Self::SetAsset { .. }
                | Self::SetPlaybackBounds { .. }
                | Self::SetProgress { .. }
                | Self::Play { .. }
                | Self::StartOutDriver { .. }
                | Self::SetSlotVisible { .. }
        )
    }

    /// 指令作用的槽位（如果有）
    pub fn slot(&self) -> Option<SlotIndex> {
        match self {
            Self::SetAsset { slot, .. }
            | Self::SetPlaybackBounds { slot, .. }
            | Self::SetProgress { slot, .. }
            | Self::Play { slot }
            | Self::SetSlotVisible { slot, .. } => Some(*slot),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetAsset { slot, digit } => write!(f, "asset {slot}={digit}"),
            Self::SetPlaybackBounds { slot, start, end } => {
                write!(f, "bounds {slot} {start}..{end}")
            }
            Self::SetProgress { slot, value } => write!(f, "progress {slot}={value}"),
            Self::Play { slot } => write!(f, "play {slot}"),
            Self::StartOutDriver { from, to, duration } => {
                write!(f, "out {from}..{to} {}ms", duration.as_millis())
            }
            Self::SetSlotVisible { slot, visible } => write!(f, "visible {slot}={visible}"),
            Self::SetLogoVisible { visible } => write!(f, "logo={visible}"),
            Self::RequestRedraw => write!(f, "redraw"),
            Self::ScheduleWake { delay } => write!(f, "wake +{}ms", delay.as_millis()),
            Self::CancelWake => write!(f, "cancel"),
        }
    }
}

/// 把一组指令格式化为单行轨迹，便于日志和快照测试
pub fn trace(commands: &[Command]) -> String {
    commands
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_serialization() {
        let cmd = Command::SetPlaybackBounds {
            slot: SlotIndex::SECOND_ONES,
            start: 0.5,
            end: 1.0,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let deserialized: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, deserialized);
    }

    #[test]
    fn test_command_classification() {
        assert!(Command::Play { slot: SlotIndex::HOUR_TENS }.is_player_command());
        assert!(!Command::RequestRedraw.is_player_command());
        assert!(!Command::CancelWake.is_player_command());
        assert_eq!(
            Command::SetProgress {
                slot: SlotIndex::MINUTE_ONES,
                value: 0.5
            }
            .slot(),
            Some(SlotIndex::MINUTE_ONES)
        );
        assert_eq!(Command::SetLogoVisible { visible: true }.slot(), None);
    }

    #[test]
    fn test_trace_format() {
        let commands = vec![
            Command::SetPlaybackBounds {
                slot: SlotIndex::SECOND_ONES,
                start: 0.5,
                end: 1.0,
            },
            Command::StartOutDriver {
                from: 0.5,
                to: 1.0,
                duration: Duration::from_millis(500),
            },
            Command::ScheduleWake {
                delay: Duration::from_millis(250),
            },
        ];
        insta::assert_snapshot!(trace(&commands), @"bounds 5 0.5..1; out 0.5..1 500ms; wake +250ms");
    }
}
