//! # Input 模块
//!
//! 定义 Host 向 Runtime 传递的输入事件。
//!
//! ## 设计说明
//!
//! - 定时器触发、可见性/环境模式变化、时区变化、播放器帧与完成事件都以
//!   `FaceInput` 的形式进入 Runtime
//! - Host 按到达顺序逐个传入，Runtime 从不并发处理两个输入
//! - 墙钟时间不属于输入本身，由 Host 在每次调用时一并传入

use serde::{Deserialize, Serialize};

use crate::digit::SlotIndex;

/// Host 向 Runtime 传递的输入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FaceInput {
    /// 一次性唤醒到期（逐秒 tick）
    TimerFired,

    /// 系统的低频时间 tick（环境模式下每分钟一次）
    TimeTick,

    /// 时区发生变化
    TimeZoneChanged,

    /// 表盘可见性变化
    VisibilityChanged(bool),

    /// 环境模式变化
    AmbientModeChanged(bool),

    /// 十个数字动画资源全部加载完成
    AssetsLoaded,

    /// 共享退场驱动的帧更新
    OutDriverFrame { value: f32 },

    /// 共享退场驱动播放完成（保证在最后一帧之后）
    OutDriverComplete,

    /// 槽位自己的入场动画帧更新
    SlotFrame { slot: SlotIndex, progress: f32 },

    /// 槽位自己的入场动画播放完成
    SlotComplete { slot: SlotIndex },

    /// 表盘销毁
    Destroy,
}

impl FaceInput {
    /// 是否来自动画播放器
    pub fn is_player_event(&self) -> bool {
        matches!(
            self,
            Self::OutDriverFrame { .. }
                | Self::OutDriverComplete
                | Self::SlotFrame { .. }
                | Self::SlotComplete { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_serialization() {
        let input = FaceInput::SlotFrame {
            slot: SlotIndex::SECOND_TENS,
            progress: 0.25,
        };
        let json = serde_json::to_string(&input).unwrap();
        let deserialized: FaceInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, deserialized);
    }

    #[test]
    fn test_player_event_classification() {
        assert!(FaceInput::OutDriverComplete.is_player_event());
        assert!(!FaceInput::TimerFired.is_player_event());
        assert!(!FaceInput::VisibilityChanged(true).is_player_event());
    }
}
