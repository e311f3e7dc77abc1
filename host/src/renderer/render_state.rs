//! # RenderState 模块
//!
//! 渲染状态：一帧需要绘制的全部元素的快照。

use face_runtime::{SLOT_COUNT, SlotIndex};

use crate::player::DigitPlayer;

/// 单个槽位的渲染快照
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotSprite {
    /// 当前数字资源（未加载时为 None）
    pub digit: Option<u8>,
    /// 动画进度，0.5 为完全显示
    pub progress: f32,
    pub visible: bool,
}

impl Default for SlotSprite {
    fn default() -> Self {
        Self {
            digit: None,
            progress: 0.0,
            visible: true,
        }
    }
}

/// 渲染状态
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    /// 装饰元素（logo）是否可见
    pub logo_visible: bool,
    /// 六个槽位
    pub slots: [SlotSprite; SLOT_COUNT],
}

impl RenderState {
    /// 创建新的渲染状态，logo 默认可见
    pub fn new() -> Self {
        Self {
            logo_visible: true,
            slots: Default::default(),
        }
    }

    pub fn set_logo_visible(&mut self, visible: bool) {
        self.logo_visible = visible;
    }

    pub fn slot(&self, slot: SlotIndex) -> &SlotSprite {
        &self.slots[slot.index()]
    }

    /// 从播放器同步槽位快照
    pub fn sync_from_player(&mut self, player: &DigitPlayer) {
        for (sprite, playback) in self.slots.iter_mut().zip(player.slots()) {
            *sprite = SlotSprite {
                digit: playback.asset,
                progress: playback.progress,
                visible: playback.visible,
            };
        }
    }
}
