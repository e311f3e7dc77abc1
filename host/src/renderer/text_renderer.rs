//! # TextRenderer 模块
//!
//! 把一帧渲染状态合成为一行文本：`L HH:MM:SS`。
//!
//! 每个槽位按进度权重 `1 - |p - 0.5| * 2` 选择字形：
//! 权重 ≥ 0.5 画数字本身，介于 0 与 0.5 之间画淡出字形，为 0 时留空。

use face_runtime::SlotIndex;

use super::RenderState;

/// 淡入/淡出中间帧的字形
const FADE_GLYPH: char = '.';

/// 一帧的字符宽度：logo、空格、HH、分隔符、MM、分隔符、SS
pub const FRAME_WIDTH: usize = 10;

/// 槽位在帧中的列
const SLOT_COLUMNS: [usize; 6] = [2, 3, 5, 6, 8, 9];
const LOGO_COLUMN: usize = 0;
const SEPARATOR_COLUMNS: [usize; 2] = [4, 7];

/// 文本渲染器
#[derive(Debug, Clone)]
pub struct TextRenderer {
    background: char,
    logo: char,
    separator: char,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(' ', '*', ':')
    }
}

impl TextRenderer {
    pub fn new(background: char, logo: char, separator: char) -> Self {
        Self {
            background,
            logo,
            separator,
        }
    }

    /// 合成一帧
    ///
    /// 先整体清为背景字形，再依次绘制 logo、分隔符与六个槽位。
    pub fn compose(&self, state: &RenderState) -> String {
        let mut frame = [self.background; FRAME_WIDTH];

        if state.logo_visible {
            frame[LOGO_COLUMN] = self.logo;
        }

        frame[SEPARATOR_COLUMNS[0]] = self.separator;
        // 秒被隐藏时（环境模式）不画第二个分隔符
        if state.slot(SlotIndex::SECOND_TENS).visible {
            frame[SEPARATOR_COLUMNS[1]] = self.separator;
        }

        for (sprite, column) in state.slots.iter().zip(SLOT_COLUMNS) {
            if !sprite.visible {
                continue;
            }
            if let Some(digit) = sprite.digit {
                frame[column] = self.glyph(digit, sprite.progress);
            }
        }

        frame.iter().collect()
    }

    fn glyph(&self, digit: u8, progress: f32) -> char {
        let weight = progress_weight(progress);
        if weight >= 0.5 {
            char::from_digit(u32::from(digit), 10).unwrap_or(self.background)
        } else if weight > f32::EPSILON {
            FADE_GLYPH
        } else {
            self.background
        }
    }
}

/// 进度对应的显示权重，0.5 处为 1，两端为 0
pub fn progress_weight(progress: f32) -> f32 {
    (1.0 - (progress.clamp(0.0, 1.0) - 0.5).abs() * 2.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::SlotSprite;

    fn state(digits: [u8; 6], progress: f32) -> RenderState {
        let mut state = RenderState::new();
        for (sprite, digit) in state.slots.iter_mut().zip(digits) {
            *sprite = SlotSprite {
                digit: Some(digit),
                progress,
                visible: true,
            };
        }
        state
    }

    #[test]
    fn test_progress_weight() {
        assert_eq!(progress_weight(0.5), 1.0);
        assert_eq!(progress_weight(0.0), 0.0);
        assert_eq!(progress_weight(1.0), 0.0);
        assert_eq!(progress_weight(0.75), 0.5);
    }

    #[test]
    fn test_compose_full_face() {
        let renderer = TextRenderer::default();
        let frame = renderer.compose(&state([1, 2, 3, 4, 5, 6], 0.5));
        insta::assert_snapshot!(frame, @"* 12:34:56");
    }

    #[test]
    fn test_compose_fading_slots() {
        let renderer = TextRenderer::default();
        let mut state = state([1, 2, 3, 4, 5, 6], 0.5);
        state.slots[5].progress = 0.9;
        state.slots[4].progress = 1.0;
        insta::assert_snapshot!(renderer.compose(&state), @"* 12:34: .");
    }

    #[test]
    fn test_compose_ambient() {
        let renderer = TextRenderer::new('-', '@', ':');
        let mut state = state([0, 9, 0, 5, 0, 0], 0.5);
        state.logo_visible = false;
        state.slots[4].visible = false;
        state.slots[5].visible = false;
        insta::assert_snapshot!(renderer.compose(&state), @"--09:05---");
    }

    #[test]
    fn test_unloaded_slots_stay_background() {
        let renderer = TextRenderer::default();
        let frame = renderer.compose(&RenderState::new());
        assert_eq!(frame, "*   :  :  ");
        assert_eq!(frame.chars().count(), FRAME_WIDTH);
    }
}
