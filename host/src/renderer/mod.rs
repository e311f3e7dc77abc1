//! # Renderer 模块
//!
//! 渲染系统，负责把渲染状态合成为表盘帧。
//!
//! ## 绘制顺序
//!
//! 1. 整体清为背景
//! 2. 装饰层（logo、分隔符）
//! 3. 六个数字槽位
//!
//! 重绘请求在一帧内合并：无论请求多少次，每帧最多绘制一次。

use tracing::trace;

pub mod animation;
pub mod render_state;
mod text_renderer;

pub use animation::{Animation, AnimationId, AnimationState, AnimationTarget, EasingFunction};
pub use render_state::{RenderState, SlotSprite};
pub use text_renderer::{FRAME_WIDTH, TextRenderer, progress_weight};

/// 渲染器
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    /// 文本渲染器
    pub text_renderer: TextRenderer,
    /// 本帧是否有待处理的重绘请求
    redraw_requested: bool,
    /// 已绘制的帧数
    draws: u64,
}

impl Renderer {
    /// 创建新的渲染器
    pub fn new(text_renderer: TextRenderer) -> Self {
        Self {
            text_renderer,
            redraw_requested: false,
            draws: 0,
        }
    }

    /// 请求重绘（合并到下一帧）
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    pub fn is_redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    /// 消费本帧的重绘请求
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// 已绘制的帧数
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// 绘制一帧
    pub fn draw(&mut self, state: &RenderState) -> String {
        self.draws += 1;
        let frame = self.text_renderer.compose(state);
        trace!(draws = self.draws, frame = %frame, "绘制");
        frame
    }

    /// 如果本帧有重绘请求则绘制
    pub fn render_frame(&mut self, state: &RenderState) -> Option<String> {
        if self.take_redraw() {
            Some(self.draw(state))
        } else {
            None
        }
    }
}
