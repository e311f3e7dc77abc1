//! 渲染逻辑

use super::FaceHost;
use crate::clock::TimeSource;

impl<C: TimeSource> FaceHost<C> {
    /// 有重绘请求时从播放器同步快照并绘制一帧
    pub(super) fn draw(&mut self) -> Option<String> {
        if !self.renderer.is_redraw_requested() {
            return None;
        }
        self.render_state.sync_from_player(&self.player);
        self.renderer.render_frame(&self.render_state)
    }
}
