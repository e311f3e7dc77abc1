//! # State 模块
//!
//! 定义 Host 层的核心状态结构。

use std::time::Duration;

/// Host 层状态
#[derive(Debug)]
pub struct HostState {
    /// 是否正在运行
    pub running: bool,
    /// Host 单调时间线（自启动以来经过的时间）
    pub elapsed: Duration,
    /// 已推进的帧数
    pub frames: u64,
}

impl HostState {
    /// 创建新的 Host 状态
    pub fn new() -> Self {
        Self {
            running: true,
            elapsed: Duration::ZERO,
            frames: 0,
        }
    }

    /// 停止运行
    pub fn stop(&mut self) {
        self.running = false;
    }
}

impl Default for HostState {
    fn default() -> Self {
        Self::new()
    }
}
