//! # Animation 模块
//!
//! 数字播放器使用的动画时间轴。
//!
//! ## 核心设计理念
//!
//! 动画只负责 **时间轴管理**：
//! - 知道某个 f32 值从 A 到 B 需要在 duration 内变化
//! - 维护当前值，由播放器决定写到哪个槽位
//!
//! ## 核心概念
//!
//! - `Animation`: 单个动画实例
//! - `AnimationTarget`: 共享退场驱动或某个槽位
//! - `EasingFunction`: 缓动函数

mod animation;
mod easing;

pub use animation::{Animation, AnimationId, AnimationState, AnimationTarget};
pub use easing::EasingFunction;
