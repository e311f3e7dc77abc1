//! # Animation 模块
//!
//! 数字播放器的动画实例定义。
//!
//! 核心设计：动画只关注 f32 值的时间轴变化，由 [`AnimationTarget`] 标识写回位置。

use std::fmt;

use face_runtime::SlotIndex;

use super::EasingFunction;

/// 动画 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(pub u64);

impl AnimationId {
    /// 创建新的动画 ID
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

/// 动画目标
///
/// 标识动画的当前值写回到哪里。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationTarget {
    /// 六个槽位共享的退场驱动
    OutDriver,
    /// 某个槽位自己的入场播放
    Slot(SlotIndex),
}

impl AnimationTarget {
    /// 获取目标描述（用于日志）
    pub fn description(&self) -> String {
        match self {
            Self::OutDriver => "out_driver".to_string(),
            Self::Slot(slot) => format!("slot:{}", slot),
        }
    }
}

impl fmt::Display for AnimationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// 动画状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    /// 尚未推进过
    #[default]
    Pending,
    /// 正在播放
    Playing,
    /// 已完成
    Completed,
}

impl AnimationState {
    /// 是否已结束
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// 动画实例
///
/// 管理单个 f32 值从 `from` 到 `to` 在 `duration` 时间内的变化。
#[derive(Debug, Clone)]
pub struct Animation {
    /// 动画 ID
    pub id: AnimationId,
    /// 动画目标
    pub target: AnimationTarget,
    /// 起始值
    pub from: f32,
    /// 目标值
    pub to: f32,
    /// 动画时长（秒）
    pub duration: f32,
    /// 缓动函数
    pub easing: EasingFunction,
    /// 当前状态
    pub state: AnimationState,
    /// 当前进度（0.0 - 1.0，已应用缓动）
    pub progress: f32,
    /// 已经过的时间
    elapsed: f32,
}

impl Animation {
    /// 创建新的动画
    ///
    /// 时长为 0 的动画仍然需要一次 `update` 才会结束，
    /// 这样播放器总能为它发出最后一帧与完成事件。
    pub fn new(id: AnimationId, target: AnimationTarget, from: f32, to: f32, duration: f32) -> Self {
        Self {
            id,
            target,
            from,
            to,
            duration: duration.max(0.0),
            easing: EasingFunction::default(),
            state: AnimationState::Pending,
            progress: 0.0,
            elapsed: 0.0,
        }
    }

    /// 设置缓动函数
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// 更新动画
    ///
    /// # 返回
    /// - `true`: 动画仍在进行中
    /// - `false`: 动画已结束
    pub fn update(&mut self, dt: f32) -> bool {
        match self.state {
            AnimationState::Pending | AnimationState::Playing => {
                self.state = AnimationState::Playing;
                self.elapsed += dt.max(0.0);
                self.update_playing()
            }
            AnimationState::Completed => false,
        }
    }

    fn update_playing(&mut self) -> bool {
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            self.progress = 1.0;
            self.state = AnimationState::Completed;
            return false;
        }

        self.progress = self.easing.apply(self.elapsed / self.duration);
        true
    }

    /// 获取当前值
    pub fn current_value(&self) -> f32 {
        self.from + (self.to - self.from) * self.progress
    }

    /// 是否正在播放
    pub fn is_playing(&self) -> bool {
        self.state == AnimationState::Playing
    }

    /// 是否已结束
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }
}
