//! # Player 模块
//!
//! 数字动画播放器：六个槽位各自的入场播放，加上一个共享的退场驱动。
//!
//! ## 设计说明
//!
//! - 槽位只保存播放区间 `[min, max]`、当前进度和可见性
//! - 退场驱动不直接写槽位进度，只产出 `OutDriverFrame`，
//!   进度由 Runtime 通过 `SetProgress` 回写
//! - `update` 产出的事件顺序固定：退场驱动最后一帧在完成事件之前

use std::time::Duration;

use face_runtime::{FaceInput, SLOT_COUNT, SlotIndex};
use tracing::{debug, trace};

use crate::renderer::animation::{Animation, AnimationId, AnimationTarget, EasingFunction};

/// 单个槽位的播放状态
#[derive(Debug, Clone)]
pub struct SlotPlayback {
    /// 当前加载的数字动画资源
    pub asset: Option<u8>,
    /// 播放区间下界
    pub min: f32,
    /// 播放区间上界
    pub max: f32,
    /// 当前进度
    pub progress: f32,
    /// 是否可见
    pub visible: bool,
    animation: Option<Animation>,
}

impl Default for SlotPlayback {
    fn default() -> Self {
        Self {
            asset: None,
            min: 0.0,
            max: 1.0,
            progress: 0.0,
            visible: true,
            animation: None,
        }
    }
}

impl SlotPlayback {
    /// 入场动画是否正在播放
    pub fn is_playing(&self) -> bool {
        self.animation.is_some()
    }

    fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// 数字动画播放器
#[derive(Debug, Clone)]
pub struct DigitPlayer {
    slots: [SlotPlayback; SLOT_COUNT],
    out_driver: Option<Animation>,
    out_easing: EasingFunction,
    in_duration: Duration,
    in_easing: EasingFunction,
    next_id: u64,
}

impl DigitPlayer {
    /// 创建播放器
    ///
    /// - `in_duration`: 槽位入场播放时长
    pub fn new(in_duration: Duration) -> Self {
        Self {
            slots: Default::default(),
            out_driver: None,
            out_easing: EasingFunction::EaseInOutSine,
            in_duration,
            in_easing: EasingFunction::Linear,
            next_id: 0,
        }
    }

    /// 设置缓动函数
    pub fn with_easing(mut self, out_easing: EasingFunction, in_easing: EasingFunction) -> Self {
        self.out_easing = out_easing;
        self.in_easing = in_easing;
        self
    }

    pub fn slot(&self, slot: SlotIndex) -> &SlotPlayback {
        &self.slots[slot.index()]
    }

    pub fn slots(&self) -> &[SlotPlayback; SLOT_COUNT] {
        &self.slots
    }

    /// 退场驱动是否正在运行
    pub fn is_out_driver_running(&self) -> bool {
        self.out_driver.is_some()
    }

    /// 是否有任何动画在运行
    pub fn is_animating(&self) -> bool {
        self.out_driver.is_some() || self.slots.iter().any(SlotPlayback::is_playing)
    }

    fn next_animation_id(&mut self) -> AnimationId {
        self.next_id += 1;
        AnimationId::new(self.next_id)
    }

    /// 加载数字动画资源
    pub fn set_asset(&mut self, slot: SlotIndex, digit: u8) {
        self.slots[slot.index()].asset = Some(digit);
    }

    /// 设置播放区间，当前进度被限制到新区间内
    pub fn set_playback_bounds(&mut self, slot: SlotIndex, start: f32, end: f32) {
        let (min, max) = if start <= end { (start, end) } else { (end, start) };
        let playback = &mut self.slots[slot.index()];
        if playback.is_playing() {
            debug!(slot = slot.index(), min, max, "入场播放期间改写播放区间");
        }
        playback.min = min.clamp(0.0, 1.0);
        playback.max = max.clamp(0.0, 1.0);
        playback.progress = playback.clamp(playback.progress);
    }

    /// 直接设置进度（限制在播放区间内）
    pub fn set_progress(&mut self, slot: SlotIndex, value: f32) {
        let playback = &mut self.slots[slot.index()];
        playback.progress = playback.clamp(value);
    }

    /// 从区间下界播放到上界
    pub fn play(&mut self, slot: SlotIndex) {
        let id = self.next_animation_id();
        let duration = self.in_duration.as_secs_f32();
        let easing = self.in_easing;
        let playback = &mut self.slots[slot.index()];

        playback.progress = playback.min;
        playback.animation = Some(
            Animation::new(
                id,
                AnimationTarget::Slot(slot),
                playback.min,
                playback.max,
                duration,
            )
            .with_easing(easing),
        );
        trace!(slot = slot.index(), min = playback.min, max = playback.max, "槽位开始播放");
    }

    /// 启动（或重启）共享退场驱动
    pub fn start_out_driver(&mut self, from: f32, to: f32, duration: Duration) {
        if self.out_driver.is_some() {
            debug!("重启退场驱动");
        }
        let id = self.next_animation_id();
        self.out_driver = Some(
            Animation::new(id, AnimationTarget::OutDriver, from, to, duration.as_secs_f32())
                .with_easing(self.out_easing),
        );
    }

    /// 显示/隐藏槽位
    pub fn set_visible(&mut self, slot: SlotIndex, visible: bool) {
        self.slots[slot.index()].visible = visible;
    }

    /// 推进所有动画，返回产生的播放器事件
    pub fn update(&mut self, dt: Duration) -> Vec<FaceInput> {
        let dt = dt.as_secs_f32();
        let mut events = Vec::new();

        if let Some(driver) = self.out_driver.as_mut() {
            let running = driver.update(dt);
            events.push(FaceInput::OutDriverFrame {
                value: driver.current_value(),
            });
            if !running {
                trace!(anim = %driver.target, id = driver.id.0, "动画完成");
                self.out_driver = None;
                events.push(FaceInput::OutDriverComplete);
            }
        }

        for slot in SlotIndex::ALL {
            let playback = &mut self.slots[slot.index()];
            let Some(animation) = playback.animation.as_mut() else {
                continue;
            };

            let running = animation.update(dt);
            let value = animation.current_value();
            let (target, id) = (animation.target, animation.id);
            playback.progress = playback.clamp(value);
            events.push(FaceInput::SlotFrame {
                slot,
                progress: playback.progress,
            });
            if !running {
                trace!(anim = %target, id = id.0, "动画完成");
                playback.animation = None;
                events.push(FaceInput::SlotComplete { slot });
            }
        }

        events
    }
}
