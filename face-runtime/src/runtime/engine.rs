//! # Engine 模块
//!
//! 表盘核心控制器。
//!
//! ## 执行模型
//!
//! ```text
//! handle(input, now) -> Vec<Command>
//! ```
//!
//! 1. Host 按到达顺序传入一个输入和当前墙钟采样
//! 2. Runtime 更新状态机与数字槽位
//! 3. 返回 Host 需要执行的指令（播放器、重绘、唤醒）

use std::time::Duration;

use tracing::{debug, trace};

use crate::ambient::{AMBIENT_EXIT_REGEN, AmbientModePolicy};
use crate::command::Command;
use crate::detector::compute_range;
use crate::digit::{DigitSet, SlotIndex};
use crate::input::FaceInput;
use crate::scheduler::TickScheduler;
use crate::sequencer::{SequencerState, TickRequest, TransitionSequencer};
use crate::time::{ClockReading, DisplayMode};

/// 表盘 Runtime
///
/// 唯一持有六个槽位、过渡状态机和唤醒调度的控制对象。
///
/// # 使用示例
///
/// ```ignore
/// let mut runtime = FaceRuntime::new();
///
/// let commands = runtime.handle(FaceInput::VisibilityChanged(true), clock.now());
/// for cmd in commands {
///     host.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FaceRuntime {
    digits: DigitSet,
    sequencer: TransitionSequencer,
    scheduler: TickScheduler,
    ambient: AmbientModePolicy,
    /// 表盘是否可见
    visible: bool,
    /// 是否订阅时区变化（仅可见时订阅）
    zone_subscribed: bool,
    /// 数字动画资源是否已全部加载
    assets_ready: bool,
}

impl Default for FaceRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceRuntime {
    /// 创建新的 Runtime，初始为不可见、交互模式
    pub fn new() -> Self {
        Self::with_sequencer(TransitionSequencer::new())
    }

    /// 使用指定的退场驱动时长
    pub fn with_out_duration(out_duration: Duration) -> Self {
        Self::with_sequencer(TransitionSequencer::with_out_duration(out_duration))
    }

    fn with_sequencer(sequencer: TransitionSequencer) -> Self {
        Self {
            digits: DigitSet::new(),
            sequencer,
            scheduler: TickScheduler::new(),
            ambient: AmbientModePolicy::new(),
            visible: false,
            zone_subscribed: false,
            assets_ready: false,
        }
    }

    pub fn digits(&self) -> &DigitSet {
        &self.digits
    }

    pub fn state(&self) -> SequencerState {
        self.sequencer.state()
    }

    pub fn mode(&self) -> DisplayMode {
        self.ambient.mode()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn logo_visible(&self) -> bool {
        self.ambient.logo_visible()
    }

    pub fn is_wake_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    pub fn is_zone_subscribed(&self) -> bool {
        self.zone_subscribed
    }

    pub fn assets_ready(&self) -> bool {
        self.assets_ready
    }

    /// 核心驱动函数
    ///
    /// # 参数
    ///
    /// - `input`: Host 传入的输入
    /// - `now`: 当前墙钟采样
    ///
    /// # 返回
    ///
    /// 本次输入产生的所有指令
    pub fn handle(&mut self, input: FaceInput, now: ClockReading) -> Vec<Command> {
        trace!(input = ?input, time = %now.time, "处理输入");

        match input {
            FaceInput::TimerFired => {
                if !self.scheduler.fire() {
                    debug!("忽略过期的唤醒");
                    return Vec::new();
                }
                let mut commands = self.update_digits(None, now);
                commands.extend(self.rearm(now));
                commands
            }

            FaceInput::TimeTick => self.update_digits(None, now),

            FaceInput::TimeZoneChanged => {
                if !self.zone_subscribed {
                    debug!("未订阅时区变化，忽略");
                    return Vec::new();
                }
                self.update_digits(Some(SlotIndex::HOUR_TENS), now)
            }

            FaceInput::VisibilityChanged(visible) => {
                self.visible = visible;
                self.zone_subscribed = visible;

                let mut commands = if visible {
                    self.update_digits(Some(SlotIndex::HOUR_TENS), now)
                } else {
                    Vec::new()
                };
                commands.extend(self.rearm(now));
                commands
            }

            FaceInput::AmbientModeChanged(ambient) => {
                let mut commands = if ambient {
                    self.ambient.enter(&mut self.digits)
                } else {
                    let mut commands = self.ambient.exit(&mut self.digits);
                    commands.extend(self.update_digits(Some(AMBIENT_EXIT_REGEN), now));
                    commands
                };
                commands.extend(self.rearm(now));
                commands
            }

            FaceInput::AssetsLoaded => {
                self.assets_ready = true;
                if self.mode().is_ambient() {
                    self.update_digits(Some(SlotIndex::HOUR_TENS), now)
                } else {
                    Vec::new()
                }
            }

            FaceInput::OutDriverFrame { value } => {
                self.sequencer.on_out_frame(value, &mut self.digits)
            }

            FaceInput::OutDriverComplete => self.sequencer.on_out_complete(&mut self.digits),

            FaceInput::SlotFrame { slot, progress } => {
                self.sequencer.on_slot_frame(slot, progress, &mut self.digits)
            }

            FaceInput::SlotComplete { slot } => {
                self.sequencer.on_slot_complete(slot, &mut self.digits)
            }

            FaceInput::Destroy => {
                self.zone_subscribed = false;
                self.scheduler.cancel()
            }
        }
    }

    /// 按当前时间计算过渡范围并驱动状态机
    fn update_digits(&mut self, forced: Option<SlotIndex>, now: ClockReading) -> Vec<Command> {
        if !self.assets_ready {
            debug!("数字动画资源尚未全部加载");
        }

        let mode = self.mode();
        let range = compute_range(now.time, forced, mode);
        let request = TickRequest {
            range,
            forced,
            mode,
        };
        self.sequencer.on_tick(request, now.time, &mut self.digits)
    }

    fn rearm(&mut self, now: ClockReading) -> Vec<Command> {
        self.scheduler.rearm(self.visible, self.mode(), now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::trace;
    use crate::time::TimeFields;

    fn at(h: u32, m: u32, s: u32) -> ClockReading {
        ClockReading::on_second(TimeFields::new(h, m, s).unwrap())
    }

    fn visible_runtime(now: ClockReading) -> FaceRuntime {
        let mut runtime = FaceRuntime::new();
        runtime.handle(FaceInput::AssetsLoaded, now);
        runtime.handle(FaceInput::VisibilityChanged(true), now);
        runtime
    }

    fn played_slots(commands: &[Command]) -> Vec<usize> {
        commands
            .iter()
            .filter_map(|c| match c {
                Command::Play { slot } => Some(slot.index()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_becoming_visible_regenerates_and_arms() {
        let mut runtime = FaceRuntime::new();
        let now = ClockReading::new(TimeFields::new(12, 34, 56).unwrap(), 200);

        let commands = runtime.handle(FaceInput::VisibilityChanged(true), now);
        assert_eq!(played_slots(&commands), vec![0, 1, 2, 3, 4]);
        assert_eq!(
            commands.last(),
            Some(&Command::ScheduleWake {
                delay: Duration::from_millis(800)
            })
        );
        assert!(runtime.is_visible());
        assert!(runtime.is_zone_subscribed());
        assert_eq!(runtime.digits().values(), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_hidden_cancels_then_visible_regenerates() {
        let mut runtime = visible_runtime(at(12, 34, 56));
        assert!(runtime.is_wake_pending());

        let commands = runtime.handle(FaceInput::VisibilityChanged(false), at(12, 34, 56));
        assert_eq!(commands, vec![Command::CancelWake]);
        assert!(!runtime.is_wake_pending());

        // 隐藏期间的唤醒是过期事件
        assert!(runtime.handle(FaceInput::TimerFired, at(12, 34, 57)).is_empty());

        let commands = runtime.handle(FaceInput::VisibilityChanged(true), at(12, 40, 1));
        assert_eq!(played_slots(&commands), vec![0, 1, 2, 3, 4]);
        assert!(matches!(commands.last(), Some(Command::ScheduleWake { .. })));
        assert_eq!(runtime.digits().values(), [1, 2, 4, 0, 0, 1]);
    }

    #[test]
    fn test_timer_tick_runs_two_phases() {
        let mut runtime = visible_runtime(at(12, 34, 56));

        let commands = runtime.handle(FaceInput::TimerFired, at(12, 34, 57));
        insta::assert_snapshot!(trace(&commands), @"bounds 5 0.5..1; out 0.5..1 500ms; wake +1000ms");
        assert!(matches!(runtime.state(), SequencerState::RunningOut { .. }));

        runtime.handle(FaceInput::OutDriverFrame { value: 1.0 }, at(12, 34, 57));
        let commands = runtime.handle(FaceInput::OutDriverComplete, at(12, 34, 57));
        insta::assert_snapshot!(trace(&commands), @"asset 5=7; bounds 5 0..0.5; play 5");
        assert!(runtime.state().is_idle());

        let commands = runtime.handle(
            FaceInput::SlotComplete {
                slot: SlotIndex::SECOND_ONES,
            },
            at(12, 34, 57),
        );
        assert_eq!(commands, vec![Command::RequestRedraw]);
    }

    #[test]
    fn test_ambient_round_trip() {
        let mut runtime = visible_runtime(at(12, 34, 56));

        let commands = runtime.handle(FaceInput::AmbientModeChanged(true), at(12, 34, 56));
        insta::assert_snapshot!(trace(&commands), @"logo=false; visible 4=false; visible 5=false; redraw; cancel");
        assert!(!runtime.is_wake_pending());

        // 环境模式的每分钟 tick：静态设置，无动画
        let commands = runtime.handle(FaceInput::TimeTick, at(12, 35, 0));
        assert!(played_slots(&commands).is_empty());
        assert_eq!(commands.last(), Some(&Command::RequestRedraw));
        assert_eq!(runtime.digits().values(), [1, 2, 3, 5, 0, 0]);

        // 退出环境模式：只有秒播放入场动画，时/分直接刷新
        let commands = runtime.handle(FaceInput::AmbientModeChanged(false), at(12, 37, 21));
        assert_eq!(played_slots(&commands), vec![4, 5]);
        assert_eq!(runtime.digits().values(), [1, 2, 3, 7, 2, 1]);
        assert!(!runtime.digits().slot(SlotIndex::MINUTE_ONES).playing);
        assert!(runtime.logo_visible());
        assert!(matches!(commands.last(), Some(Command::ScheduleWake { .. })));
    }

    #[test]
    fn test_ambient_interrupts_running_out() {
        let mut runtime = visible_runtime(at(12, 34, 56));
        runtime.handle(FaceInput::TimerFired, at(12, 34, 57));

        runtime.handle(FaceInput::AmbientModeChanged(true), at(12, 34, 57));
        runtime.handle(FaceInput::TimeTick, at(12, 34, 57));
        assert!(runtime.state().is_idle());

        // 被打断的退场驱动随后完成：忽略
        assert!(runtime
            .handle(FaceInput::OutDriverComplete, at(12, 34, 58))
            .is_empty());
    }

    #[test]
    fn test_time_zone_change_only_while_visible() {
        let mut runtime = FaceRuntime::new();
        assert!(runtime.handle(FaceInput::TimeZoneChanged, at(3, 0, 0)).is_empty());

        runtime.handle(FaceInput::VisibilityChanged(true), at(3, 0, 0));
        let commands = runtime.handle(FaceInput::TimeZoneChanged, at(9, 0, 0));
        assert_eq!(played_slots(&commands), vec![0, 1, 2, 3, 4]);
        assert_eq!(runtime.digits().values(), [0, 9, 0, 0, 0, 0]);
    }

    #[test]
    fn test_assets_loaded_in_ambient_refreshes() {
        let mut runtime = FaceRuntime::new();
        runtime.handle(FaceInput::AmbientModeChanged(true), at(6, 15, 0));
        assert!(!runtime.assets_ready());

        let commands = runtime.handle(FaceInput::AssetsLoaded, at(6, 15, 30));
        assert!(runtime.assets_ready());
        assert_eq!(runtime.digits().values(), [0, 6, 1, 5, 3, 0]);
        assert_eq!(commands.last(), Some(&Command::RequestRedraw));

        let mut interactive = FaceRuntime::new();
        assert!(interactive.handle(FaceInput::AssetsLoaded, at(6, 15, 30)).is_empty());
    }

    #[test]
    fn test_destroy_cancels_wake() {
        let mut runtime = visible_runtime(at(1, 1, 1));
        let commands = runtime.handle(FaceInput::Destroy, at(1, 1, 1));
        assert_eq!(commands, vec![Command::CancelWake]);
        assert!(!runtime.is_zone_subscribed());
        assert!(runtime.handle(FaceInput::Destroy, at(1, 1, 1)).is_empty());
    }
}
