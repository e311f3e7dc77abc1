//! # Sequencer 模块
//!
//! 两阶段过渡状态机：退场（out）→ 入场（in）。
//!
//! ## 状态转换
//!
//! ```text
//! Idle ──tick──► RunningOut ──驱动完成──► RunningIn ──发出入场播放──► Idle
//!   ▲                │
//!   └── 环境模式 / 强制重建（直接设置，不经过 RunningOut）
//! ```
//!
//! 退场阶段由一个共享驱动动画统一推进范围内的所有槽位；入场阶段每个槽位
//! 独立播放，Sequencer 发出播放指令后立即回到 Idle，不等待各槽位完成。
//!
//! ## 时序假设
//!
//! 入场动画被假定在下一次 tick 的退场开始前结束（入场时长 + 退场时长小于
//! 一秒）。若不成立，后写入的播放区间生效，并记录一条 debug 日志。

use std::time::Duration;

use tracing::debug;

use crate::command::Command;
use crate::digit::{DigitRange, DigitSet, PROGRESS_MID, SlotIndex};
use crate::time::{DisplayMode, TimeFields};

/// 退场驱动的默认时长
pub const DEFAULT_OUT_DURATION: Duration = Duration::from_millis(500);

/// 退场播放区间：中点 → 结束
const OUT_BOUNDS: (f32, f32) = (PROGRESS_MID, 1.0);

/// 入场播放区间：开始 → 中点
const IN_BOUNDS: (f32, f32) = (0.0, PROGRESS_MID);

/// Sequencer 状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencerState {
    /// 空闲
    #[default]
    Idle,
    /// 共享驱动正在推进退场动画
    RunningOut {
        range: DigitRange,
        /// 入场阶段要显示的时间
        target: TimeFields,
    },
    /// 正在发出入场播放（瞬时状态）
    RunningIn { range: DigitRange },
}

impl SequencerState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// 当前过渡的范围
    pub fn range(&self) -> Option<DigitRange> {
        match self {
            Self::Idle => None,
            Self::RunningOut { range, .. } | Self::RunningIn { range } => Some(*range),
        }
    }
}

/// 一次 tick 的请求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRequest {
    pub range: DigitRange,
    pub forced: Option<SlotIndex>,
    pub mode: DisplayMode,
}

/// 过渡状态机
#[derive(Debug, Clone)]
pub struct TransitionSequencer {
    state: SequencerState,
    out_duration: Duration,
}

impl Default for TransitionSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionSequencer {
    pub fn new() -> Self {
        Self::with_out_duration(DEFAULT_OUT_DURATION)
    }

    pub fn with_out_duration(out_duration: Duration) -> Self {
        Self {
            state: SequencerState::Idle,
            out_duration,
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn out_duration(&self) -> Duration {
        self.out_duration
    }

    /// 处理一次 tick
    pub fn on_tick(
        &mut self,
        request: TickRequest,
        time: TimeFields,
        digits: &mut DigitSet,
    ) -> Vec<Command> {
        match (request.mode, request.forced) {
            (DisplayMode::Ambient, _) => self.set_static(time, digits),
            (DisplayMode::Interactive, Some(_)) => self.regenerate(request.range, time, digits),
            (DisplayMode::Interactive, None) => self.start_out(request.range, time, digits),
        }
    }

    /// 环境模式：直接设置数字，进度固定在中点，不播放动画
    fn set_static(&mut self, time: TimeFields, digits: &mut DigitSet) -> Vec<Command> {
        self.state = SequencerState::Idle;
        digits.set_digits(time);

        let mut commands = assign_all(digits);
        for slot in SlotIndex::ALL {
            let state = digits.slot_mut(slot);
            state.progress = PROGRESS_MID;
            state.playing = false;
            commands.push(Command::SetProgress {
                slot,
                value: PROGRESS_MID,
            });
        }
        commands.push(Command::RequestRedraw);

        debug!(time = %time, "环境模式: 静态设置数字");
        commands
    }

    /// 强制重建：全部数字直接更新，范围内槽位只播放入场动画
    fn regenerate(
        &mut self,
        range: DigitRange,
        time: TimeFields,
        digits: &mut DigitSet,
    ) -> Vec<Command> {
        self.state = SequencerState::Idle;
        digits.set_digits(time);

        let mut commands = assign_all(digits);
        for slot in range.iter() {
            let state = digits.slot_mut(slot);
            state.bounds = IN_BOUNDS;
            state.progress = IN_BOUNDS.0;
            state.playing = true;
            commands.push(Command::SetPlaybackBounds {
                slot,
                start: IN_BOUNDS.0,
                end: IN_BOUNDS.1,
            });
            commands.push(Command::SetProgress {
                slot,
                value: IN_BOUNDS.0,
            });
            commands.push(Command::Play { slot });
        }

        debug!(range = %range, time = %time, "强制重建");
        commands
    }

    /// 逐秒 tick：进入 RunningOut，启动共享退场驱动
    fn start_out(
        &mut self,
        range: DigitRange,
        time: TimeFields,
        digits: &mut DigitSet,
    ) -> Vec<Command> {
        if let SequencerState::RunningOut { range: previous, .. } = self.state {
            debug!(previous = %previous, range = %range, "退场驱动被重启");
        }

        let mut commands = Vec::with_capacity(range.len() + 1);
        for slot in range.iter() {
            let state = digits.slot_mut(slot);
            if state.playing {
                debug!(slot = %slot, "入场动画尚未结束，新的退场区间覆盖旧区间");
            }
            state.bounds = OUT_BOUNDS;
            commands.push(Command::SetPlaybackBounds {
                slot,
                start: OUT_BOUNDS.0,
                end: OUT_BOUNDS.1,
            });
        }
        commands.push(Command::StartOutDriver {
            from: OUT_BOUNDS.0,
            to: OUT_BOUNDS.1,
            duration: self.out_duration,
        });

        self.state = SequencerState::RunningOut {
            range,
            target: time,
        };
        debug!(range = %range, time = %time, "进入退场阶段");
        commands
    }

    /// 共享退场驱动的帧更新
    pub fn on_out_frame(&mut self, value: f32, digits: &mut DigitSet) -> Vec<Command> {
        let SequencerState::RunningOut { range, .. } = self.state else {
            debug!(state = ?self.state, "忽略过期的退场帧");
            return Vec::new();
        };

        let mut commands = Vec::with_capacity(range.len() + 1);
        for slot in range.iter() {
            digits.slot_mut(slot).progress = value;
            commands.push(Command::SetProgress { slot, value });
        }
        commands.push(Command::RequestRedraw);
        commands
    }

    /// 共享退场驱动完成：切换数字并发出入场播放
    pub fn on_out_complete(&mut self, digits: &mut DigitSet) -> Vec<Command> {
        let SequencerState::RunningOut { range, target } = self.state else {
            debug!(state = ?self.state, "忽略过期的退场完成事件");
            return Vec::new();
        };

        self.state = SequencerState::RunningIn { range };
        digits.set_digits_in(target, range);

        let mut commands = Vec::with_capacity(range.len() * 3);
        for slot in range.iter() {
            let state = digits.slot_mut(slot);
            state.bounds = IN_BOUNDS;
            state.progress = IN_BOUNDS.0;
            state.playing = true;
            commands.push(Command::SetAsset {
                slot,
                digit: state.value,
            });
        }
        for slot in range.iter() {
            commands.push(Command::SetPlaybackBounds {
                slot,
                start: IN_BOUNDS.0,
                end: IN_BOUNDS.1,
            });
            commands.push(Command::Play { slot });
        }

        self.state = SequencerState::Idle;
        debug!(range = %range, time = %target, "入场动画已发出");
        commands
    }

    /// 槽位自己的入场动画帧
    pub fn on_slot_frame(
        &mut self,
        slot: SlotIndex,
        progress: f32,
        digits: &mut DigitSet,
    ) -> Vec<Command> {
        digits.slot_mut(slot).progress = progress;
        vec![Command::RequestRedraw]
    }

    /// 槽位自己的入场动画完成
    pub fn on_slot_complete(&mut self, slot: SlotIndex, digits: &mut DigitSet) -> Vec<Command> {
        digits.slot_mut(slot).playing = false;
        vec![Command::RequestRedraw]
    }
}

/// 为全部六个槽位发出 SetAsset
fn assign_all(digits: &DigitSet) -> Vec<Command> {
    digits
        .iter()
        .map(|(slot, state)| Command::SetAsset {
            slot,
            digit: state.value,
        })
        .collect()
}
