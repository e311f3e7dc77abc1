//! # Face Runtime
//!
//! 六位数字动画表盘（HH:MM:SS）的核心运行时库。
//!
//! ## 架构概述
//!
//! `face-runtime` 是纯逻辑核心，不依赖任何 IO、时钟或渲染引擎。
//! 它通过 **命令驱动模式** 与宿主层（Host）通信：
//!
//! ```text
//! Host                               Runtime
//!   │                                   │
//!   │──── FaceInput + ClockReading ───►│
//!   │                                   │ handle()
//!   │◄──────── Vec<Command> ───────────│
//!   │                                   │
//! ```
//!
//! 一次逐秒 tick 的控制流：
//!
//! ```text
//! 唤醒触发 → detector::compute_range → TransitionSequencer
//!          → DigitSet 更新 → RequestRedraw → TickScheduler 重新调度
//! ```
//!
//! ## 核心类型
//!
//! - [`FaceRuntime`]：唯一的控制对象
//! - [`FaceInput`]：Host 向 Runtime 传递的输入
//! - [`Command`]：Runtime 向 Host 发出的指令
//! - [`SequencerState`]：退场/入场两阶段状态机
//!
//! ## 模块结构
//!
//! - [`time`]：时间字段、墙钟采样、显示模式
//! - [`digit`]：槽位、范围、数字集合
//! - [`detector`]：进位检测
//! - [`sequencer`]：两阶段过渡状态机
//! - [`scheduler`]：一次性唤醒调度
//! - [`ambient`]：环境模式策略
//! - [`command`] / [`input`]：通信协议
//! - [`error`]：错误类型定义
//! - [`runtime`]：核心控制器

pub mod ambient;
pub mod command;
pub mod detector;
pub mod digit;
pub mod error;
pub mod input;
pub mod runtime;
pub mod scheduler;
pub mod sequencer;
pub mod time;

// 重导出核心类型
pub use ambient::{AMBIENT_EXIT_REGEN, AmbientModePolicy};
pub use command::{Command, trace};
pub use detector::compute_range;
pub use digit::{DigitRange, DigitSet, DigitSlot, PROGRESS_MID, SLOT_COUNT, SlotIndex};
pub use error::{FaceError, FaceResult};
pub use input::FaceInput;
pub use runtime::FaceRuntime;
pub use scheduler::{TICK_INTERVAL, TickScheduler};
pub use sequencer::{DEFAULT_OUT_DURATION, SequencerState, TickRequest, TransitionSequencer};
pub use time::{ClockReading, DisplayMode, TimeFields};
