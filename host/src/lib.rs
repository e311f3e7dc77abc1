//! # Host 层
//!
//! 六位数字动画表盘的宿主层实现（headless，文本输出）。
//!
//! ## 架构说明
//!
//! Host 层负责：
//! - 墙钟与时区变化检测
//! - 数字动画播放（共享退场驱动 + 槽位入场播放）
//! - 一次性唤醒定时器
//! - 重绘合并与文本合成
//! - 将 Runtime 的 Command 转换为实际效果
//!
//! Host 层不包含过渡逻辑，只负责执行 Runtime 发出的 Command，
//! 并把播放器事件、唤醒、可见性与环境模式变化按顺序送回 Runtime。

pub mod app;
pub mod clock;
pub mod command_executor;
pub mod config;
pub mod player;
pub mod renderer;
pub mod state;
pub mod timer;

pub use app::FaceHost;
pub use clock::{ManualClock, SystemClock, TimeSource};
pub use command_executor::{CommandExecutor, CommandOutput, ExecuteContext, ExecuteResult};
pub use config::{AppConfig, ConfigError, DebugConfig, RenderConfig, TimingConfig};
pub use player::{DigitPlayer, SlotPlayback};
pub use renderer::{EasingFunction, RenderState, Renderer, SlotSprite, TextRenderer};
pub use state::HostState;
pub use timer::WakeTimer;
