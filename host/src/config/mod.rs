//! # Config 模块
//!
//! 运行时配置管理，集中管理所有配置项。
//!
//! ## 配置优先级
//!
//! 1. 命令行参数（最高）
//! 2. 配置文件 (config.json)
//! 3. 默认值（最低）

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::renderer::EasingFunction;

/// 一次 tick 的周期（毫秒）；退场与入场必须在其内完成
const TICK_PERIOD_MS: u64 = 1000;

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 动画时序配置
    #[serde(default)]
    pub timing: TimingConfig,

    /// 渲染配置
    #[serde(default)]
    pub render: RenderConfig,

    /// 调试配置
    #[serde(default)]
    pub debug: DebugConfig,
}

/// 动画时序配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// 共享退场驱动时长（毫秒）
    #[serde(default = "default_out_duration_ms")]
    pub out_duration_ms: u64,

    /// 槽位入场播放时长（毫秒）
    #[serde(default = "default_in_duration_ms")]
    pub in_duration_ms: u64,

    /// 帧间隔（毫秒）
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,

    /// 退场缓动
    #[serde(default = "default_out_easing")]
    pub out_easing: EasingFunction,

    /// 入场缓动
    #[serde(default)]
    pub in_easing: EasingFunction,
}

/// 渲染配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// 背景字形（每帧先清为此字形）
    #[serde(default = "default_background")]
    pub background: char,

    /// logo 字形
    #[serde(default = "default_logo")]
    pub logo: char,

    /// 时分秒分隔符
    #[serde(default = "default_separator")]
    pub separator: char,
}

/// 调试配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// 日志级别（trace/debug/info/warn/error）
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// 默认值函数
fn default_out_duration_ms() -> u64 {
    500
}

fn default_in_duration_ms() -> u64 {
    400
}

fn default_frame_interval_ms() -> u64 {
    16
}

fn default_out_easing() -> EasingFunction {
    EasingFunction::EaseInOutSine
}

fn default_background() -> char {
    ' '
}

fn default_logo() -> char {
    '*'
}

fn default_separator() -> char {
    ':'
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            out_duration_ms: default_out_duration_ms(),
            in_duration_ms: default_in_duration_ms(),
            frame_interval_ms: default_frame_interval_ms(),
            out_easing: default_out_easing(),
            in_easing: EasingFunction::default(),
        }
    }
}

impl TimingConfig {
    pub fn out_duration(&self) -> Duration {
        Duration::from_millis(self.out_duration_ms)
    }

    pub fn in_duration(&self) -> Duration {
        Duration::from_millis(self.in_duration_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            logo: default_logo(),
            separator: default_separator(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl DebugConfig {
    /// 解析日志级别
    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::ValidationFailed(format!("无效的日志级别: {}", self.log_level)))
    }
}

impl AppConfig {
    /// 加载配置文件
    ///
    /// 如果文件不存在或解析失败，返回默认配置并打印警告。
    /// 状态信息写到 stderr，stdout 留给表盘画面。
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            eprintln!("⚠️ 配置文件不存在: {:?}，使用默认配置", path);
            return Self::default();
        }

        match Self::try_load(path) {
            Ok(config) => {
                eprintln!("✅ 配置文件加载成功: {:?}", path);
                config
            }
            Err(e) => {
                eprintln!("⚠️ {}，使用默认配置", e);
                Self::default()
            }
        }
    }

    /// 加载配置文件，失败时返回错误
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 保存配置到文件
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        let timing = &self.timing;

        if timing.out_duration_ms == 0 || timing.in_duration_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "退场/入场时长必须大于 0".to_string(),
            ));
        }

        if timing.frame_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "帧间隔必须大于 0".to_string(),
            ));
        }

        // 入场动画必须在下一次 tick 的退场开始前完成
        let total = timing.out_duration_ms.saturating_add(timing.in_duration_ms);
        if total >= TICK_PERIOD_MS {
            return Err(ConfigError::ValidationFailed(format!(
                "退场与入场时长之和必须小于 {}ms（当前 {}ms）",
                TICK_PERIOD_MS, total
            )));
        }

        self.debug.level()?;

        Ok(())
    }
}

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 序列化失败
    #[error("配置序列化失败: {0}")]
    SerializationFailed(#[from] serde_json::Error),
    /// IO 错误
    #[error("配置 IO 错误: {0}")]
    IoError(#[from] std::io::Error),
    /// 验证失败
    #[error("配置验证失败: {0}")]
    ValidationFailed(String),
}
