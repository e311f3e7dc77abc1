//! # Clock 模块
//!
//! 墙钟时间源。
//!
//! - [`SystemClock`]：本地时区的真实时间，轮询 UTC 偏移检测时区变化
//! - [`ManualClock`]：虚拟时间，用于 headless 运行和测试

use std::time::Duration;

use chrono::{Local, Offset, Timelike};
use face_runtime::{ClockReading, TimeFields};
use tracing::info;

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// 墙钟时间源
pub trait TimeSource {
    /// 当前墙钟采样
    fn now(&self) -> ClockReading;

    /// 推进虚拟时间（真实时钟忽略）
    fn tick(&mut self, _dt: Duration) {}

    /// 自上次调用以来时区是否变化
    fn poll_zone_change(&mut self) -> bool {
        false
    }
}

/// 本地系统时钟
#[derive(Debug)]
pub struct SystemClock {
    offset_secs: i32,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            offset_secs: current_offset_secs(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

fn current_offset_secs() -> i32 {
    Local::now().offset().fix().local_minus_utc()
}

impl TimeSource for SystemClock {
    fn now(&self) -> ClockReading {
        let now = Local::now();
        // 闰秒时 nanosecond 可能超过 1e9，ClockReading 会把毫秒限制到 999
        let millis = (now.nanosecond() / 1_000_000).min(999) as u16;
        let time = TimeFields::from_seconds_of_day(u64::from(now.num_seconds_from_midnight()));
        ClockReading::new(time, millis)
    }

    fn poll_zone_change(&mut self) -> bool {
        let offset = current_offset_secs();
        if offset == self.offset_secs {
            return false;
        }
        info!(from = self.offset_secs, to = offset, "检测到时区变化");
        self.offset_secs = offset;
        true
    }
}

/// 虚拟时钟
///
/// 以午夜起经过的时间计时，保留完整精度，跨越午夜时回绕。
#[derive(Debug, Clone)]
pub struct ManualClock {
    since_midnight: Duration,
    zone_changed: bool,
}

impl ManualClock {
    /// 从指定时间的整秒开始
    pub fn starting_at(time: TimeFields) -> Self {
        Self {
            since_midnight: Duration::from_secs(u64::from(time.seconds_of_day())),
            zone_changed: false,
        }
    }

    /// 直接跳到指定时间（保留秒以下部分），并在下次轮询时报告时区变化
    pub fn change_zone(&mut self, time: TimeFields) {
        let subsec = Duration::from_nanos(u64::from(self.since_midnight.subsec_nanos()));
        self.since_midnight = Duration::from_secs(u64::from(time.seconds_of_day())) + subsec;
        self.zone_changed = true;
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> ClockReading {
        let time = TimeFields::from_seconds_of_day(self.since_midnight.as_secs());
        ClockReading::new(time, self.since_midnight.subsec_millis() as u16)
    }

    fn tick(&mut self, dt: Duration) {
        let nanos = (self.since_midnight + dt).as_nanos() % DAY.as_nanos();
        // 一天的纳秒数远小于 u64::MAX
        self.since_midnight = Duration::from_nanos(nanos as u64);
    }

    fn poll_zone_change(&mut self) -> bool {
        std::mem::take(&mut self.zone_changed)
    }
}
