//! # Time 模块
//!
//! 时间字段与显示模式。
//!
//! `TimeFields` 每次求值时由 Host 从时钟重新采样，只替换、不原地修改。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FaceError, FaceResult};

/// 时、分、秒三个整数字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeFields {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl TimeFields {
    /// 创建时间字段，校验 0–23 / 0–59 / 0–59
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> FaceResult<Self> {
        let hours = check_field("hours", hours, 23)?;
        let minutes = check_field("minutes", minutes, 59)?;
        let seconds = check_field("seconds", seconds, 59)?;
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// 午夜 00:00:00
    pub const fn midnight() -> Self {
        Self {
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    /// 从午夜起的秒数构造（超过一天时取模）
    pub fn from_seconds_of_day(total: u64) -> Self {
        let total = total % 86_400;
        Self {
            hours: (total / 3600) as u8,
            minutes: (total / 60 % 60) as u8,
            seconds: (total % 60) as u8,
        }
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// 从午夜起的秒数
    pub fn seconds_of_day(&self) -> u32 {
        u32::from(self.hours) * 3600 + u32::from(self.minutes) * 60 + u32::from(self.seconds)
    }

    /// 按槽位顺序拆分为六个十进制数字
    ///
    /// `[h/10, h%10, m/10, m%10, s/10, s%10]`
    pub fn digits(&self) -> [u8; 6] {
        [
            self.hours / 10,
            self.hours % 10,
            self.minutes / 10,
            self.minutes % 10,
            self.seconds / 10,
            self.seconds % 10,
        ]
    }
}

fn check_field(field: &'static str, value: u32, max: u32) -> FaceResult<u8> {
    if value > max {
        return Err(FaceError::TimeOutOfRange { field, value, max });
    }
    Ok(value as u8)
}

impl fmt::Display for TimeFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

impl FromStr for TimeFields {
    type Err = FaceError;

    /// 解析 `HH:MM:SS`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FaceError::InvalidTimeFormat {
            input: s.to_string(),
        };

        let mut parts = s.trim().split(':');
        let mut next = || -> FaceResult<u32> {
            parts
                .next()
                .ok_or_else(invalid)?
                .parse::<u32>()
                .map_err(|_| invalid())
        };
        let hours = next()?;
        let minutes = next()?;
        let seconds = next()?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        Self::new(hours, minutes, seconds)
    }
}

/// 一次墙钟采样
///
/// `millis` 是秒内的毫秒数，供 TickScheduler 计算到下一整秒的延迟。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClockReading {
    pub time: TimeFields,
    pub millis: u16,
}

impl ClockReading {
    /// 创建采样，`millis` 超过 999 时截断到 999
    pub fn new(time: TimeFields, millis: u16) -> Self {
        Self {
            time,
            millis: millis.min(999),
        }
    }

    /// 整秒时刻的采样
    pub fn on_second(time: TimeFields) -> Self {
        Self { time, millis: 0 }
    }
}

/// 显示模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    /// 交互模式：逐秒动画
    #[default]
    Interactive,
    /// 环境（低功耗）模式：静态、无动画、不显示秒
    Ambient,
}

impl DisplayMode {
    pub fn is_ambient(&self) -> bool {
        matches!(self, Self::Ambient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_fields_validation() {
        assert!(TimeFields::new(23, 59, 59).is_ok());
        assert_eq!(
            TimeFields::new(24, 0, 0),
            Err(FaceError::TimeOutOfRange {
                field: "hours",
                value: 24,
                max: 23
            })
        );
        assert!(TimeFields::new(0, 60, 0).is_err());
        assert!(TimeFields::new(0, 0, 60).is_err());
    }

    #[test]
    fn test_digits() {
        let time = TimeFields::new(12, 34, 56).unwrap();
        assert_eq!(time.digits(), [1, 2, 3, 4, 5, 6]);

        let time = TimeFields::new(9, 5, 0).unwrap();
        assert_eq!(time.digits(), [0, 9, 0, 5, 0, 0]);
    }

    #[test]
    fn test_parse_and_display() {
        let time: TimeFields = "07:08:09".parse().unwrap();
        assert_eq!(time, TimeFields::new(7, 8, 9).unwrap());
        assert_eq!(time.to_string(), "07:08:09");

        assert!("12:34".parse::<TimeFields>().is_err());
        assert!("12:34:56:00".parse::<TimeFields>().is_err());
        assert!("aa:bb:cc".parse::<TimeFields>().is_err());
        assert!("25:00:00".parse::<TimeFields>().is_err());
    }

    #[test]
    fn test_seconds_of_day_wraps() {
        let time = TimeFields::from_seconds_of_day(86_399);
        assert_eq!(time.to_string(), "23:59:59");

        let time = TimeFields::from_seconds_of_day(86_400 + 61);
        assert_eq!(time.to_string(), "00:01:01");
        assert_eq!(time.seconds_of_day(), 61);
    }

    #[test]
    fn test_clock_reading_clamps_millis() {
        let reading = ClockReading::new(TimeFields::midnight(), 1500);
        assert_eq!(reading.millis, 999);
    }
}
