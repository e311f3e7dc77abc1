//! # Detector 模块
//!
//! 根据当前时间计算本次需要过渡的连续槽位范围。
//!
//! 进位检测按十进制里程表的方式沿进位链向上走：只有发生进位的位置及其
//! 更高位需要视觉变化，更低位已由上一次 tick 处理。

use crate::digit::{DigitRange, SlotIndex};
use crate::time::{DisplayMode, TimeFields};

/// 计算需要过渡的槽位范围
///
/// # 参数
/// - `time`: 本次 tick 采样到的时间（进位之后的结果字段）
/// - `forced`: 显式的"从此槽位起全部重建"请求
/// - `mode`: 当前显示模式
///
/// # 规则
/// - `first`：有 `forced` 时取其值，否则按进位链确定
/// - `last`：环境模式为 3；`forced == 0` 为 4；其余为 5
/// - 环境模式下 `first` 被钳制到 `last`，保证范围有效
pub fn compute_range(time: TimeFields, forced: Option<SlotIndex>, mode: DisplayMode) -> DigitRange {
    let first = forced.unwrap_or_else(|| carry_start(time));
    let last = last_slot(forced, mode);
    DigitRange::ordered(first.min(last), last)
}

/// 进位链的起点
fn carry_start(time: TimeFields) -> SlotIndex {
    if time.seconds() > 0 {
        if time.seconds() % 10 == 0 {
            SlotIndex::SECOND_TENS
        } else {
            SlotIndex::SECOND_ONES
        }
    } else if time.minutes() > 0 {
        if time.minutes() % 10 == 0 {
            SlotIndex::MINUTE_TENS
        } else {
            SlotIndex::MINUTE_ONES
        }
    } else if time.hours() % 10 == 0 {
        SlotIndex::HOUR_TENS
    } else {
        SlotIndex::HOUR_ONES
    }
}

fn last_slot(forced: Option<SlotIndex>, mode: DisplayMode) -> SlotIndex {
    match (mode, forced) {
        (DisplayMode::Ambient, _) => SlotIndex::MINUTE_ONES,
        // 全量重建不包含秒个位，与逐秒 tick 区分
        (DisplayMode::Interactive, Some(SlotIndex::HOUR_TENS)) => SlotIndex::SECOND_TENS,
        (DisplayMode::Interactive, _) => SlotIndex::SECOND_ONES,
    }
}
