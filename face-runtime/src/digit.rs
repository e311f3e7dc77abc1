//! # Digit 模块
//!
//! 六个数字槽位及其范围。
//!
//! ```text
//! 槽位:  0   1   :  2   3   :  4   5
//!        时十 时个    分十 分个    秒十 秒个
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FaceError, FaceResult};
use crate::time::TimeFields;

/// 槽位数量
pub const SLOT_COUNT: usize = 6;

/// 进度中点：数字完全显示时的动画进度
pub const PROGRESS_MID: f32 = 0.5;

/// 槽位索引（0–5）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct SlotIndex(u8);

impl SlotIndex {
    pub const HOUR_TENS: Self = Self(0);
    pub const HOUR_ONES: Self = Self(1);
    pub const MINUTE_TENS: Self = Self(2);
    pub const MINUTE_ONES: Self = Self(3);
    pub const SECOND_TENS: Self = Self(4);
    pub const SECOND_ONES: Self = Self(5);

    /// 全部槽位，按显示顺序
    pub const ALL: [Self; SLOT_COUNT] = [
        Self::HOUR_TENS,
        Self::HOUR_ONES,
        Self::MINUTE_TENS,
        Self::MINUTE_ONES,
        Self::SECOND_TENS,
        Self::SECOND_ONES,
    ];

    /// 秒的两个槽位（环境模式下隐藏）
    pub const SECONDS: [Self; 2] = [Self::SECOND_TENS, Self::SECOND_ONES];

    /// 创建槽位索引
    pub fn new(index: usize) -> FaceResult<Self> {
        if index >= SLOT_COUNT {
            return Err(FaceError::SlotOutOfRange { index });
        }
        Ok(Self(index as u8))
    }

    /// 获取数组下标
    pub fn index(&self) -> usize {
        usize::from(self.0)
    }
}

impl TryFrom<usize> for SlotIndex {
    type Error = FaceError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<SlotIndex> for usize {
    fn from(slot: SlotIndex) -> Self {
        slot.index()
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 连续闭区间的槽位范围，`first <= last`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct DigitRange {
    first: SlotIndex,
    last: SlotIndex,
}

impl DigitRange {
    /// 创建范围，校验 `first <= last`
    pub fn new(first: SlotIndex, last: SlotIndex) -> FaceResult<Self> {
        if first > last {
            return Err(FaceError::InvalidRange {
                first: first.index(),
                last: last.index(),
            });
        }
        Ok(Self { first, last })
    }

    /// 调用方已保证 `first <= last`
    pub(crate) fn ordered(first: SlotIndex, last: SlotIndex) -> Self {
        debug_assert!(first <= last, "range {first}..={last} is reversed");
        Self { first, last }
    }

    pub fn first(&self) -> SlotIndex {
        self.first
    }

    pub fn last(&self) -> SlotIndex {
        self.last
    }

    pub fn contains(&self, slot: SlotIndex) -> bool {
        self.first <= slot && slot <= self.last
    }

    pub fn len(&self) -> usize {
        self.last.index() - self.first.index() + 1
    }

    /// 范围至少包含一个槽位，永远不为空
    pub fn is_empty(&self) -> bool {
        false
    }

    /// 按顺序遍历范围内的槽位
    pub fn iter(&self) -> impl Iterator<Item = SlotIndex> + use<> {
        (self.first.0..=self.last.0).map(SlotIndex)
    }
}

/// 反序列化的中间形态，经 [`DigitRange::new`] 校验后才成为范围
#[derive(Deserialize)]
struct RawRange {
    first: SlotIndex,
    last: SlotIndex,
}

impl TryFrom<RawRange> for DigitRange {
    type Error = FaceError;

    fn try_from(raw: RawRange) -> FaceResult<Self> {
        Self::new(raw.first, raw.last)
    }
}

impl fmt::Display for DigitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.first, self.last)
    }
}

/// 单个数字槽位
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitSlot {
    /// 当前显示的数字（0–9），同时是动画资源索引
    pub value: u8,
    /// 动画进度（0.0–1.0），0.5 为完全显示
    pub progress: f32,
    /// 是否可见
    pub visible: bool,
    /// 播放区间 (start, end)
    pub bounds: (f32, f32),
    /// 是否仍在播放自己的入场动画
    pub playing: bool,
}

impl Default for DigitSlot {
    fn default() -> Self {
        Self {
            value: 0,
            progress: 0.0,
            visible: true,
            bounds: (0.0, 1.0),
            playing: false,
        }
    }
}

/// 六个槽位的集合
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DigitSet {
    slots: [DigitSlot; SLOT_COUNT],
}

impl DigitSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, slot: SlotIndex) -> &DigitSlot {
        &self.slots[slot.index()]
    }

    pub fn slot_mut(&mut self, slot: SlotIndex) -> &mut DigitSlot {
        &mut self.slots[slot.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, &DigitSlot)> {
        SlotIndex::ALL.into_iter().zip(self.slots.iter())
    }

    /// 当前显示的六个数字
    pub fn values(&self) -> [u8; SLOT_COUNT] {
        self.slots.map(|slot| slot.value)
    }

    /// 按当前时间设置全部六个槽位的显示数字
    pub fn set_digits(&mut self, time: TimeFields) {
        for (slot, digit) in self.slots.iter_mut().zip(time.digits()) {
            slot.value = digit;
        }
    }

    /// 只更新范围内槽位的显示数字
    pub fn set_digits_in(&mut self, time: TimeFields, range: DigitRange) {
        let digits = time.digits();
        for slot in range.iter() {
            self.slots[slot.index()].value = digits[slot.index()];
        }
    }
}
