//! # Error 模块
//!
//! 定义 face-runtime 中使用的错误类型。
//!
//! 状态机本身不会失败，只有构造函数会校验输入（时间字段、槽位索引、范围）。

use thiserror::Error;

/// face-runtime 统一错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceError {
    /// 时间字段超出有效范围
    #[error("时间字段 {field} 超出范围: {value}（有效范围 0..={max}）")]
    TimeOutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },

    /// 槽位索引超出范围
    #[error("数字槽位索引 {index} 超出范围（有效范围 0..6）")]
    SlotOutOfRange { index: usize },

    /// 范围首尾颠倒
    #[error("无效的数字范围: first {first} > last {last}")]
    InvalidRange { first: usize, last: usize },

    /// 无法解析的时间字符串
    #[error("无效的时间格式 '{input}'，期望 HH:MM:SS")]
    InvalidTimeFormat { input: String },
}

/// Result 类型别名
pub type FaceResult<T> = Result<T, FaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FaceError::TimeOutOfRange {
            field: "hours",
            value: 24,
            max: 23,
        };
        assert!(err.to_string().contains("hours"));
        assert!(err.to_string().contains("24"));

        let err = FaceError::SlotOutOfRange { index: 6 };
        assert!(err.to_string().contains('6'));
    }
}
