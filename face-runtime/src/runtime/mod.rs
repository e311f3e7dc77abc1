//! # Runtime 模块
//!
//! 表盘核心控制器，串行处理所有输入并驱动各组件。
//!
//! ## 模块结构
//!
//! - [`engine`]：核心控制器 `FaceRuntime`

pub mod engine;

pub use engine::FaceRuntime;
