//! # 批量处理模块
//!
//! 提供统一的按行批量处理能力。
//!
//! ## 功能
//! - 并行处理（每行相互独立）
//! - 进度反馈与统计
//! - 行级错误隔离
//!
//! ## 依赖关系
//! - 被各命令模块使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod runner;

pub use runner::{BatchReport, BatchRunner};
