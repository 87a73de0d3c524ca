//! # 解析器模块
//!
//! 提供化学式、成分文件、常数表和 CSV 数据集的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: formula, compositions, constants, dataset

pub mod compositions;
pub mod constants;
pub mod dataset;
pub mod formula;

pub use compositions::parse_compositions_file;
pub use constants::load_constants;
pub use dataset::Dataset;
pub use formula::{parse_formula, parse_formulas};
