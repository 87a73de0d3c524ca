//! # 数据模型模块
//!
//! 定义化学式、玻璃成分、原子计数和物理常数表的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `glass/` 和 `commands/` 使用
//! - 子模块: formula, composition, constants

pub mod composition;
pub mod constants;
pub mod formula;

pub use composition::{AtomCountMap, Composition, CompositionRow, CompositionSet};
pub use constants::PhysicalConstants;
pub use formula::{Formula, FormulaTerm};
