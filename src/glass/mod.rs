//! # 玻璃成分计算模块
//!
//! 两个相互独立的纯函数组件，均无共享可变状态，可按行并行。
//!
//! ## 子模块
//! - `resolver`: 摩尔比 → 各元素整数原子数
//! - `density`: 堆积密度加和模型估算密度
//! - `export`: 原子数导出（定宽文本块 / CSV）
//!
//! ## 依赖关系
//! - 被 `commands/atoms.rs`, `commands/density.rs` 使用
//! - 使用 `models/`

pub mod density;
pub mod export;
pub mod resolver;

pub use density::DensityEstimator;
pub use export::ResolvedRow;
pub use resolver::{check_normalized, CompositionResolver, RoundingPolicy};
