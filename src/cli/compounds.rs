//! # compounds 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/compounds.rs`

use super::CONSTANTS_ENV;

use clap::Args;
use std::path::PathBuf;

/// compounds 子命令参数
#[derive(Args, Debug)]
pub struct CompoundsArgs {
    /// Formulas to inspect (default: every compound in the constant table)
    pub formulas: Vec<String>,

    /// CSV table (compound,molecular_weight,packing_density) replacing the built-in constants
    #[arg(long, env = CONSTANTS_ENV)]
    pub constants: Option<PathBuf>,
}
