//! # density 子命令 CLI 定义
//!
//! 为 CSV 成分数据集的每一行估算密度并追加为新列
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/density.rs`

use super::CONSTANTS_ENV;

use clap::Args;
use std::path::PathBuf;

/// density 子命令参数
#[derive(Args, Debug)]
pub struct DensityArgs {
    /// CSV dataset whose column headers name compounds (e.g. SiO2, Na2O)
    pub input: PathBuf,

    /// Output CSV (default: overwrite the input file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Header of the density column to append or replace
    #[arg(long, default_value = "Density (g/cm^3)")]
    pub column: String,

    /// CSV table (compound,molecular_weight,packing_density) replacing the built-in constants
    #[arg(long, env = CONSTANTS_ENV)]
    pub constants: Option<PathBuf>,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Abort without writing if any row fails
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,
}
