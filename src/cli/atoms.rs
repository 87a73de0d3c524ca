//! # atoms 子命令 CLI 定义
//!
//! 读取成分文件，将每行摩尔比转换为各元素整数原子数
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/atoms.rs`

use crate::glass::RoundingPolicy;

use clap::{ArgAction, Args, ValueEnum};
use std::path::PathBuf;

/// 取整方式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round half to even (x.5 goes to the nearest even integer)
    HalfEven,
    /// Round half away from zero (x.5 always goes up)
    HalfAway,
}

impl From<RoundingMode> for RoundingPolicy {
    fn from(mode: RoundingMode) -> Self {
        match mode {
            RoundingMode::HalfEven => RoundingPolicy::HalfEven,
            RoundingMode::HalfAway => RoundingPolicy::HalfAwayFromZero,
        }
    }
}

/// atoms 子命令参数
#[derive(Args, Debug)]
pub struct AtomsArgs {
    /// Composition file: compound header line, then one row of molar ratios (+ density) per line
    pub input: PathBuf,

    /// Total number of atoms in the simulated glass
    #[arg(allow_negative_numbers = true)]
    pub total_atoms: i64,

    /// Rounding applied to each element's fractional atom count
    #[arg(long, value_enum, default_value = "half-even")]
    pub rounding: RoundingMode,

    /// Write configuration-tool input blocks (symbols, counts, total, density) to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Random seed passed to the configuration tool
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Run title passed to the configuration tool
    #[arg(long, default_value = "Simulation Run 1")]
    pub title: String,

    /// Request a cubic unit cell from the configuration tool
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub cubic: bool,

    /// Write a CSV summary of the atom counts to this file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Reject rows whose molar ratios do not sum to 1
    #[arg(long, default_value_t = false)]
    pub strict_sum: bool,

    /// Tolerance for --strict-sum
    #[arg(long, default_value_t = 1e-6)]
    pub sum_tolerance: f64,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Abort with an error if any row fails
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,
}
