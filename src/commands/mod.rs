//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `glass/`, `batch/`, `utils/`
//! - 子模块: atoms, density, compounds

pub mod atoms;
pub mod compounds;
pub mod density;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Atoms(args) => atoms::execute(args),
        Commands::Density(args) => density::execute(args),
        Commands::Compounds(args) => compounds::execute(args),
    }
}
