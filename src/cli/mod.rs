//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `atoms`: 摩尔比 → 各元素原子数
//! - `density`: 为成分数据集估算密度
//! - `compounds`: 查看物理常数表与化学式解析结果
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: atoms, density, compounds

pub mod atoms;
pub mod compounds;
pub mod density;

use clap::{Parser, Subcommand};

/// 自定义常数表路径的环境变量
pub const CONSTANTS_ENV: &str = "GLASSPREP_CONSTANTS";

/// glassprep - 玻璃模拟输入准备工具
#[derive(Parser)]
#[command(name = "glassprep")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Prepare oxide glass compositions for atomistic simulation",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert molar ratios into integer atom counts per element
    Atoms(atoms::AtomsArgs),

    /// Estimate glass density for every row of a CSV dataset
    Density(density::DensityArgs),

    /// Show the physical-constant table and parsed formulas
    Compounds(compounds::CompoundsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_atoms_command() {
        let cli = Cli::try_parse_from([
            "glassprep",
            "atoms",
            "glass.txt",
            "3000",
            "--rounding",
            "half-away",
            "--jobs",
            "2",
        ])
        .unwrap();

        match cli.command {
            Commands::Atoms(args) => {
                assert_eq!(args.total_atoms, 3000);
                assert_eq!(args.rounding, atoms::RoundingMode::HalfAway);
                assert_eq!(args.jobs, 2);
                assert!(!args.strict_sum);
                assert_eq!(args.seed, 42);
                assert_eq!(args.title, "Simulation Run 1");
                assert!(args.cubic);
            }
            _ => panic!("expected atoms command"),
        }
    }

    #[test]
    fn test_parse_payload_options() {
        let cli = Cli::try_parse_from([
            "glassprep",
            "atoms",
            "glass.txt",
            "500",
            "--seed",
            "7",
            "--title",
            "Borosilicate",
            "--cubic",
            "false",
        ])
        .unwrap();

        match cli.command {
            Commands::Atoms(args) => {
                assert_eq!(args.seed, 7);
                assert_eq!(args.title, "Borosilicate");
                assert!(!args.cubic);
            }
            _ => panic!("expected atoms command"),
        }
    }

    #[test]
    fn test_negative_total_reaches_validation() {
        let cli = Cli::try_parse_from(["glassprep", "atoms", "glass.txt", "-5"]).unwrap();
        match cli.command {
            Commands::Atoms(args) => assert_eq!(args.total_atoms, -5),
            _ => panic!("expected atoms command"),
        }
    }

    #[test]
    fn test_parse_density_defaults() {
        let cli = Cli::try_parse_from(["glassprep", "density", "data.csv"]).unwrap();
        match cli.command {
            Commands::Density(args) => {
                assert_eq!(args.column, "Density (g/cm^3)");
                assert!(args.output.is_none());
                assert!(!args.fail_fast);
            }
            _ => panic!("expected density command"),
        }
    }
}
