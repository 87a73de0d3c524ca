//! # glassprep - 玻璃模拟成分准备工具
//!
//! 将氧化物玻璃的摩尔比成分转换为原子模拟所需的各元素原子数，
//! 并基于堆积密度加和模型估算玻璃密度。
//!
//! ## 子命令
//! - `atoms`     - 摩尔比 → 各元素整数原子数
//! - `density`   - 为 CSV 成分数据集估算密度
//! - `compounds` - 查看物理常数表与化学式解析
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (化学式 / 成分文件 / 数据集解析)
//!   │     ├── glass/     (原子数解析与密度估算)
//!   │     ├── batch/     (按行并行)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod glass;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
