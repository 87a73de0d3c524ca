//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use crate::error::GlassError;
use colored::Colorize;

/// 失败汇总中最多列出的行数
const MAX_LISTED_FAILURES: usize = 10;

/// 分隔线宽度
const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印标题栏：`glassprep · <title>`
pub fn print_header(title: &str) {
    println!("\n{}", rule().dimmed());
    println!("  {} {} {}", env!("CARGO_PKG_NAME").cyan(), "·".dimmed(), title.bold());
    println!("{}\n", rule().dimmed());
}

/// 打印分隔线
fn print_separator() {
    println!("{}", rule().dimmed());
}

/// 打印批量处理统计及失败行
pub fn print_batch_summary<'a, I>(success: usize, failed: usize, failures: I)
where
    I: IntoIterator<Item = (usize, &'a GlassError)>,
{
    print_separator();
    print_success(&format!(
        "Batch complete: {} success, {} failed",
        success, failed
    ));

    if failed == 0 {
        return;
    }

    print_warning("Failed rows:");
    for (row, err) in failures.into_iter().take(MAX_LISTED_FAILURES) {
        print_error(&format!("  row {}: {}", row, err));
    }
    if failed > MAX_LISTED_FAILURES {
        print_warning(&format!("  ... and {} more", failed - MAX_LISTED_FAILURES));
    }
}
