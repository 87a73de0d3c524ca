//! # 成分文件解析器
//!
//! 解析以空白分隔的玻璃成分文件。
//!
//! ## 格式说明
//! ```text
//! SiO2   Na2O   CaO                  <- 化合物表头
//! 0.70   0.15   0.15   2.49          <- 摩尔比 ... 密度(g/cm³)
//! 0.75   0.25   0.00   2.41
//! ```
//! 每个数据行包含与表头化合物一一对应的摩尔比，末尾可附带密度。
//! 字段数既不等于 `n` 也不等于 `n + 1` 的行原样保留全部数值，
//! 在解析原子数时报告 `DimensionMismatch`，不影响其他行。
//!
//! ## 依赖关系
//! - 被 `commands/atoms.rs` 使用
//! - 使用 `parsers/formula.rs`, `models/composition.rs`

use crate::error::{GlassError, Result};
use crate::models::{CompositionRow, CompositionSet};
use crate::parsers::formula::parse_formulas;

use std::fs;
use std::path::Path;

/// 解析成分文件
pub fn parse_compositions_file(path: &Path) -> Result<CompositionSet> {
    if !path.exists() {
        return Err(GlassError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| GlassError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_compositions_content(&content, &path.display().to_string())
}

/// 从字符串内容解析成分文件
pub fn parse_compositions_content(content: &str, source: &str) -> Result<CompositionSet> {
    let parse_error = |reason: String| GlassError::ParseError {
        format: "composition".to_string(),
        path: source.to_string(),
        reason,
    };

    let mut lines = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let header: Vec<&str> = match lines.next() {
        Some((_, line)) => line.split_whitespace().collect(),
        None => return Err(parse_error("Missing compound header line".to_string())),
    };

    let formulas = parse_formulas(&header)?;
    let n = formulas.len();

    let mut rows = Vec::new();
    for (line_no, line) in lines {
        let mut values = Vec::new();
        for field in line.split_whitespace() {
            let value = field.parse::<f64>().map_err(|_| {
                parse_error(format!("Invalid number '{}' on line {}", field, line_no + 1))
            })?;
            values.push(value);
        }

        let density = if values.len() == n + 1 {
            values.pop()
        } else {
            None
        };

        rows.push(CompositionRow::new(rows.len() + 1, values, density));
    }

    Ok(CompositionSet::new(formulas, rows))
}
