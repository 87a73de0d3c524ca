//! # 化学式解析器
//!
//! 将化合物字符串解析为有序的 (元素, 计量数) 列表。
//!
//! ## 语法
//! ```text
//! formula := term+
//! term    := [A-Z][a-z]? digits?      (无数字时计量数为 1)
//! ```
//! 不支持括号嵌套、小数下标、电荷。元素符号不与元素周期表核对，
//! 未知符号原样保留，由下游查表时报错。
//!
//! ## 依赖关系
//! - 被 `parsers/compositions.rs`, `commands/compounds.rs` 使用
//! - 使用 `models/formula.rs`
//! - 使用 `regex` crate

use crate::error::{GlassError, Result};
use crate::models::{Formula, FormulaTerm};

use regex::Regex;
use std::sync::OnceLock;

fn term_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"([A-Z][a-z]?)(\d*)").unwrap())
}

/// 解析化学式
pub fn parse_formula(compound: &str) -> Result<Formula> {
    let malformed = |reason: String| GlassError::MalformedFormula {
        formula: compound.to_string(),
        reason,
    };

    if compound.is_empty() {
        return Err(malformed("empty formula".to_string()));
    }

    let mut terms = Vec::new();
    let mut cursor = 0;

    for caps in term_pattern().captures_iter(compound) {
        let whole = caps.get(0).map(|m| (m.start(), m.end())).unwrap_or_default();

        // 匹配之间不允许存在语法外的字符
        if whole.0 != cursor {
            return Err(malformed(unexpected_at(compound, cursor)));
        }
        cursor = whole.1;

        let symbol = &caps[1];
        let digits = &caps[2];
        let count = if digits.is_empty() {
            1
        } else {
            digits
                .parse::<u32>()
                .map_err(|_| malformed(format!("multiplicity '{}' is out of range", digits)))?
        };

        if count == 0 {
            return Err(malformed(format!("zero multiplicity for '{}'", symbol)));
        }

        terms.push(FormulaTerm::new(symbol, count));
    }

    if cursor != compound.len() {
        return Err(malformed(unexpected_at(compound, cursor)));
    }

    Ok(Formula::new(compound, terms))
}

/// 解析多个化学式，任一失败即返回错误
pub fn parse_formulas<S: AsRef<str>>(compounds: &[S]) -> Result<Vec<Formula>> {
    compounds.iter().map(|c| parse_formula(c.as_ref())).collect()
}

fn unexpected_at(compound: &str, pos: usize) -> String {
    match compound[pos..].chars().next() {
        Some(ch) => format!("unexpected character '{}' at position {}", ch, pos),
        None => format!("unexpected end of input at position {}", pos),
    }
}
