//! # 化学式数据模型
//!
//! 化学式被表示为有序的 (元素符号, 化学计量数) 列表，例如
//! `SiO2` → `[("Si", 1), ("O", 2)]`。
//!
//! ## 依赖关系
//! - 被 `parsers/formula.rs` 构造
//! - 被 `glass/resolver.rs` 使用

use serde::{Deserialize, Serialize};

/// 化学式中的一项：元素符号与化学计量数（≥ 1）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaTerm {
    /// 元素符号（大写字母 + 可选小写字母）
    pub symbol: String,
    /// 化学计量数
    pub count: u32,
}

impl FormulaTerm {
    pub fn new(symbol: impl Into<String>, count: u32) -> Self {
        FormulaTerm {
            symbol: symbol.into(),
            count,
        }
    }
}

/// 化合物化学式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formula {
    /// 原始化合物字符串
    pub compound: String,
    /// 按出现顺序排列的元素项
    pub terms: Vec<FormulaTerm>,
}

impl Formula {
    pub fn new(compound: impl Into<String>, terms: Vec<FormulaTerm>) -> Self {
        Formula {
            compound: compound.into(),
            terms,
        }
    }

    /// 化学计量单位总数（各元素计量数之和，如 SiO2 → 3）
    ///
    /// 单项计量数上限为 `u32::MAX`，以 u64 累加不会溢出。
    pub fn stoichiometric_units(&self) -> u64 {
        self.terms.iter().map(|t| u64::from(t.count)).sum()
    }
}

/// 规范形式：计量数为 1 时省略数字
impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for term in &self.terms {
            if term.count == 1 {
                write!(f, "{}", term.symbol)?;
            } else {
                write!(f, "{}{}", term.symbol, term.count)?;
            }
        }
        Ok(())
    }
}
