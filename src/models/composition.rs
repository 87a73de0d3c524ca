//! # 玻璃成分数据模型
//!
//! - `CompositionSet`: 一组化合物及其多行摩尔比
//! - `CompositionRow`: 单行摩尔比（与化合物顺序对齐）及可选密度
//! - `Composition`: 化合物 → 摩尔量，密度估算的输入
//! - `AtomCountMap`: 单行成分解析得到的各元素整数原子数
//!
//! ## 依赖关系
//! - 被 `parsers/compositions.rs`, `parsers/dataset.rs` 构造
//! - 被 `glass/` 和 `commands/` 使用

use super::formula::Formula;
use serde::{Deserialize, Serialize};

/// 单行成分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionRow {
    /// 行号（从 1 开始，不含表头）
    pub index: usize,
    /// 摩尔比，不要求归一化
    pub ratios: Vec<f64>,
    /// 行尾附带的密度 (g/cm³)
    pub density: Option<f64>,
}

impl CompositionRow {
    pub fn new(index: usize, ratios: Vec<f64>, density: Option<f64>) -> Self {
        CompositionRow {
            index,
            ratios,
            density,
        }
    }
}

/// 成分文件的完整内容
#[derive(Debug, Clone)]
pub struct CompositionSet {
    /// 化合物名称（表头顺序）
    pub compounds: Vec<String>,
    /// 与 `compounds` 一一对应的化学式
    pub formulas: Vec<Formula>,
    /// 成分行
    pub rows: Vec<CompositionRow>,
}

impl CompositionSet {
    pub fn new(formulas: Vec<Formula>, rows: Vec<CompositionRow>) -> Self {
        let compounds = formulas.iter().map(|f| f.compound.clone()).collect();
        CompositionSet {
            compounds,
            formulas,
            rows,
        }
    }
}

/// 按化合物给出的成分（化合物 → 摩尔量），密度估算的输入
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    amounts: Vec<(String, f64)>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, compound: impl Into<String>, amount: f64) -> Self {
        self.push(compound, amount);
        self
    }

    pub fn push(&mut self, compound: impl Into<String>, amount: f64) {
        self.amounts.push((compound.into(), amount));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.amounts.iter().map(|(c, a)| (c.as_str(), *a))
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

/// 元素 → 整数原子数
///
/// 元素按首次出现的顺序保存（化合物顺序优先，其次为化学式内顺序），
/// 下游配置工具按此顺序读取元素符号与原子数。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomCountMap {
    entries: Vec<(String, u64)>,
}

impl AtomCountMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入或覆盖元素计数
    pub fn insert(&mut self, symbol: impl Into<String>, count: u64) {
        let symbol = symbol.into();
        match self.entries.iter_mut().find(|(s, _)| *s == symbol) {
            Some(entry) => entry.1 = count,
            None => self.entries.push((symbol, count)),
        }
    }

    pub fn get(&self, symbol: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, c)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(s, c)| (s.as_str(), *c))
    }

    /// 原子总数（因逐元素舍入，可能与目标总数略有偏差）
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    pub fn symbols(&self) -> Vec<&str> {
        self.entries.iter().map(|(s, _)| s.as_str()).collect()
    }

    pub fn counts(&self) -> Vec<u64> {
        self.entries.iter().map(|(_, c)| *c).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_count_map_keeps_insertion_order() {
        let mut map = AtomCountMap::new();
        map.insert("Si", 25);
        map.insert("O", 50);
        map.insert("Na", 17);
        map.insert("O", 58);

        assert_eq!(map.symbols(), vec!["Si", "O", "Na"]);
        assert_eq!(map.get("O"), Some(58));
        assert_eq!(map.get("Ca"), None);
        assert_eq!(map.total(), 100);
    }
}
