//! # 物理常数表
//!
//! 化合物 → 分子量 (g/mol) 与化合物 → 堆积密度常数两张查找表。
//! 进程启动时构造一次，之后只读，可在 rayon 工作线程间无锁共享。
//!
//! ## 依赖关系
//! - 被 `parsers/constants.rs` 从 CSV 构造
//! - 被 `glass/density.rs`, `parsers/dataset.rs`, `commands/` 使用

use crate::error::{GlassError, Result};
use std::collections::HashMap;

/// 内置常数：(化合物, 分子量 g/mol, 堆积密度)
const BUILTIN: &[(&str, f64, f64)] = &[
    ("SiO2", 60.08, 13.9e-6),
    ("Na2O", 61.98, 12.3e-6),
    ("Al2O3", 101.96, 21.15e-6),
    ("B2O3", 69.62, 20.8e-6),
    ("Li2O", 29.88, 9.0e-6),
    ("K2O", 94.20, 20.2e-6),
    ("MgO", 40.30, 7.9e-6),
    ("CaO", 56.08, 9.4e-6),
    ("Fe2O3", 159.69, 22.1e-6),
    ("TiO2", 79.87, 14.4e-6),
    ("ZnO", 81.38, 8.0e-6),
    ("ZrO2", 123.22, 14.8e-6),
    ("BaO", 153.33, 13.3e-6),
    ("MnO", 70.94, 14.2e-6),
    ("SrO", 103.62, 10.6e-6),
    ("PbO", 223.20, 11.1e-6),
    ("Sb2O3", 291.50, 23.0e-6),
    ("P2O5", 141.94, 34.6e-6),
    ("WO3", 231.84, 21.3e-6),
    ("ThO2", 264.04, 16.4e-6),
    ("Bi2O3", 465.96, 26.1e-6),
    ("CdO", 128.41, 9.1e-6),
    ("Cr2O3", 151.99, 21.9e-6),
    ("F", 18.998, 11.1e-6),
    ("NiO", 74.69, 11.1e-6),
    ("SO3", 80.06, 11.1e-6),
    ("Cs2O", 281.81, 31.7e-6),
    ("CuO", 79.55, 7.9e-6),
    ("MoO3", 143.94, 21.3e-6),
    ("Nd2O3", 336.48, 25.6e-6),
    ("RuO2", 133.07, 11.1e-6),
];

/// 物理常数表（只读）
#[derive(Debug, Clone, Default)]
pub struct PhysicalConstants {
    /// 化合物顺序（CSV 列扫描顺序）
    order: Vec<String>,
    /// 分子量 (g/mol)
    molecular_weights: HashMap<String, f64>,
    /// 堆积密度常数
    packing_densities: HashMap<String, f64>,
}

impl PhysicalConstants {
    /// 内置 31 种氧化物常数表
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN
                .iter()
                .map(|&(name, mw, pd)| (name.to_string(), mw, pd)),
        )
    }

    /// 从 (化合物, 分子量, 堆积密度) 条目构造；重复条目以后者为准
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, f64, f64)>,
    {
        let mut table = PhysicalConstants::default();
        for (name, mw, pd) in entries {
            if !table.molecular_weights.contains_key(&name) {
                table.order.push(name.clone());
            }
            table.molecular_weights.insert(name.clone(), mw);
            table.packing_densities.insert(name, pd);
        }
        table
    }

    /// 从两张独立的表构造，允许两表的化合物集合不一致
    #[cfg(test)]
    pub fn from_tables(
        molecular_weights: Vec<(String, f64)>,
        packing_densities: Vec<(String, f64)>,
    ) -> Self {
        let mut order: Vec<String> = Vec::new();
        for (name, _) in molecular_weights.iter().chain(packing_densities.iter()) {
            if !order.contains(name) {
                order.push(name.clone());
            }
        }
        PhysicalConstants {
            order,
            molecular_weights: molecular_weights.into_iter().collect(),
            packing_densities: packing_densities.into_iter().collect(),
        }
    }

    /// 分子量 (g/mol)
    pub fn molecular_weight(&self, compound: &str) -> Result<f64> {
        self.molecular_weights
            .get(compound)
            .copied()
            .ok_or_else(|| GlassError::UnknownCompound {
                compound: compound.to_string(),
                table: "molecular weight".to_string(),
            })
    }

    /// 堆积密度常数
    pub fn packing_density(&self, compound: &str) -> Result<f64> {
        self.packing_densities
            .get(compound)
            .copied()
            .ok_or_else(|| GlassError::UnknownCompound {
                compound: compound.to_string(),
                table: "packing density".to_string(),
            })
    }

    /// 按表顺序列出化合物
    pub fn compounds(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }
}
