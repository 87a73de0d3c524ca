//! # 玻璃密度估算
//!
//! 基于堆积密度的加和模型：
//! ```text
//! ρ (kg/m³)  = 0.53 × Σ xᵢ·Mᵢ / Σ xᵢ·Vᵢ
//! ρ (g/cm³)  = ρ (kg/m³) × 1e-6
//! ```
//! 其中 xᵢ 为摩尔量，Mᵢ 为分子量，Vᵢ 为堆积密度常数。
//! 0.53 与单位换算系数属于模型本身，不可按调用调整。
//!
//! ## 依赖关系
//! - 被 `commands/density.rs` 调用
//! - 使用 `models/constants.rs`, `models/composition.rs`

use crate::error::{GlassError, Result};
use crate::models::{Composition, PhysicalConstants};

/// 经验堆积因子
pub const PACKING_FACTOR: f64 = 0.53;

/// kg/m³ → g/cm³ 的模型换算系数
pub const DENSITY_UNIT_FACTOR: f64 = 1e-6;

/// 密度估算器
pub struct DensityEstimator<'a> {
    constants: &'a PhysicalConstants,
}

impl<'a> DensityEstimator<'a> {
    pub fn new(constants: &'a PhysicalConstants) -> Self {
        Self { constants }
    }

    /// 估算单个成分的密度 (g/cm³)
    pub fn estimate(&self, composition: &Composition) -> Result<f64> {
        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for (compound, amount) in composition.iter() {
            if !amount.is_finite() || amount < 0.0 {
                return Err(GlassError::InvalidArgument(format!(
                    "molar amount {} for '{}' must be a finite non-negative number",
                    amount, compound
                )));
            }

            let mw = self.constants.molecular_weight(compound)?;
            let pd = self.constants.packing_density(compound)?;

            numerator += mw * amount;
            denominator += pd * amount;
        }

        if denominator == 0.0 {
            return Err(GlassError::DivisionByZero(if composition.is_empty() {
                "empty composition".to_string()
            } else {
                "total packing density is zero".to_string()
            }));
        }

        let density_kg_m3 = PACKING_FACTOR * (numerator / denominator);
        Ok(density_kg_m3 * DENSITY_UNIT_FACTOR)
    }
}
