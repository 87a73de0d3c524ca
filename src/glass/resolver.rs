//! # 成分解析器（摩尔比 → 原子数）
//!
//! 将一行摩尔比与原子总数目标转换为各元素的整数原子数。
//!
//! ## 算法概述
//! 1. 化合物 i 贡献的原子数 `n_i = r_i * total_atoms`
//! 2. 化学计量单位 `u_i = Σ 计量数`（如 SiO2 → 3）
//! 3. 元素 e（计量数 m）累加 `n_i * (m / u_i)`
//! 4. 全部累加完成后按舍入策略逐元素取整
//!
//! 不做任何归一化：逐元素舍入误差被保留，原子总数可能与目标相差
//! 至多 `元素种数 × 0.5`。需要精确总数的调用方自行后处理。
//!
//! ## 依赖关系
//! - 被 `commands/atoms.rs` 调用
//! - 使用 `models/formula.rs`, `models/composition.rs`

use crate::error::{GlassError, Result};
use crate::models::{AtomCountMap, Formula};

/// 取整策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingPolicy {
    /// 四舍六入五成双（x.5 取最近的偶数）
    #[default]
    HalfEven,
    /// x.5 远离零取整
    HalfAwayFromZero,
}

impl RoundingPolicy {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            RoundingPolicy::HalfEven => value.round_ties_even(),
            RoundingPolicy::HalfAwayFromZero => value.round(),
        }
    }
}

impl std::fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundingPolicy::HalfEven => write!(f, "half-even"),
            RoundingPolicy::HalfAwayFromZero => write!(f, "half-away-from-zero"),
        }
    }
}

/// 成分解析器
#[derive(Debug, Clone, Copy)]
pub struct CompositionResolver {
    /// 目标原子总数
    total_atoms: u64,
    /// 取整策略
    policy: RoundingPolicy,
}

impl CompositionResolver {
    /// 创建解析器，原子总数必须为正
    pub fn new(total_atoms: i64) -> Result<Self> {
        if total_atoms <= 0 {
            return Err(GlassError::InvalidArgument(format!(
                "total atoms must be positive, got {}",
                total_atoms
            )));
        }
        Ok(Self {
            total_atoms: total_atoms as u64,
            policy: RoundingPolicy::default(),
        })
    }

    /// 设置取整策略
    pub fn with_policy(mut self, policy: RoundingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn total_atoms(&self) -> u64 {
        self.total_atoms
    }

    pub fn policy(&self) -> RoundingPolicy {
        self.policy
    }

    /// 解析一行摩尔比
    ///
    /// `formulas` 与 `ratios` 必须按相同的化合物顺序对齐。
    pub fn resolve(&self, formulas: &[Formula], ratios: &[f64]) -> Result<AtomCountMap> {
        if formulas.len() != ratios.len() {
            return Err(GlassError::DimensionMismatch {
                expected: formulas.len(),
                found: ratios.len(),
            });
        }

        for (formula, &ratio) in formulas.iter().zip(ratios) {
            if !ratio.is_finite() || ratio < 0.0 {
                return Err(GlassError::InvalidArgument(format!(
                    "molar ratio {} for '{}' must be a finite non-negative number",
                    ratio, formula.compound
                )));
            }
        }

        let total = self.total_atoms as f64;
        let mut element_totals: Vec<(&str, f64)> = Vec::new();

        for (formula, &ratio) in formulas.iter().zip(ratios) {
            let units = formula.stoichiometric_units();
            if units == 0 {
                return Err(GlassError::MalformedFormula {
                    formula: formula.compound.clone(),
                    reason: "zero stoichiometric units".to_string(),
                });
            }

            let compound_atoms = ratio * total;
            let units = units as f64;

            for term in &formula.terms {
                let share = compound_atoms * (term.count as f64 / units);
                match element_totals.iter_mut().find(|(s, _)| *s == term.symbol) {
                    Some(entry) => entry.1 += share,
                    None => element_totals.push((term.symbol.as_str(), share)),
                }
            }
        }

        let mut counts = AtomCountMap::new();
        for (symbol, value) in element_totals {
            let rounded = self.policy.apply(value);
            // u64::MAX as f64 == 2^64，已超出 u64 范围
            if !rounded.is_finite() || rounded >= u64::MAX as f64 {
                return Err(GlassError::InvalidArgument(format!(
                    "atom count {} for element '{}' does not fit in an integer",
                    value, symbol
                )));
            }
            counts.insert(symbol, rounded as u64);
        }

        Ok(counts)
    }
}

/// 严格检查摩尔比之和是否为 1（独立于解析的可选校验）
pub fn check_normalized(ratios: &[f64], tolerance: f64) -> Result<()> {
    let sum: f64 = ratios.iter().sum();
    if (sum - 1.0).abs() > tolerance || sum.is_nan() {
        return Err(GlassError::NotNormalized { sum, tolerance });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormulaTerm;
    use crate::parsers::parse_formulas;

    fn resolve(total_atoms: i64, formulas: &[Formula], ratios: &[f64]) -> Result<AtomCountMap> {
        CompositionResolver::new(total_atoms)?.resolve(formulas, ratios)
    }

    fn soda_silica() -> Vec<Formula> {
        parse_formulas(&["SiO2", "Na2O"]).unwrap()
    }

    #[test]
    fn test_resolve_soda_silica() {
        let counts = resolve(100, &soda_silica(), &[0.75, 0.25]).unwrap();

        assert_eq!(counts.symbols(), vec!["Si", "O", "Na"]);
        assert_eq!(counts.get("Si"), Some(25));
        assert_eq!(counts.get("O"), Some(58));
        assert_eq!(counts.get("Na"), Some(17));
        assert_eq!(counts.total(), 100);
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = resolve(100, &soda_silica(), &[0.75, 0.2, 0.05]).unwrap_err();
        match err {
            GlassError::DimensionMismatch { expected, found } => {
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_total_atoms() {
        assert!(matches!(
            CompositionResolver::new(0),
            Err(GlassError::InvalidArgument(_))
        ));
        assert!(matches!(
            resolve(-10, &soda_silica(), &[0.75, 0.25]),
            Err(GlassError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_invalid_ratios() {
        for bad in [-0.1, f64::NAN, f64::INFINITY] {
            let err = resolve(100, &soda_silica(), &[0.75, bad]).unwrap_err();
            assert!(err.to_string().contains("Na2O"));
        }
    }

    #[test]
    fn test_zero_stoichiometric_units() {
        let formulas = vec![Formula::new("", vec![])];
        assert!(matches!(
            resolve(10, &formulas, &[1.0]),
            Err(GlassError::MalformedFormula { .. })
        ));
    }

    #[test]
    fn test_huge_multiplicity_resolves() {
        let formulas = parse_formulas(&["O4294967295Si"]).unwrap();
        let counts = resolve(100, &formulas, &[1.0]).unwrap();
        assert_eq!(counts.get("O"), Some(100));
        assert_eq!(counts.get("Si"), Some(0));

        let formulas = parse_formulas(&["O4294967295Si2"]).unwrap();
        let counts = resolve(100, &formulas, &[1.0]).unwrap();
        assert_eq!(counts.get("Si"), Some(0));
        assert_eq!(counts.total(), 100);
    }

    #[test]
    fn test_count_out_of_integer_range() {
        let formulas = parse_formulas(&["SiO2"]).unwrap();

        // 1e300 * i64::MAX 溢出为 inf
        match resolve(i64::MAX, &formulas, &[1e300]) {
            Err(GlassError::InvalidArgument(msg)) => assert!(msg.contains("'Si'"), "{}", msg),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }

        // 有限但超过 u64 上限
        match resolve(i64::MAX, &formulas, &[1e6]) {
            Err(GlassError::InvalidArgument(msg)) => assert!(msg.contains("'Si'"), "{}", msg),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }

        let counts = resolve(i64::MAX, &formulas, &[1.0]).unwrap();
        assert!(counts.total() > 0);
    }

    #[test]
    fn test_rounding_policy_ties() {
        assert_eq!(RoundingPolicy::HalfEven.apply(2.5), 2.0);
        assert_eq!(RoundingPolicy::HalfEven.apply(3.5), 4.0);
        assert_eq!(RoundingPolicy::HalfEven.apply(0.5), 0.0);
        assert_eq!(RoundingPolicy::HalfAwayFromZero.apply(2.5), 3.0);
        assert_eq!(RoundingPolicy::HalfAwayFromZero.apply(3.5), 4.0);
        assert_eq!(RoundingPolicy::HalfAwayFromZero.apply(0.5), 1.0);
        assert_eq!(RoundingPolicy::HalfEven.apply(2.4999), 2.0);
    }

    #[test]
    fn test_exact_half_split_is_not_normalized() {
        // NaCl 的 5 个原子各分得 2.5
        let formulas = vec![Formula::new(
            "NaCl",
            vec![FormulaTerm::new("Na", 1), FormulaTerm::new("Cl", 1)],
        )];

        let even = CompositionResolver::new(5).unwrap();
        let counts = even.resolve(&formulas, &[1.0]).unwrap();
        assert_eq!(counts.get("Na"), Some(2));
        assert_eq!(counts.get("Cl"), Some(2));
        assert_eq!(counts.total(), 4);

        let away = even.with_policy(RoundingPolicy::HalfAwayFromZero);
        let counts = away.resolve(&formulas, &[1.0]).unwrap();
        assert_eq!(counts.total(), 6);

        let counts = CompositionResolver::new(7)
            .unwrap()
            .resolve(&formulas, &[1.0])
            .unwrap();
        assert_eq!(counts.get("Na"), Some(4));
    }

    #[test]
    fn test_unnormalized_ratios_are_accepted() {
        // 摩尔比之和为 0.75，目标 75 个原子；逐元素舍入后得到 76
        let counts = resolve(100, &soda_silica(), &[0.5, 0.25]).unwrap();
        assert_eq!(counts.get("Si"), Some(17));
        assert_eq!(counts.get("O"), Some(42));
        assert_eq!(counts.get("Na"), Some(17));
        assert_eq!(counts.total(), 76);
    }

    #[test]
    fn test_zero_ratio_keeps_element() {
        let formulas = parse_formulas(&["SiO2", "CaO"]).unwrap();
        let counts = resolve(30, &formulas, &[1.0, 0.0]).unwrap();
        assert_eq!(counts.symbols(), vec!["Si", "O", "Ca"]);
        assert_eq!(counts.get("Ca"), Some(0));
    }

    #[test]
    fn test_atom_conservation_bound() {
        let formulas = parse_formulas(&["SiO2", "Na2O", "Al2O3", "CaO", "P2O5"]).unwrap();
        let resolver = CompositionResolver::new(1237).unwrap();

        for step in 0..20 {
            let a = 0.01 * step as f64;
            let ratios = [0.55 - a, 0.15, 0.1 + a / 2.0, 0.12, 0.08 + a / 2.0];
            let counts = resolver.resolve(&formulas, &ratios).unwrap();
            let expected: f64 = ratios.iter().sum::<f64>() * 1237.0;
            let bound = counts.symbols().len() as f64 * 0.5;
            assert!(
                (counts.total() as f64 - expected).abs() <= bound + 1e-9,
                "row {}: total {} vs {}",
                step,
                counts.total(),
                expected
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let formulas = parse_formulas(&["B2O3", "Li2O", "ZnO"]).unwrap();
        let ratios = [0.333, 0.333, 0.334];
        let first = resolve(9999, &formulas, &ratios).unwrap();
        let second = resolve(9999, &formulas, &ratios).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_check_normalized() {
        assert!(check_normalized(&[0.75, 0.25], 1e-9).is_ok());
        assert!(check_normalized(&[0.7, 0.2, 0.1], 1e-9).is_ok());
        assert!(matches!(
            check_normalized(&[0.5, 0.25], 1e-6),
            Err(GlassError::NotNormalized { .. })
        ));
        assert!(check_normalized(&[f64::NAN], 1e-6).is_err());
    }
}
