//! # compounds 命令实现
//!
//! 列出物理常数表，或检查指定化学式的解析结果。
//!
//! ## 依赖关系
//! - 使用 `cli/compounds.rs` 定义的参数
//! - 使用 `parsers/formula.rs`, `parsers/constants.rs`, `glass/density.rs`

use crate::cli::compounds::CompoundsArgs;
use crate::error::Result;
use crate::glass::DensityEstimator;
use crate::models::{Composition, Formula, PhysicalConstants};
use crate::parsers::{self, parse_formula};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 化合物表格行
#[derive(Debug, Clone, Tabled)]
struct CompoundRow {
    #[tabled(rename = "Compound")]
    compound: String,
    #[tabled(rename = "Elements")]
    elements: String,
    #[tabled(rename = "Units")]
    units: u64,
    #[tabled(rename = "M (g/mol)")]
    molecular_weight: String,
    #[tabled(rename = "Packing density")]
    packing_density: String,
    #[tabled(rename = "Pure ρ (g/cm³)")]
    pure_density: String,
}

/// 执行 compounds 命令
pub fn execute(args: CompoundsArgs) -> Result<()> {
    output::print_header("Compounds");

    let constants = parsers::load_constants(args.constants.as_deref())?;

    let names: Vec<String> = if args.formulas.is_empty() {
        constants.compounds().to_vec()
    } else {
        args.formulas.clone()
    };

    let mut rows = Vec::new();
    let mut malformed = 0;
    for name in &names {
        match parse_formula(name) {
            Ok(formula) => rows.push(compound_row(&formula, &constants)),
            Err(e) => {
                output::print_error(&e.to_string());
                malformed += 1;
            }
        }
    }

    if !rows.is_empty() {
        println!("{}", Table::new(&rows));
    }

    if malformed > 0 {
        output::print_warning(&format!("{} formulas could not be parsed", malformed));
    }
    output::print_done(&format!("Listed {} compounds", rows.len()));

    Ok(())
}

fn compound_row(formula: &Formula, constants: &PhysicalConstants) -> CompoundRow {
    let missing = || "-".to_string();
    let estimator = DensityEstimator::new(constants);

    CompoundRow {
        compound: formula.compound.clone(),
        elements: formula
            .terms
            .iter()
            .map(|t| format!("{}×{}", t.symbol, t.count))
            .collect::<Vec<_>>()
            .join(" "),
        units: formula.stoichiometric_units(),
        molecular_weight: constants
            .molecular_weight(&formula.compound)
            .map(|v| format!("{:.3}", v))
            .unwrap_or_else(|_| missing()),
        packing_density: constants
            .packing_density(&formula.compound)
            .map(|v| format!("{:.3e}", v))
            .unwrap_or_else(|_| missing()),
        pure_density: estimator
            .estimate(&Composition::new().with(formula.compound.as_str(), 1.0))
            .map(|v| format!("{:.4}", v))
            .unwrap_or_else(|_| missing()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_row_known_and_unknown() {
        let constants = PhysicalConstants::builtin();

        let row = compound_row(&parse_formula("Al2O3").unwrap(), &constants);
        assert_eq!(row.elements, "Al×2 O×3");
        assert_eq!(row.units, 5);
        assert_eq!(row.molecular_weight, "101.960");
        assert_ne!(row.pure_density, "-");

        let row = compound_row(&parse_formula("GeO2").unwrap(), &constants);
        assert_eq!(row.molecular_weight, "-");
        assert_eq!(row.pure_density, "-");
    }
}
