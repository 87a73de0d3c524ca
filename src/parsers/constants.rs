//! # 物理常数表解析器
//!
//! 从 CSV 加载自定义的分子量 / 堆积密度常数表，替换内置表。
//!
//! ## 格式说明
//! ```text
//! compound,molecular_weight,packing_density
//! SiO2,60.08,13.9e-6
//! GeO2,104.61,14.6e-6
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/density.rs`, `commands/compounds.rs` 使用
//! - 使用 `models/constants.rs`
//! - 使用 `csv` + `serde` 反序列化

use crate::error::{GlassError, Result};
use crate::models::PhysicalConstants;

use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// CSV 中的一条常数记录
#[derive(Debug, Deserialize)]
struct ConstantRecord {
    compound: String,
    molecular_weight: f64,
    packing_density: f64,
}

/// 加载常数表：给定路径时读取 CSV，否则使用内置表
pub fn load_constants(path: Option<&Path>) -> Result<PhysicalConstants> {
    match path {
        Some(p) => parse_constants_file(p),
        None => Ok(PhysicalConstants::builtin()),
    }
}

/// 解析常数表 CSV 文件
pub fn parse_constants_file(path: &Path) -> Result<PhysicalConstants> {
    let file = File::open(path).map_err(|e| GlassError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_constants_reader(file, &path.display().to_string())
}

/// 从任意读取器解析常数表
pub fn parse_constants_reader<R: Read>(reader: R, source: &str) -> Result<PhysicalConstants> {
    let parse_error = |reason: String| GlassError::ParseError {
        format: "constants".to_string(),
        path: source.to_string(),
        reason,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for record in rdr.deserialize() {
        let record: ConstantRecord = record?;

        if record.compound.is_empty() {
            return Err(parse_error("Empty compound name".to_string()));
        }
        if !seen.insert(record.compound.clone()) {
            return Err(parse_error(format!(
                "Duplicate compound '{}'",
                record.compound
            )));
        }
        for (name, value) in [
            ("molecular_weight", record.molecular_weight),
            ("packing_density", record.packing_density),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(parse_error(format!(
                    "Invalid {} {} for '{}'",
                    name, value, record.compound
                )));
            }
        }

        entries.push((
            record.compound,
            record.molecular_weight,
            record.packing_density,
        ));
    }

    if entries.is_empty() {
        return Err(parse_error("No compounds defined".to_string()));
    }

    Ok(PhysicalConstants::from_entries(entries))
}
