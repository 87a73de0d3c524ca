//! # 成分数据集 (CSV) 读写
//!
//! 读取带表头的成分数据集，按常数表中的化合物提取每行成分，
//! 并在写回时追加（或替换）一列计算结果。
//!
//! ## 规则
//! - 表头名与常数表中的化合物名完全一致的列视为成分列
//! - 空单元格与 NaN 视为该化合物缺省，不计入成分
//! - 其余列原样保留
//!
//! ## 依赖关系
//! - 被 `commands/density.rs` 使用
//! - 使用 `models/composition.rs`, `models/constants.rs`
//! - 使用 `csv` crate

use crate::error::{GlassError, Result};
use crate::models::{Composition, PhysicalConstants};

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// 内存中的 CSV 数据集
#[derive(Debug, Clone)]
pub struct Dataset {
    /// 表头
    pub headers: Vec<String>,
    /// 数据行
    pub records: Vec<Vec<String>>,
}

impl Dataset {
    /// 读取 CSV 文件
    pub fn read_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GlassError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let file = File::open(path).map_err(|e| GlassError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::read_from(file)
    }

    /// 从任意读取器读取 CSV
    pub fn read_from<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = rdr.headers()?.iter().map(|h| h.to_string()).collect();

        let mut records = Vec::new();
        for record in rdr.records() {
            let record = record?;
            records.push(record.iter().map(|f| f.to_string()).collect());
        }

        Ok(Dataset { headers, records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 列索引
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// 成分列：(化合物, 列索引)，按常数表顺序
    pub fn composition_columns(&self, constants: &PhysicalConstants) -> Vec<(String, usize)> {
        constants
            .compounds()
            .iter()
            .filter_map(|c| self.column_index(c).map(|idx| (c.clone(), idx)))
            .collect()
    }

    /// 从单行记录提取成分
    ///
    /// 无法解析的成分单元格只让该行失败。
    pub fn composition_of(record: &[String], columns: &[(String, usize)]) -> Result<Composition> {
        let mut composition = Composition::new();
        for (compound, idx) in columns {
            let cell = record.get(*idx).map(|s| s.trim()).unwrap_or("");
            if cell.is_empty() {
                continue;
            }
            let amount = cell.parse::<f64>().map_err(|_| {
                GlassError::InvalidArgument(format!(
                    "cannot parse '{}' in column '{}'",
                    cell, compound
                ))
            })?;
            if amount.is_nan() {
                continue;
            }
            composition.push(compound.as_str(), amount);
        }
        Ok(composition)
    }

    /// 设置一列数据：同名列存在则替换，否则追加到末尾
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        if values.len() != self.records.len() {
            return Err(GlassError::DimensionMismatch {
                expected: self.records.len(),
                found: values.len(),
            });
        }

        match self.column_index(name) {
            Some(idx) => {
                for (record, value) in self.records.iter_mut().zip(values) {
                    record[idx] = value;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (record, value) in self.records.iter_mut().zip(values) {
                    record.push(value);
                }
            }
        }

        Ok(())
    }

    /// 写入任意输出
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        wtr.write_record(&self.headers)?;
        for record in &self.records {
            wtr.write_record(record)?;
        }

        wtr.flush().map_err(|e| GlassError::FileWriteError {
            path: "<csv>".to_string(),
            source: e,
        })?;

        Ok(())
    }

    /// 写入 CSV 文件
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| GlassError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;
        self.write_to(file).map_err(|e| match e {
            GlassError::FileWriteError { source, .. } => GlassError::FileWriteError {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })
    }
}
