//! # 统一错误处理模块
//!
//! 定义 glassprep 的所有错误类型，使用 `thiserror` 派生。
//!
//! 成分解析与密度估算的错误都是"行级"的：批量处理时由调用方决定
//! 中止整个批次还是跳过并报告。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// glassprep 统一错误类型
#[derive(Error, Debug)]
pub enum GlassError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Malformed formula '{formula}': {reason}")]
    MalformedFormula { formula: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 成分 / 密度计算错误
    // ─────────────────────────────────────────────────────────────
    #[error("Dimension mismatch: expected {expected} values, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Unknown compound '{compound}' (missing from {table} table)")]
    UnknownCompound { compound: String, table: String },

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Molar ratios sum to {sum}, expected 1 within {tolerance}")]
    NotNormalized { sum: f64, tolerance: f64 },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("Row {row}: {source}")]
    RowFailed {
        row: usize,
        #[source]
        source: Box<GlassError>,
    },

    #[error("{0}")]
    Other(String),
}

impl GlassError {
    /// 附加行号（从 1 开始），用于批量处理中定位失败行
    pub fn at_row(self, row: usize) -> Self {
        GlassError::RowFailed {
            row,
            source: Box::new(self),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, GlassError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_failed_message() {
        let err = GlassError::DimensionMismatch {
            expected: 2,
            found: 3,
        }
        .at_row(4);
        assert_eq!(
            err.to_string(),
            "Row 4: Dimension mismatch: expected 2 values, found 3"
        );
    }
}
