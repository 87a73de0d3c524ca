//! # 原子数导出
//!
//! 将解析得到的原子数写成外部配置生成工具读取的定宽文本块，
//! 或汇总为 CSV。
//!
//! ## 定宽块格式
//! ```text
//! # composition 1 (100 atoms)
//! 42
//! Simulation Run 1
//! Si     O      Na
//!     25     58     17
//! 2.41
//! Y
//! ```
//! 注释行之后依次为随机种子、标题、元素符号、原子数、密度、立方晶胞标志，
//! 与配置工具从标准输入读取的顺序一致。
//! 元素符号左对齐宽 6，原子数右对齐宽 6，以单个空格连接。
//!
//! ## 依赖关系
//! - 被 `commands/atoms.rs` 调用
//! - 使用 `models/composition.rs` 的 AtomCountMap
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{GlassError, Result};
use crate::models::AtomCountMap;

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// 一行解析结果
#[derive(Debug, Clone)]
pub struct ResolvedRow {
    /// 行号（从 1 开始）
    pub row: usize,
    /// 各元素原子数
    pub counts: AtomCountMap,
    /// 行附带的密度 (g/cm³)
    pub density: Option<f64>,
}

/// 配置工具的运行参数
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadOptions {
    /// 随机种子
    pub seed: u64,
    /// 运行标题
    pub title: String,
    /// 是否使用立方晶胞
    pub cubic: bool,
}

impl Default for PayloadOptions {
    fn default() -> Self {
        PayloadOptions {
            seed: 42,
            title: "Simulation Run 1".to_string(),
            cubic: true,
        }
    }
}

/// 元素符号行
pub fn format_symbols(counts: &AtomCountMap) -> String {
    counts
        .symbols()
        .iter()
        .map(|s| format!("{:<6}", s))
        .collect::<Vec<_>>()
        .join(" ")
}

/// 原子数行
pub fn format_counts(counts: &AtomCountMap) -> String {
    counts
        .counts()
        .iter()
        .map(|c| format!("{:>6}", c))
        .collect::<Vec<_>>()
        .join(" ")
}

/// 单行的定宽文本块
pub fn payload_block(resolved: &ResolvedRow, options: &PayloadOptions) -> String {
    let density = resolved
        .density
        .map(|d| d.to_string())
        .unwrap_or_default();

    format!(
        "# composition {} ({} atoms)\n{}\n{}\n{}\n{}\n{}\n{}\n",
        resolved.row,
        resolved.counts.total(),
        options.seed,
        options.title,
        format_symbols(&resolved.counts),
        format_counts(&resolved.counts),
        density,
        if options.cubic { "Y" } else { "N" }
    )
}

/// 写入定宽文本块
pub fn write_payload<W: Write>(
    rows: &[ResolvedRow],
    options: &PayloadOptions,
    mut out: W,
) -> std::io::Result<()> {
    for resolved in rows {
        writeln!(out, "{}", payload_block(resolved, options))?;
    }
    out.flush()
}

/// 写入定宽文本块文件
pub fn payload_to_file(
    rows: &[ResolvedRow],
    options: &PayloadOptions,
    output_path: &Path,
) -> Result<()> {
    let file = File::create(output_path).map_err(|e| GlassError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    write_payload(rows, options, file).map_err(|e| GlassError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}

/// 汇总为 CSV：row, 各元素..., total, density
pub fn write_csv<W: Write>(rows: &[ResolvedRow], out: W) -> Result<()> {
    let mut elements: Vec<&str> = Vec::new();
    for resolved in rows {
        for symbol in resolved.counts.symbols() {
            if !elements.contains(&symbol) {
                elements.push(symbol);
            }
        }
    }

    let mut wtr = csv::Writer::from_writer(out);

    let mut header = vec!["row"];
    header.extend(elements.iter().copied());
    header.extend(["total", "density"]);
    wtr.write_record(&header)?;

    for resolved in rows {
        let mut record = vec![resolved.row.to_string()];
        for symbol in &elements {
            record.push(
                resolved
                    .counts
                    .get(symbol)
                    .map(|c| c.to_string())
                    .unwrap_or_default(),
            );
        }
        record.push(resolved.counts.total().to_string());
        record.push(resolved.density.map(|d| d.to_string()).unwrap_or_default());
        wtr.write_record(&record)?;
    }

    wtr.flush().map_err(|e| GlassError::FileWriteError {
        path: "<csv>".to_string(),
        source: e,
    })?;

    Ok(())
}

/// 汇总为 CSV 文件
pub fn csv_to_file(rows: &[ResolvedRow], output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| GlassError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    write_csv(rows, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soda_silica_row() -> ResolvedRow {
        let mut counts = AtomCountMap::new();
        counts.insert("Si", 25);
        counts.insert("O", 58);
        counts.insert("Na", 17);
        ResolvedRow {
            row: 1,
            counts,
            density: Some(2.41),
        }
    }

    #[test]
    fn test_fixed_width_lines() {
        let row = soda_silica_row();
        assert_eq!(format_symbols(&row.counts), "Si     O      Na    ");
        assert_eq!(format_counts(&row.counts), "    25     58     17");
    }

    #[test]
    fn test_payload_block() {
        let mut row = soda_silica_row();
        let block = payload_block(&row, &PayloadOptions::default());
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "# composition 1 (100 atoms)");
        assert_eq!(lines[1], "42");
        assert_eq!(lines[2], "Simulation Run 1");
        assert_eq!(lines[3], "Si     O      Na    ");
        assert_eq!(lines[4], "    25     58     17");
        assert_eq!(lines[5], "2.41");
        assert_eq!(lines[6], "Y");

        row.density = None;
        let options = PayloadOptions {
            seed: 7,
            title: "Borosilicate".to_string(),
            cubic: false,
        };
        let block = payload_block(&row, &options);
        assert!(block.starts_with("# composition 1 (100 atoms)\n7\nBorosilicate\n"));
        assert!(block.ends_with("    17\n\nN\n"));
    }

    #[test]
    fn test_write_payload_separates_blocks() {
        let mut buf = Vec::new();
        let rows = [soda_silica_row(), soda_silica_row()];
        write_payload(&rows, &PayloadOptions::default(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches("# composition").count(), 2);
        assert!(text.contains("Y\n\n# composition"));
    }

    #[test]
    fn test_write_csv_union_of_elements() {
        let first = soda_silica_row();
        let mut counts = AtomCountMap::new();
        counts.insert("Si", 33);
        counts.insert("O", 67);
        let second = ResolvedRow {
            row: 2,
            counts,
            density: None,
        };

        let mut buf = Vec::new();
        write_csv(&[first, second], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "row,Si,O,Na,total,density");
        assert_eq!(lines[1], "1,25,58,17,100,2.41");
        assert_eq!(lines[2], "2,33,67,,100,");
    }
}
