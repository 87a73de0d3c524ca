//! # density 命令实现
//!
//! 为 CSV 成分数据集的每一行估算玻璃密度，并写回为新列。
//!
//! ## 功能
//! - 加载内置或自定义物理常数表
//! - 按行并行估算（行级错误隔离，失败行留空）
//! - 默认覆盖输入文件，可指定 `--output`
//!
//! ## 依赖关系
//! - 使用 `cli/density.rs` 定义的参数
//! - 使用 `parsers/dataset.rs`, `parsers/constants.rs`, `glass/density.rs`
//! - 使用 `batch/` 进行并行处理

use crate::batch::BatchRunner;
use crate::cli::density::DensityArgs;
use crate::error::{GlassError, Result};
use crate::glass::DensityEstimator;
use crate::parsers::{self, Dataset};
use crate::utils::output;

/// 执行 density 命令
pub fn execute(args: DensityArgs) -> Result<()> {
    output::print_header("Estimating Glass Density");

    let constants = parsers::load_constants(args.constants.as_deref())?;
    match args.constants {
        Some(ref path) => output::print_info(&format!(
            "Loaded {} compounds from '{}'",
            constants.len(),
            path.display()
        )),
        None => output::print_info(&format!(
            "Using built-in constants for {} compounds",
            constants.len()
        )),
    }

    let mut dataset = Dataset::read_file(&args.input)?;
    let columns = dataset.composition_columns(&constants);
    output::print_info(&format!(
        "Read {} rows; composition columns: {}",
        dataset.len(),
        columns
            .iter()
            .map(|(c, _)| c.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    ));

    if columns.is_empty() {
        output::print_warning("No column header matches a compound in the constant table.");
    }

    let estimator = DensityEstimator::new(&constants);
    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!("Estimating with {} jobs", runner.jobs()));
    let report = runner.run(&dataset.records, "Estimating", |record| {
        let composition = Dataset::composition_of(record, &columns)?;
        estimator.estimate(&composition)
    })?;

    output::print_batch_summary(report.success, report.failed, report.failures());

    if args.fail_fast && report.failed > 0 {
        return Err(report
            .into_first_failure()
            .unwrap_or_else(|| GlassError::Other("batch failed".to_string())));
    }

    let densities: Vec<f64> = report
        .outcomes
        .iter()
        .filter_map(|(_, r)| r.as_ref().ok().copied())
        .collect();
    if let Some((min, max, mean)) = summarize(&densities) {
        output::print_info(&format!(
            "Density range {:.4} – {:.4} g/cm³ (mean {:.4})",
            min, max, mean
        ));
    }

    let values: Vec<String> = report
        .outcomes
        .into_iter()
        .map(|(_, r)| r.map(|d| d.to_string()).unwrap_or_default())
        .collect();
    dataset.set_column(&args.column, values)?;

    let output_path = args.output.as_ref().unwrap_or(&args.input);
    dataset.write_file(output_path)?;

    output::print_done(&format!(
        "Density calculations completed. Results saved in '{}'",
        output_path.display()
    ));

    Ok(())
}

/// (最小值, 最大值, 平均值)
fn summarize(values: &[f64]) -> Option<(f64, f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    Some((min, max, mean))
}
