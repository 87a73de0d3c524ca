//! # atoms 命令实现
//!
//! 将成分文件中每行的摩尔比转换为各元素整数原子数。
//!
//! ## 功能
//! - 读取成分文件并解析化合物化学式
//! - 按行并行解析原子数（行级错误隔离）
//! - 终端表格展示
//! - 可选输出配置工具输入块 / CSV 汇总
//!
//! ## 依赖关系
//! - 使用 `cli/atoms.rs` 定义的参数
//! - 使用 `parsers/compositions.rs`, `glass/resolver.rs`, `glass/export.rs`
//! - 使用 `batch/` 进行并行处理

use crate::batch::BatchRunner;
use crate::cli::atoms::AtomsArgs;
use crate::error::{GlassError, Result};
use crate::glass::export::PayloadOptions;
use crate::glass::{check_normalized, export, CompositionResolver, ResolvedRow};
use crate::models::{CompositionRow, Formula};
use crate::parsers;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 终端表格行
#[derive(Debug, Clone, Tabled)]
struct AtomsRow {
    #[tabled(rename = "Row")]
    row: usize,
    #[tabled(rename = "Atom counts")]
    counts: String,
    #[tabled(rename = "Total")]
    total: u64,
    #[tabled(rename = "Drift")]
    drift: i64,
    #[tabled(rename = "Density (g/cm³)")]
    density: String,
}

/// 执行 atoms 命令
pub fn execute(args: AtomsArgs) -> Result<()> {
    output::print_header("Resolving Atom Counts");

    let resolver = CompositionResolver::new(args.total_atoms)?.with_policy(args.rounding.into());

    let set = parsers::parse_compositions_file(&args.input)?;
    output::print_info(&format!(
        "Loaded {} compositions over {} compounds: {}",
        set.rows.len(),
        set.compounds.len(),
        set.compounds.join(" ")
    ));
    if set.rows.is_empty() {
        output::print_warning("No composition rows found.");
        return Ok(());
    }

    let strict = args.strict_sum.then_some(args.sum_tolerance);
    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!(
        "Target {} atoms, rounding {}, {} jobs",
        resolver.total_atoms(),
        resolver.policy(),
        runner.jobs()
    ));
    let report = runner.run(&set.rows, "Resolving", |row| {
        resolve_row(&resolver, &set.formulas, row, strict)
    })?;

    output::print_batch_summary(report.success, report.failed, report.failures());

    if args.fail_fast && report.failed > 0 {
        return Err(report
            .into_first_failure()
            .unwrap_or_else(|| GlassError::Other("batch failed".to_string())));
    }

    let resolved: Vec<ResolvedRow> = report
        .outcomes
        .into_iter()
        .filter_map(|(_, r)| r.ok())
        .collect();

    if resolved.is_empty() {
        output::print_warning("No composition could be resolved.");
        return Ok(());
    }

    let target = resolver.total_atoms() as i64;
    let table_rows: Vec<AtomsRow> = resolved
        .iter()
        .map(|r| AtomsRow {
            row: r.row,
            counts: r
                .counts
                .iter()
                .map(|(s, c)| format!("{}:{}", s, c))
                .collect::<Vec<_>>()
                .join(" "),
            total: r.counts.total(),
            drift: r.counts.total() as i64 - target,
            density: r.density.map(|d| format!("{:.4}", d)).unwrap_or_default(),
        })
        .collect();

    println!("{}", Table::new(&table_rows));

    let drifted = table_rows.iter().filter(|r| r.drift != 0).count();
    if drifted > 0 {
        output::print_warning(&format!(
            "{} rows differ from the {}-atom target after per-element rounding",
            drifted, target
        ));
    }

    if let Some(ref path) = args.output {
        let options = PayloadOptions {
            seed: args.seed,
            title: args.title.clone(),
            cubic: args.cubic,
        };
        export::payload_to_file(&resolved, &options, path)?;
        output::print_success(&format!("Configuration input written to '{}'", path.display()));
    }

    if let Some(ref path) = args.csv {
        export::csv_to_file(&resolved, path)?;
        output::print_success(&format!("Atom-count summary written to '{}'", path.display()));
    }

    output::print_done(&format!("Resolved {} compositions", resolved.len()));

    Ok(())
}

/// 解析单行：原子数 + 可选摩尔比归一化检查
fn resolve_row(
    resolver: &CompositionResolver,
    formulas: &[Formula],
    row: &CompositionRow,
    strict_tolerance: Option<f64>,
) -> Result<ResolvedRow> {
    let counts = resolver.resolve(formulas, &row.ratios)?;

    if let Some(tolerance) = strict_tolerance {
        check_normalized(&row.ratios, tolerance)?;
    }

    Ok(ResolvedRow {
        row: row.index,
        counts,
        density: row.density,
    })
}
