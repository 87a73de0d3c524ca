//! # 批量执行器
//!
//! 按行并行执行成分计算任务。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代，结果按行序返回
//! - 进度条显示
//! - 行级错误收集：单行失败不影响其他行
//!
//! ## 依赖关系
//! - 被 `commands/atoms.rs`, `commands/density.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{GlassError, Result};
use crate::utils::progress;

use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 批量处理结果
#[derive(Debug)]
pub struct BatchReport<R> {
    /// (行号, 结果)，行号从 1 开始，按行序排列
    pub outcomes: Vec<(usize, Result<R>)>,
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
}

impl<R> BatchReport<R> {
    fn from_outcomes(outcomes: Vec<(usize, Result<R>)>) -> Self {
        let failed = outcomes.iter().filter(|(_, r)| r.is_err()).count();
        Self {
            success: outcomes.len() - failed,
            failed,
            outcomes,
        }
    }

    /// 失败详情
    pub fn failures(&self) -> impl Iterator<Item = (usize, &GlassError)> {
        self.outcomes
            .iter()
            .filter_map(|(row, r)| r.as_ref().err().map(|e| (*row, e)))
    }

    /// 取出行号最小的失败，附带行号
    pub fn into_first_failure(self) -> Option<GlassError> {
        self.outcomes
            .into_iter()
            .find_map(|(row, r)| r.err().map(|e| e.at_row(row)))
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 = 使用全部 CPU）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理所有行
    pub fn run<T, R, F>(&self, rows: &[T], message: &str, processor: F) -> Result<BatchReport<R>>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> Result<R> + Sync + Send,
    {
        let pb = progress::create_progress_bar(rows.len() as u64, message);
        let failed_count = AtomicUsize::new(0);

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| GlassError::Other(format!("Failed to build thread pool: {}", e)))?;

        let outcomes: Vec<(usize, Result<R>)> = pool.install(|| {
            rows.par_iter()
                .enumerate()
                .map(|(i, row)| {
                    let result = processor(row);

                    if result.is_err() {
                        let n = failed_count.fetch_add(1, Ordering::Relaxed) + 1;
                        pb.set_message(format!("{} ({} failed)", message, n));
                    }

                    pb.inc(1);
                    (i + 1, result)
                })
                .collect()
        });

        pb.finish_and_clear();

        Ok(BatchReport::from_outcomes(outcomes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_preserves_row_order_and_isolates_failures() {
        let rows: Vec<i64> = (1..=50).collect();
        let runner = BatchRunner::new(4);

        let report = runner
            .run(&rows, "Squaring", |&x| {
                if x % 10 == 0 {
                    Err(GlassError::InvalidArgument(format!("{} is a multiple of 10", x)))
                } else {
                    Ok(x * x)
                }
            })
            .unwrap();

        assert_eq!(report.outcomes.len(), 50);
        assert_eq!(report.failed, 5);
        assert_eq!(report.success, 45);

        for (row, result) in &report.outcomes {
            let x = *row as i64;
            match result {
                Ok(v) => assert_eq!(*v, x * x),
                Err(_) => assert_eq!(x % 10, 0),
            }
        }

        let failed_rows: Vec<usize> = report.failures().map(|(row, _)| row).collect();
        assert_eq!(failed_rows, vec![10, 20, 30, 40, 50]);

        let first = report.into_first_failure().unwrap();
        assert!(first.to_string().starts_with("Row 10:"));
    }

    #[test]
    fn test_zero_jobs_uses_all_cpus() {
        assert_eq!(BatchRunner::new(0).jobs(), num_cpus::get());
    }
}
