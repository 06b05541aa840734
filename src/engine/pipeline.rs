// ==========================================
// 供应商产能对账系统 - 对账流水线编排
// ==========================================
// 职责: 按依赖顺序串联五个阶段,所有中间表按值传递
// 红线: 单次同步批处理,无共享可变状态,每次运行全量重算
// ==========================================

use crate::config::PipelineConfig;
use crate::domain::records::ReconciledRow;
use crate::domain::report::ReportTable;
use crate::engine::aggregator::Aggregator;
use crate::engine::metrics::MetricEngine;
use crate::engine::normalizer::Normalizer;
use crate::engine::reconciler::Reconciler;
use crate::engine::report_shaper::ReportShaper;
use crate::importer::error::ImportResult;
use crate::importer::source_loader::{
    BookedLoader, CapacityLoader, ForecastLoader, RawCapacityTable, RawOrderRow,
};
use std::path::Path;
use tracing::info;

/// 流水线输出: 对账明细 + 透视报表
#[derive(Debug, Clone, PartialEq)]
pub struct ReconOutput {
    pub reconciled: Vec<ReconciledRow>,
    pub report: ReportTable,
}

pub struct ReconPipeline {
    config: PipelineConfig,
}

impl ReconPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        ReconPipeline { config }
    }

    /// 对已加载的三源原始行执行全流水线
    pub fn run(
        &self,
        booked_rows: Vec<RawOrderRow>,
        forecast_rows: Vec<RawOrderRow>,
        capacity_table: RawCapacityTable,
    ) -> ReconOutput {
        let normalizer = Normalizer;
        let aggregator = Aggregator;

        // 阶段 1: 规范化 (键派生 + 宽表逆透视)
        let booked = normalizer.normalize_booked(booked_rows);
        let forecast = normalizer.normalize_forecast(forecast_rows);
        let capacity = normalizer.normalize_capacity(capacity_table, self.config.capacity_year);

        // 阶段 2: 聚合 (消除重复键)
        let booked = aggregator.aggregate(booked);
        let forecast = aggregator.aggregate(forecast);
        let capacity = aggregator.aggregate(capacity);
        info!(
            "聚合完成: booked {} / forecast {} / capacity {} 条",
            booked.len(),
            forecast.len(),
            capacity.len()
        );

        // 阶段 3: 对账联结 (键全集并集,缺失补 0)
        let combined = Reconciler.reconcile(booked, forecast, capacity);

        // 阶段 4: 指标派生
        let reconciled = MetricEngine.derive_all(combined);

        // 阶段 5: 报表透视
        let report = ReportShaper.shape(&reconciled);
        info!(
            "对账完成: {} 个供应商, {} 个期间, {} 条对账行",
            report.vendors.len(),
            report.periods.len(),
            reconciled.len()
        );

        ReconOutput { reconciled, report }
    }

    /// 从三个输入文件加载并执行全流水线 (CLI 入口使用)
    pub fn run_from_files<P: AsRef<Path>>(
        &self,
        booked_path: P,
        forecast_path: P,
        capacity_path: P,
    ) -> ImportResult<ReconOutput> {
        let booked_rows = BookedLoader.load(booked_path)?;
        let forecast_rows = ForecastLoader.load(forecast_path)?;
        let capacity_table = CapacityLoader.load(capacity_path)?;
        Ok(self.run(booked_rows, forecast_rows, capacity_table))
    }
}
