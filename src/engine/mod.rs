// ==========================================
// 供应商产能对账系统 - 引擎层
// ==========================================
// 职责: 五个流水线阶段 (规范化/聚合/对账/指标/透视) + 编排
// 红线: 每阶段为纯函数,中间表按值传递,不共享可变状态
// ==========================================

pub mod aggregator;
pub mod metrics;
pub mod normalizer;
pub mod pipeline;
pub mod reconciler;
pub mod report_shaper;

// 重导出核心引擎
pub use aggregator::Aggregator;
pub use metrics::{MetricEngine, OVERBOOKED_THRESHOLD, UNDERUTILIZED_THRESHOLD};
pub use normalizer::Normalizer;
pub use pipeline::{ReconOutput, ReconPipeline};
pub use reconciler::Reconciler;
pub use report_shaper::ReportShaper;
