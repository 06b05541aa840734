// ==========================================
// 供应商产能对账系统 - 领域模型层
// ==========================================
// 职责: 定义键类型、数据记录、报表结构
// 红线: 不含文件解析逻辑,不含引擎逻辑
// ==========================================

pub mod records;
pub mod report;
pub mod types;

// 重导出核心类型
pub use records::{
    BookedRecord, CapacityRecord, CombinedRow, ForecastRecord, MonthlyQuantity, ReconciledRow,
};
pub use report::{format_pct, ReportCell, ReportRow, ReportTable};
pub use types::{MetricLine, PeriodKey, UtilizationFlag, VendorKey, MONTH_ABBR};
