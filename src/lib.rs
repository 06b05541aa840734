// ==========================================
// 供应商产能对账系统 - 核心库
// ==========================================
// 技术栈: Rust + csv/calamine + rust_xlsxwriter
// 系统定位: 三源对账与利用率报表 (单次批处理,无持久化)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 键类型与记录
pub mod domain;

// 导入层 - 文件解析与三源加载
pub mod importer;

// 引擎层 - 对账流水线五阶段
pub mod engine;

// 导出层 - 屏幕渲染与 Excel 写出
pub mod export;

// 配置层 - 流水线参数
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    BookedRecord, CapacityRecord, CombinedRow, ForecastRecord, MetricLine, PeriodKey,
    ReconciledRow, ReportCell, ReportRow, ReportTable, UtilizationFlag, VendorKey,
};

// 导入
pub use importer::{
    BookedLoader, CapacityLoader, ForecastLoader, ImportError, ImportResult, UniversalFileParser,
};

// 引擎
pub use engine::{
    Aggregator, MetricEngine, Normalizer, ReconOutput, ReconPipeline, Reconciler, ReportShaper,
};

// 导出
pub use export::{render_text, write_xlsx};

// 配置
pub use config::PipelineConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "供应商产能利用率对账系统";
