// ==========================================
// 供应商产能对账系统 - 配置层
// ==========================================
// 职责: 流水线运行参数
// ==========================================

use serde::{Deserialize, Serialize};

/// 产能源年份默认值
///
/// 产能宽表没有年份字段,只能整体指定一个年份 —— 已知范围限制,
/// 跨年产能文件不在支持范围内,调用方可通过配置覆盖
pub const DEFAULT_CAPACITY_YEAR: i32 = 2025;

/// 导出工作表默认名称
pub const DEFAULT_SHEET_NAME: &str = "Utilization_Report";

// ==========================================
// PipelineConfig - 流水线配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// 产能期间所属年份 (源文件无年份列)
    pub capacity_year: i32,

    /// 导出工作表名称
    pub sheet_name: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            capacity_year: DEFAULT_CAPACITY_YEAR,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}
