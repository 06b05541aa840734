// ==========================================
// 供应商产能对账系统 - 数据清洗器实现
// ==========================================
// 职责: 宽容日期解析 / 数值解析
// 说明: 供应商键的 TRIM/UPPER 在 VendorKey::new,单元格 TRIM 在文件解析器
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use chrono::NaiveDate;

// 宽容解析尝试的日期格式,按顺序命中即止
// 斜线日期按日-月-年优先解释,数据源应尽量使用 ISO 日期
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%d/%m/%Y", "%m/%d/%Y", "%Y%m%d",
];

pub struct DataCleaner;

impl DataCleaner {
    /// 宽容日期解析: 失败返回 None (调用方按静默丢弃策略处理,不报错)
    pub fn parse_date_flexible(&self, value: &str) -> Option<NaiveDate> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        // 带时间部分的值只取日期段 (Excel 导出常见 "2025-06-01 00:00:00")
        let date_part = trimmed.split_whitespace().next().unwrap_or(trimmed);
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
    }

    /// 解析数值字段,空值按 0 处理,非法文本报类型转换错误
    pub fn parse_quantity(&self, value: &str, field: &str, row: usize) -> ImportResult<f64> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(0.0);
        }
        // 去掉千分位逗号
        let cleaned = trimmed.replace(',', "");
        cleaned
            .parse::<f64>()
            .map_err(|_| ImportError::TypeConversionError {
                row,
                field: field.to_string(),
                message: format!("无法解析为数值: {}", trimmed),
            })
    }
}
