// ==========================================
// 供应商产能对账系统 - 列匹配策略
// ==========================================
// 职责: 将"运行时扫描列名"重构为显式模式匹配,返回类型化结果
// 红线: 列缺失是致命错误,必须在任何计算前终止流水线
// ==========================================

use crate::domain::types::MONTH_ABBR;
use crate::importer::error::{ImportError, ImportResult};

// ==========================================
// 固定列名 (三个数据源的最低要求)
// ==========================================
pub const BOOKED_VENDOR_COL: &str = "VENDOR";
pub const BOOKED_DATE_COL: &str = "PO exfac date";
pub const BOOKED_QTY_COL: &str = "Qty";

pub const FORECAST_VENDOR_COL: &str = "Vendor Name";
pub const FORECAST_QTY_COL: &str = "Confirmed New Planned Units";

pub const CAPACITY_VENDOR_COL: &str = "Vendor";

// 产能月份列的标记 (列名约定,如 "Jun FM")
const CAPACITY_MONTH_MARKER: &str = "FM";

/// 识别出的产能月份列: 列名 + 对应月份序号 (1..=12)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthColumn {
    pub header: String,
    pub month: u32,
}

pub struct SchemaMatcher;

impl SchemaMatcher {
    /// 校验必需列存在
    pub fn require_column(
        &self,
        headers: &[String],
        source_name: &'static str,
        column: &str,
    ) -> ImportResult<()> {
        if headers.iter().any(|h| h == column) {
            Ok(())
        } else {
            Err(ImportError::MissingColumn {
                source_name,
                column: column.to_string(),
            })
        }
    }

    /// 预测源 ex-factory 日期列识别: 列名包含 "ex-factory" (忽略大小写),
    /// 按表头顺序取首个命中;无命中为致命错误
    pub fn detect_ex_factory_column(&self, headers: &[String]) -> ImportResult<String> {
        headers
            .iter()
            .find(|h| h.to_lowercase().contains("ex-factory"))
            .cloned()
            .ok_or(ImportError::ExFactoryColumnNotFound)
    }

    /// 产能源月份列识别: 列名含 "FM" 标记,且首个空白分隔词的前 3 字符
    /// 与标准月份缩写大小写敏感匹配;零命中为致命错误
    pub fn detect_capacity_month_columns(
        &self,
        headers: &[String],
    ) -> ImportResult<Vec<MonthColumn>> {
        let mut columns = Vec::new();
        for header in headers {
            if !header.contains(CAPACITY_MONTH_MARKER) {
                continue;
            }
            let Some(token) = header.split_whitespace().next() else {
                continue;
            };
            // 前 3 字符前缀;过短或非 ASCII 边界的词直接跳过
            if !token.is_char_boundary(3) {
                continue;
            }
            let prefix = &token[..3];
            if let Some(idx) = MONTH_ABBR.iter().position(|abbr| *abbr == prefix) {
                columns.push(MonthColumn {
                    header: header.clone(),
                    month: (idx + 1) as u32,
                });
            }
        }

        if columns.is_empty() {
            return Err(ImportError::CapacityMonthColumnsNotFound);
        }

        Ok(columns)
    }
}
