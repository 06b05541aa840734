// ==========================================
// 供应商产能对账系统 - 报表领域模型
// ==========================================
// 职责: 透视后的报表结构 (每供应商固定 5 行 x 每期间 1 列)
// 红线: 利用率单元格携带结构化 Flag 枚举,导出层按枚举着色
// ==========================================

use crate::domain::types::{MetricLine, PeriodKey, UtilizationFlag, VendorKey};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// ReportCell - 报表单元格
// ==========================================
// Blank 表示该 (供应商,期间) 组合在对账全集中不存在,
// 与数值 0 (组合存在但某来源无数据) 严格区分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReportCell {
    Blank,
    Number(f64),
    Utilization { pct: f64, flag: UtilizationFlag },
}

impl ReportCell {
    /// 渲染为显示文本 (屏幕表格 / 单元格文本共用)
    pub fn render(&self) -> String {
        match self {
            ReportCell::Blank => String::new(),
            ReportCell::Number(v) => format_number(*v),
            ReportCell::Utilization { pct, flag } => {
                format!("{}% - {}", format_pct(*pct), flag)
            }
        }
    }
}

impl fmt::Display for ReportCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// 百分比文本: 至少保留一位小数,最多两位 (125.0 / 83.3 / 83.33)
pub fn format_pct(value: f64) -> String {
    let s = format!("{:.2}", value);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.contains('.') {
        trimmed.to_string()
    } else {
        format!("{}.0", trimmed)
    }
}

/// 数值文本: 整数不带小数点,其余去掉尾零
fn format_number(value: f64) -> String {
    let s = format!("{:.2}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

// ==========================================
// ReportRow - 报表行 (一个供应商的一条指标线)
// ==========================================
// 仅每个 5 行块的首行 (CAPACITY) 携带供应商标签,其余留空以示视觉分组
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub vendor_label: String,
    pub item: MetricLine,
    pub cells: Vec<ReportCell>,
}

// ==========================================
// ReportTable - 透视报表
// ==========================================
// 列: Vendor / Month, ITEM, 然后每个期间一列 (时间升序)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    pub periods: Vec<PeriodKey>,
    pub vendors: Vec<VendorKey>,
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    /// 表头标签: 前两列固定,其后为期间标签
    pub fn header_labels(&self) -> Vec<String> {
        let mut labels = vec!["Vendor / Month".to_string(), "ITEM".to_string()];
        labels.extend(self.periods.iter().map(|p| p.label()));
        labels
    }
}
