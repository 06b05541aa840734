// ==========================================
// 供应商产能对账系统 - 领域类型定义
// ==========================================
// 职责: 键类型与枚举,所有来源共用的规范化规则
// 红线: 三个数据源的键必须经过同一规范化,联结不得因大小写/空白失败
// ==========================================

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 月份缩写 (标准 12 个月)
// ==========================================
// 用途: 期间标签渲染 + 产能宽表列名识别 (大小写敏感)
pub const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// ==========================================
// PeriodKey - 期间键 (年-月)
// ==========================================
// 不变量: 只能由日期截断到月粒度或显式 (年,月) 构造,月份恒在 1..=12
// 排序: 先年后月,用于报表列的时间升序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PeriodKey {
    pub year: i32,
    pub month: u32,
}

impl PeriodKey {
    /// 由显式 (年,月) 构造,月份超出 1..=12 返回 None
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(PeriodKey { year, month })
        } else {
            None
        }
    }

    /// 由日期截断到月粒度
    pub fn from_date(date: NaiveDate) -> Self {
        PeriodKey {
            year: date.year(),
            month: date.month(),
        }
    }

    /// 报表列标签,格式: 'Jun'25 (月份缩写 + 两位年份)
    pub fn label(&self) -> String {
        let abbr = MONTH_ABBR[(self.month - 1) as usize];
        format!("'{}'{:02}", abbr, self.year.rem_euclid(100))
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

// ==========================================
// VendorKey - 供应商键
// ==========================================
// 不变量: 构造时 TRIM + UPPER,因此相等性天然忽略大小写与首尾空白
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VendorKey(String);

impl VendorKey {
    /// 规范化构造: 去首尾空白并转大写
    pub fn new(raw: &str) -> Self {
        VendorKey(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 规范化后是否为空 (空供应商名不参与对账)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for VendorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ==========================================
// UtilizationFlag - 利用率三级标记
// ==========================================
// 阈值规则见 MetricEngine: >110 Overbooked, <70 Underutilized, 其余 Optimal
// 红线: 枚举值必须贯穿到导出层,导出按枚举着色,禁止回头解析渲染文本
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UtilizationFlag {
    Overbooked,    // 超订 (红)
    Underutilized, // 低利用 (黄)
    Optimal,       // 正常 (绿)
}

impl fmt::Display for UtilizationFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtilizationFlag::Overbooked => write!(f, "Overbooked"),
            UtilizationFlag::Underutilized => write!(f, "Underutilized"),
            UtilizationFlag::Optimal => write!(f, "Optimal"),
        }
    }
}

// ==========================================
// MetricLine - 报表指标行 (每供应商固定 5 行)
// ==========================================
// 顺序固定: Capacity → Booked → Forecast → Balance → Utilization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricLine {
    Capacity,
    BookedQty,
    ForecastQty,
    BalanceCapacity,
    UtilizationWithFlag,
}

impl MetricLine {
    /// 固定输出顺序
    pub const ALL: [MetricLine; 5] = [
        MetricLine::Capacity,
        MetricLine::BookedQty,
        MetricLine::ForecastQty,
        MetricLine::BalanceCapacity,
        MetricLine::UtilizationWithFlag,
    ];

    /// ITEM 列标签 (沿用业务方的历史叫法)
    pub fn label(&self) -> &'static str {
        match self {
            MetricLine::Capacity => "CAPACITY",
            MetricLine::BookedQty => "BOOKEDQTY",
            MetricLine::ForecastQty => "FORECAST QTY",
            MetricLine::BalanceCapacity => "BALANCE CAPACITY",
            MetricLine::UtilizationWithFlag => "Utilization % WITH COLOUR FLAG",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_key_from_date() {
        let d = NaiveDate::from_ymd_opt(2025, 6, 17).unwrap();
        let key = PeriodKey::from_date(d);
        assert_eq!(key, PeriodKey { year: 2025, month: 6 });
    }

    #[test]
    fn test_period_key_new_validates_month() {
        assert!(PeriodKey::new(2025, 12).is_some());
        assert!(PeriodKey::new(2025, 0).is_none());
        assert!(PeriodKey::new(2025, 13).is_none());
    }

    #[test]
    fn test_period_key_ordering() {
        let jan = PeriodKey::new(2025, 1).unwrap();
        let jun = PeriodKey::new(2025, 6).unwrap();
        let dec_prev = PeriodKey::new(2024, 12).unwrap();
        assert!(dec_prev < jan);
        assert!(jan < jun);
    }

    #[test]
    fn test_period_key_label() {
        let key = PeriodKey::new(2025, 6).unwrap();
        assert_eq!(key.label(), "'Jun'25");
        let key = PeriodKey::new(2030, 1).unwrap();
        assert_eq!(key.label(), "'Jan'30");
    }

    #[test]
    fn test_vendor_key_normalization() {
        // 大小写/空白漂移必须折叠为同一键
        assert_eq!(VendorKey::new(" acme "), VendorKey::new("ACME"));
        assert_eq!(VendorKey::new("Acme"), VendorKey::new("acme"));
        assert_eq!(VendorKey::new(" acme ").as_str(), "ACME");
    }

    #[test]
    fn test_metric_line_fixed_order() {
        let labels: Vec<&str> = MetricLine::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            vec![
                "CAPACITY",
                "BOOKEDQTY",
                "FORECAST QTY",
                "BALANCE CAPACITY",
                "Utilization % WITH COLOUR FLAG",
            ]
        );
    }

    #[test]
    fn test_flag_display() {
        assert_eq!(UtilizationFlag::Overbooked.to_string(), "Overbooked");
        assert_eq!(UtilizationFlag::Underutilized.to_string(), "Underutilized");
        assert_eq!(UtilizationFlag::Optimal.to_string(), "Optimal");
    }
}
