// ==========================================
// 供应商产能对账系统 - 数据记录领域模型
// ==========================================
// 职责: 三个数据源的规范化记录 + 对账结果行
// 红线: ReconciledRow 构造一次后不可变,指标字段为纯派生值
// ==========================================

use crate::domain::types::{PeriodKey, UtilizationFlag, VendorKey};
use serde::{Deserialize, Serialize};

// ==========================================
// Trait: MonthlyQuantity
// ==========================================
// 用途: Aggregator 对三种同形记录的统一分组求和接口
pub trait MonthlyQuantity: Sized {
    fn vendor(&self) -> &VendorKey;
    fn period(&self) -> PeriodKey;
    fn quantity(&self) -> f64;

    /// 由聚合结果重建记录
    fn from_parts(vendor: VendorKey, period: PeriodKey, quantity: f64) -> Self;
}

// ==========================================
// BookedRecord - 已订单量 (按月)
// ==========================================
// 来源: 订单源的 PO 出厂日期截断到月 + 数量求和
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookedRecord {
    pub vendor: VendorKey,
    pub period: PeriodKey,
    pub booked_qty: f64,
}

impl MonthlyQuantity for BookedRecord {
    fn vendor(&self) -> &VendorKey {
        &self.vendor
    }
    fn period(&self) -> PeriodKey {
        self.period
    }
    fn quantity(&self) -> f64 {
        self.booked_qty
    }
    fn from_parts(vendor: VendorKey, period: PeriodKey, quantity: f64) -> Self {
        BookedRecord {
            vendor,
            period,
            booked_qty: quantity,
        }
    }
}

// ==========================================
// ForecastRecord - 预测单量 (按月)
// ==========================================
// 来源: 预测源的 ex-factory 日期列 (列名自动识别) + 确认计划单量求和
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub vendor: VendorKey,
    pub period: PeriodKey,
    pub forecast_qty: f64,
}

impl MonthlyQuantity for ForecastRecord {
    fn vendor(&self) -> &VendorKey {
        &self.vendor
    }
    fn period(&self) -> PeriodKey {
        self.period
    }
    fn quantity(&self) -> f64 {
        self.forecast_qty
    }
    fn from_parts(vendor: VendorKey, period: PeriodKey, quantity: f64) -> Self {
        ForecastRecord {
            vendor,
            period,
            forecast_qty: quantity,
        }
    }
}

// ==========================================
// CapacityRecord - 分配产能 (按月)
// ==========================================
// 来源: 产能宽表逆透视 (每月一列 → 每月一行),年份取自配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityRecord {
    pub vendor: VendorKey,
    pub period: PeriodKey,
    pub capacity: f64,
}

impl MonthlyQuantity for CapacityRecord {
    fn vendor(&self) -> &VendorKey {
        &self.vendor
    }
    fn period(&self) -> PeriodKey {
        self.period
    }
    fn quantity(&self) -> f64 {
        self.capacity
    }
    fn from_parts(vendor: VendorKey, period: PeriodKey, quantity: f64) -> Self {
        CapacityRecord {
            vendor,
            period,
            capacity: quantity,
        }
    }
}

// ==========================================
// CombinedRow - 三源联结后的中间行 (未派生指标)
// ==========================================
// 键全集 = 三个聚合表键集合的并集,缺失字段一律补 0,不允许 null
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedRow {
    pub vendor: VendorKey,
    pub period: PeriodKey,
    pub booked_qty: f64,
    pub forecast_qty: f64,
    pub capacity: f64,
}

// ==========================================
// ReconciledRow - 对账结果行
// ==========================================
// 生命周期: 每次流水线运行构造一次,之后只读,供 Report Shaper 消费
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciledRow {
    pub vendor: VendorKey,
    pub period: PeriodKey,

    // ===== 三源数值 (缺失补 0) =====
    pub booked_qty: f64,
    pub forecast_qty: f64,
    pub capacity: f64,

    // ===== 派生指标 (纯函数,无独立状态) =====
    pub utilization_pct: f64,      // 两位小数; capacity=0 时恒为 0
    pub balance_capacity: f64,     // 可为负 (超额承诺)
    pub flag: UtilizationFlag,
}
