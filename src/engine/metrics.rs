// ==========================================
// 供应商产能对账系统 - 指标引擎
// ==========================================
// 职责: 逐行派生利用率/余量产能/三级标记,纯函数无状态
// 规则: capacity <= 0 时利用率恒为 0 (无产能数据视为不可测,非无穷)
// 阈值: >110 Overbooked, <70 Underutilized, 边界 70/110 含入 Optimal
// ==========================================

use crate::domain::records::{CombinedRow, ReconciledRow};
use crate::domain::types::UtilizationFlag;

// 利用率阈值 (百分比)
pub const OVERBOOKED_THRESHOLD: f64 = 110.0;
pub const UNDERUTILIZED_THRESHOLD: f64 = 70.0;

pub struct MetricEngine;

impl MetricEngine {
    /// 利用率百分比,保留两位小数;除零保护返回 0
    pub fn utilization_pct(&self, booked: f64, forecast: f64, capacity: f64) -> f64 {
        if capacity <= 0.0 {
            return 0.0;
        }
        round2((booked + forecast) / capacity * 100.0)
    }

    /// 三级标记,纯函数: 仅依赖利用率
    ///
    /// 利用率恰为 0 的行视为不可测 (无产能数据或无需求),不标异常。
    /// 注意: 利用率先按两位小数四舍五入,极小需求 (如 0.001/1000) 舍入到
    /// 0.00 后同样落入此分支,标为 Optimal 而非 Underutilized
    pub fn classify(&self, utilization_pct: f64) -> UtilizationFlag {
        if utilization_pct == 0.0 {
            UtilizationFlag::Optimal
        } else if utilization_pct > OVERBOOKED_THRESHOLD {
            UtilizationFlag::Overbooked
        } else if utilization_pct < UNDERUTILIZED_THRESHOLD {
            UtilizationFlag::Underutilized
        } else {
            UtilizationFlag::Optimal
        }
    }

    /// 单行派生: 联结行 → 对账结果行 (构造后不可变)
    pub fn derive(&self, row: CombinedRow) -> ReconciledRow {
        let utilization_pct = self.utilization_pct(row.booked_qty, row.forecast_qty, row.capacity);
        let balance_capacity = row.capacity - (row.booked_qty + row.forecast_qty);
        let flag = self.classify(utilization_pct);

        ReconciledRow {
            vendor: row.vendor,
            period: row.period,
            booked_qty: row.booked_qty,
            forecast_qty: row.forecast_qty,
            capacity: row.capacity,
            utilization_pct,
            balance_capacity,
            flag,
        }
    }

    /// 全表派生
    pub fn derive_all(&self, rows: Vec<CombinedRow>) -> Vec<ReconciledRow> {
        rows.into_iter().map(|r| self.derive(r)).collect()
    }
}

/// 四舍五入到两位小数
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
