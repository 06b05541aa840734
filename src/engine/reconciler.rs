// ==========================================
// 供应商产能对账系统 - 对账引擎 (三源联结)
// ==========================================
// 职责: 键全集 = 三个聚合表键集合的并集,任何来源的键都不得丢失
// 规则: 先 Booked+Forecast 全外联结,再对 Capacity 联结;缺失值补 0
// 注意: 只有产能记录而无订单/预测的供应商同样保留 (利用率按 0 计)
// ==========================================

use crate::domain::records::{BookedRecord, CapacityRecord, CombinedRow, ForecastRecord};
use crate::domain::types::{PeriodKey, VendorKey};
use std::collections::BTreeMap;
use tracing::debug;

type Universe = BTreeMap<(VendorKey, PeriodKey), CombinedRow>;

// 取出键对应的行,不存在则以全 0 初始化
fn slot(universe: &mut Universe, vendor: VendorKey, period: PeriodKey) -> &mut CombinedRow {
    universe
        .entry((vendor.clone(), period))
        .or_insert_with(|| CombinedRow {
            vendor,
            period,
            booked_qty: 0.0,
            forecast_qty: 0.0,
            capacity: 0.0,
        })
}

pub struct Reconciler;

impl Reconciler {
    /// 三源全外联结;输出按 (vendor, period) 升序
    pub fn reconcile(
        &self,
        booked: Vec<BookedRecord>,
        forecast: Vec<ForecastRecord>,
        capacity: Vec<CapacityRecord>,
    ) -> Vec<CombinedRow> {
        let mut universe = Universe::new();

        // Booked + Forecast 全外联结
        for r in booked {
            slot(&mut universe, r.vendor, r.period).booked_qty = r.booked_qty;
        }
        for r in forecast {
            slot(&mut universe, r.vendor, r.period).forecast_qty = r.forecast_qty;
        }
        // Capacity 并入同一键全集 (产能缺失补 0,产能独有的键也保留)
        for r in capacity {
            slot(&mut universe, r.vendor, r.period).capacity = r.capacity;
        }

        debug!("对账键全集: {} 个 (vendor, period) 组合", universe.len());
        universe.into_values().collect()
    }
}
