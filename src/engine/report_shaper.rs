// ==========================================
// 供应商产能对账系统 - 报表透视引擎
// ==========================================
// 职责: 对账结果 → 每供应商固定 5 行 x 每期间 1 列的报表
// 规则: 期间列时间升序;供应商按对账结果首现顺序
// 规则: (供应商,期间) 组合不存在 → 空白单元格 (与数值 0 严格区分)
// ==========================================

use crate::domain::records::ReconciledRow;
use crate::domain::report::{ReportCell, ReportRow, ReportTable};
use crate::domain::types::{MetricLine, PeriodKey, VendorKey};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

pub struct ReportShaper;

impl ReportShaper {
    pub fn shape(&self, reconciled: &[ReconciledRow]) -> ReportTable {
        // 期间全集,升序
        let periods: Vec<PeriodKey> = reconciled
            .iter()
            .map(|r| r.period)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        // 供应商按首现顺序
        let mut vendors: Vec<VendorKey> = Vec::new();
        for row in reconciled {
            if !vendors.contains(&row.vendor) {
                vendors.push(row.vendor.clone());
            }
        }

        // (vendor, period) → 对账行索引
        let index: HashMap<(&VendorKey, PeriodKey), &ReconciledRow> = reconciled
            .iter()
            .map(|r| ((&r.vendor, r.period), r))
            .collect();

        let mut rows = Vec::with_capacity(vendors.len() * MetricLine::ALL.len());
        for vendor in &vendors {
            for (line_idx, item) in MetricLine::ALL.iter().enumerate() {
                // 仅 5 行块的首行携带供应商标签
                let vendor_label = if line_idx == 0 {
                    vendor.as_str().to_string()
                } else {
                    String::new()
                };

                let cells = periods
                    .iter()
                    .map(|period| match index.get(&(vendor, *period)) {
                        Some(row) => metric_cell(*item, row),
                        None => ReportCell::Blank,
                    })
                    .collect();

                rows.push(ReportRow {
                    vendor_label,
                    item: *item,
                    cells,
                });
            }
        }

        debug!(
            "报表透视完成: {} 个供应商 x {} 个期间 = {} 行",
            vendors.len(),
            periods.len(),
            rows.len()
        );
        ReportTable {
            periods,
            vendors,
            rows,
        }
    }
}

// 指标线对应的单元格取值
fn metric_cell(item: MetricLine, row: &ReconciledRow) -> ReportCell {
    match item {
        MetricLine::Capacity => ReportCell::Number(row.capacity),
        MetricLine::BookedQty => ReportCell::Number(row.booked_qty),
        MetricLine::ForecastQty => ReportCell::Number(row.forecast_qty),
        MetricLine::BalanceCapacity => ReportCell::Number(row.balance_capacity),
        MetricLine::UtilizationWithFlag => ReportCell::Utilization {
            pct: row.utilization_pct,
            flag: row.flag,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::UtilizationFlag;

    fn row(vendor: &str, month: u32, booked: f64, forecast: f64, capacity: f64) -> ReconciledRow {
        ReconciledRow {
            vendor: VendorKey::new(vendor),
            period: PeriodKey::new(2025, month).unwrap(),
            booked_qty: booked,
            forecast_qty: forecast,
            capacity,
            utilization_pct: 100.0,
            balance_capacity: capacity - (booked + forecast),
            flag: UtilizationFlag::Optimal,
        }
    }

    #[test]
    fn test_shape_five_lines_per_vendor() {
        let reconciled = vec![row("ACME", 6, 100.0, 50.0, 150.0), row("GLOBEX", 6, 10.0, 0.0, 20.0)];
        let table = ReportShaper.shape(&reconciled);

        assert_eq!(table.rows.len(), 10);
        let items: Vec<MetricLine> = table.rows[..5].iter().map(|r| r.item).collect();
        assert_eq!(items, MetricLine::ALL.to_vec());
    }

    #[test]
    fn test_shape_vendor_label_only_on_first_line() {
        let reconciled = vec![row("ACME", 6, 1.0, 1.0, 3.0)];
        let table = ReportShaper.shape(&reconciled);

        assert_eq!(table.rows[0].vendor_label, "ACME");
        for r in &table.rows[1..5] {
            assert_eq!(r.vendor_label, "");
        }
    }

    #[test]
    fn test_shape_periods_sorted_ascending() {
        let reconciled = vec![
            row("ACME", 8, 1.0, 0.0, 1.0),
            row("ACME", 6, 1.0, 0.0, 1.0),
            row("ACME", 7, 1.0, 0.0, 1.0),
        ];
        let table = ReportShaper.shape(&reconciled);
        let months: Vec<u32> = table.periods.iter().map(|p| p.month).collect();
        assert_eq!(months, vec![6, 7, 8]);
    }

    #[test]
    fn test_shape_absent_pair_renders_blank() {
        // GLOBEX 只有 7 月数据: 6 月列必须为空白,而非 0
        let reconciled = vec![row("ACME", 6, 1.0, 0.0, 1.0), row("GLOBEX", 7, 2.0, 0.0, 2.0)];
        let table = ReportShaper.shape(&reconciled);

        // GLOBEX 的 CAPACITY 行 (第 6 行,索引 5)
        let globex_capacity = &table.rows[5];
        assert_eq!(globex_capacity.item, MetricLine::Capacity);
        assert_eq!(globex_capacity.cells[0], ReportCell::Blank);
        assert_eq!(globex_capacity.cells[1], ReportCell::Number(2.0));
    }

    #[test]
    fn test_shape_zero_value_is_not_blank() {
        // 组合存在但某来源无数据 → 数值 0,与空白严格区分
        let reconciled = vec![row("ACME", 6, 0.0, 0.0, 100.0)];
        let table = ReportShaper.shape(&reconciled);
        let booked_line = &table.rows[1];
        assert_eq!(booked_line.item, MetricLine::BookedQty);
        assert_eq!(booked_line.cells[0], ReportCell::Number(0.0));
    }

    #[test]
    fn test_shape_utilization_cell_carries_flag() {
        let mut r = row("ACME", 6, 100.0, 50.0, 120.0);
        r.utilization_pct = 125.0;
        r.flag = UtilizationFlag::Overbooked;
        let table = ReportShaper.shape(&[r]);

        let util_line = &table.rows[4];
        assert_eq!(util_line.item, MetricLine::UtilizationWithFlag);
        assert_eq!(
            util_line.cells[0],
            ReportCell::Utilization {
                pct: 125.0,
                flag: UtilizationFlag::Overbooked
            }
        );
        assert_eq!(util_line.cells[0].render(), "125.0% - Overbooked");
    }
}
