// ==========================================
// 供应商产能对账系统 - 规范化引擎
// ==========================================
// 职责: 每源派生规范键 (VendorKey, PeriodKey)
// 规则: 日期截断到月;解析失败的行静默丢弃 (计数告警,不致命)
// 规则: 产能宽表逆透视,年份取自配置 (源无年份字段,已知限制)
// ==========================================

use crate::domain::records::{BookedRecord, CapacityRecord, ForecastRecord};
use crate::domain::types::{PeriodKey, VendorKey};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::source_loader::{RawCapacityTable, RawOrderRow};
use tracing::{debug, warn};

pub struct Normalizer;

impl Normalizer {
    /// 已订单源: PO 出厂日期 → 月期间键
    pub fn normalize_booked(&self, rows: Vec<RawOrderRow>) -> Vec<BookedRecord> {
        self.normalize_orders(rows, "booked", |vendor, period, qty| BookedRecord {
            vendor,
            period,
            booked_qty: qty,
        })
    }

    /// 预测源: ex-factory 日期 → 月期间键
    pub fn normalize_forecast(&self, rows: Vec<RawOrderRow>) -> Vec<ForecastRecord> {
        self.normalize_orders(rows, "forecast", |vendor, period, qty| ForecastRecord {
            vendor,
            period,
            forecast_qty: qty,
        })
    }

    /// 产能源: 宽表逆透视,每个月份列展开为一行;年份固定取配置值
    pub fn normalize_capacity(
        &self,
        table: RawCapacityTable,
        capacity_year: i32,
    ) -> Vec<CapacityRecord> {
        let mut records = Vec::new();
        for row in &table.rows {
            let vendor = VendorKey::new(&row.vendor);
            if vendor.is_empty() {
                debug!("capacity 行 {} 供应商为空,丢弃", row.row_number);
                continue;
            }
            for (col, value) in table.month_columns.iter().zip(row.cells.iter()) {
                // 月份来自列名识别,恒在 1..=12
                let Some(period) = PeriodKey::new(capacity_year, col.month) else {
                    continue;
                };
                records.push(CapacityRecord {
                    vendor: vendor.clone(),
                    period,
                    capacity: *value,
                });
            }
        }
        debug!("capacity 规范化完成: {} 条记录", records.len());
        records
    }

    // 订单/预测共用: 日期解析失败或供应商为空的行丢弃并计数
    fn normalize_orders<T>(
        &self,
        rows: Vec<RawOrderRow>,
        source_name: &str,
        build: impl Fn(VendorKey, PeriodKey, f64) -> T,
    ) -> Vec<T> {
        let cleaner = DataCleaner;
        let total = rows.len();
        let mut dropped = 0usize;
        let mut records = Vec::with_capacity(total);

        for row in rows {
            let vendor = VendorKey::new(&row.vendor);
            if vendor.is_empty() {
                debug!("{} 行 {} 供应商为空,丢弃", source_name, row.row_number);
                dropped += 1;
                continue;
            }
            let Some(date) = cleaner.parse_date_flexible(&row.date_value) else {
                debug!(
                    "{} 行 {} 日期不可解析 ({:?}),丢弃",
                    source_name, row.row_number, row.date_value
                );
                dropped += 1;
                continue;
            };
            records.push(build(vendor, PeriodKey::from_date(date), row.quantity));
        }

        if dropped > 0 {
            warn!(
                "{} 源规范化丢弃 {} / {} 行 (日期不可解析或供应商为空)",
                source_name, dropped, total
            );
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::schema::MonthColumn;
    use crate::importer::source_loader::RawCapacityRow;

    fn order_row(vendor: &str, date: &str, qty: f64, row_number: usize) -> RawOrderRow {
        RawOrderRow {
            vendor: vendor.to_string(),
            date_value: date.to_string(),
            quantity: qty,
            row_number,
        }
    }

    #[test]
    fn test_normalize_booked_truncates_to_month() {
        let rows = vec![
            order_row(" acme ", "2025-06-17", 100.0, 2),
            order_row("ACME", "2025-06-02", 50.0, 3),
        ];
        let records = Normalizer.normalize_booked(rows);
        assert_eq!(records.len(), 2);
        // 键规范化: 两行折叠为同一 (vendor, period) 组合
        assert_eq!(records[0].vendor, records[1].vendor);
        assert_eq!(records[0].period, PeriodKey::new(2025, 6).unwrap());
        assert_eq!(records[1].period, PeriodKey::new(2025, 6).unwrap());
    }

    #[test]
    fn test_normalize_drops_unparseable_dates_silently() {
        let rows = vec![
            order_row("ACME", "2025-06-17", 100.0, 2),
            order_row("ACME", "soon", 999.0, 3),
            order_row("ACME", "", 888.0, 4),
        ];
        let records = Normalizer.normalize_booked(rows);
        // 不可解析的行被排除,不报错
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].booked_qty, 100.0);
    }

    #[test]
    fn test_normalize_drops_empty_vendor() {
        let rows = vec![order_row("   ", "2025-06-17", 100.0, 2)];
        let records = Normalizer.normalize_booked(rows);
        assert!(records.is_empty());
    }

    #[test]
    fn test_normalize_capacity_unpivot() {
        let table = RawCapacityTable {
            month_columns: vec![
                MonthColumn { header: "Jun FM".to_string(), month: 6 },
                MonthColumn { header: "Jul FM".to_string(), month: 7 },
            ],
            rows: vec![RawCapacityRow {
                vendor: " Acme ".to_string(),
                cells: vec![120.0, 150.0],
                row_number: 2,
            }],
        };
        let records = Normalizer.normalize_capacity(table, 2025);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].vendor, VendorKey::new("ACME"));
        assert_eq!(records[0].period, PeriodKey::new(2025, 6).unwrap());
        assert_eq!(records[0].capacity, 120.0);
        assert_eq!(records[1].period, PeriodKey::new(2025, 7).unwrap());
        assert_eq!(records[1].capacity, 150.0);
    }

    #[test]
    fn test_normalize_capacity_year_from_config() {
        let table = RawCapacityTable {
            month_columns: vec![MonthColumn { header: "Jan FM".to_string(), month: 1 }],
            rows: vec![RawCapacityRow {
                vendor: "ACME".to_string(),
                cells: vec![10.0],
                row_number: 2,
            }],
        };
        let records = Normalizer.normalize_capacity(table, 2026);
        assert_eq!(records[0].period, PeriodKey::new(2026, 1).unwrap());
    }
}
