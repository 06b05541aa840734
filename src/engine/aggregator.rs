// ==========================================
// 供应商产能对账系统 - 聚合引擎
// ==========================================
// 职责: 按 (VendorKey, PeriodKey) 分组求和,消除重复键
// 性质: 幂等 (对已聚合表再聚合,结果不变)
// ==========================================

use crate::domain::records::MonthlyQuantity;
use std::collections::BTreeMap;

pub struct Aggregator;

impl Aggregator {
    /// 分组求和;输出按键升序,保证确定性
    pub fn aggregate<T: MonthlyQuantity>(&self, records: Vec<T>) -> Vec<T> {
        let mut sums = BTreeMap::new();
        for record in records {
            let key = (record.vendor().clone(), record.period());
            *sums.entry(key).or_insert(0.0) += record.quantity();
        }

        sums.into_iter()
            .map(|((vendor, period), quantity)| T::from_parts(vendor, period, quantity))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::BookedRecord;
    use crate::domain::types::{PeriodKey, VendorKey};

    fn rec(vendor: &str, month: u32, qty: f64) -> BookedRecord {
        BookedRecord {
            vendor: VendorKey::new(vendor),
            period: PeriodKey::new(2025, month).unwrap(),
            booked_qty: qty,
        }
    }

    #[test]
    fn test_aggregate_sums_duplicate_keys() {
        let records = vec![rec("ACME", 6, 100.0), rec("ACME", 6, 50.0), rec("ACME", 7, 30.0)];
        let out = Aggregator.aggregate(records);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].booked_qty, 150.0);
        assert_eq!(out[1].booked_qty, 30.0);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let records = vec![rec("ACME", 6, 100.0), rec("GLOBEX", 6, 50.0), rec("ACME", 7, 30.0)];
        let once = Aggregator.aggregate(records);
        let twice = Aggregator.aggregate(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_aggregate_output_sorted_by_key() {
        let records = vec![rec("ZETA", 6, 1.0), rec("ACME", 7, 2.0), rec("ACME", 6, 3.0)];
        let out = Aggregator.aggregate(records);
        let keys: Vec<(String, u32)> = out
            .iter()
            .map(|r| (r.vendor.as_str().to_string(), r.period.month))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("ACME".to_string(), 6),
                ("ACME".to_string(), 7),
                ("ZETA".to_string(), 6),
            ]
        );
    }

    #[test]
    fn test_aggregate_empty() {
        let out: Vec<BookedRecord> = Aggregator.aggregate(vec![]);
        assert!(out.is_empty());
    }
}
