// ==========================================
// 供应商产能对账系统 - 三源加载器
// ==========================================
// 职责: 原始表 → 类型化原始行 (供应商文本保持原样,键规范化在 Normalizer)
// 红线: 必需列校验在此完成,列缺失在任何计算前终止
// ==========================================

use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::{ParsedTable, UniversalFileParser};
use crate::importer::schema::{
    MonthColumn, SchemaMatcher, BOOKED_DATE_COL, BOOKED_QTY_COL, BOOKED_VENDOR_COL,
    CAPACITY_VENDOR_COL, FORECAST_QTY_COL, FORECAST_VENDOR_COL,
};
use std::path::Path;
use tracing::info;

// ==========================================
// 类型化原始行
// ==========================================

/// 订单/预测源的单行: 日期保持原始文本,由 Normalizer 解析并决定去留
#[derive(Debug, Clone, PartialEq)]
pub struct RawOrderRow {
    pub vendor: String,
    pub date_value: String,
    pub quantity: f64,
    pub row_number: usize,
}

/// 产能宽表的单行: 单元格与 month_columns 一一对应
#[derive(Debug, Clone, PartialEq)]
pub struct RawCapacityRow {
    pub vendor: String,
    pub cells: Vec<f64>,
    pub row_number: usize,
}

/// 产能宽表: 识别出的月份列 + 数据行
#[derive(Debug, Clone, PartialEq)]
pub struct RawCapacityTable {
    pub month_columns: Vec<MonthColumn>,
    pub rows: Vec<RawCapacityRow>,
}

// ==========================================
// BookedLoader - 已订单源
// ==========================================
// 必需列: VENDOR / PO exfac date / Qty
pub struct BookedLoader;

impl BookedLoader {
    pub fn load<P: AsRef<Path>>(&self, path: P) -> ImportResult<Vec<RawOrderRow>> {
        let table = UniversalFileParser.parse(path)?;
        self.from_table(&table)
    }

    pub fn from_table(&self, table: &ParsedTable) -> ImportResult<Vec<RawOrderRow>> {
        let matcher = SchemaMatcher;
        matcher.require_column(&table.headers, "booked", BOOKED_VENDOR_COL)?;
        matcher.require_column(&table.headers, "booked", BOOKED_DATE_COL)?;
        matcher.require_column(&table.headers, "booked", BOOKED_QTY_COL)?;

        let rows = read_order_rows(
            table,
            BOOKED_VENDOR_COL,
            BOOKED_DATE_COL,
            BOOKED_QTY_COL,
        )?;
        info!("已订单源加载完成: {} 行", rows.len());
        Ok(rows)
    }
}

// ==========================================
// ForecastLoader - 预测源
// ==========================================
// 必需列: Vendor Name / Confirmed New Planned Units / 含 "ex-factory" 的日期列
pub struct ForecastLoader;

impl ForecastLoader {
    pub fn load<P: AsRef<Path>>(&self, path: P) -> ImportResult<Vec<RawOrderRow>> {
        let table = UniversalFileParser.parse(path)?;
        self.from_table(&table)
    }

    pub fn from_table(&self, table: &ParsedTable) -> ImportResult<Vec<RawOrderRow>> {
        let matcher = SchemaMatcher;
        matcher.require_column(&table.headers, "forecast", FORECAST_VENDOR_COL)?;
        matcher.require_column(&table.headers, "forecast", FORECAST_QTY_COL)?;

        // 日期列自动识别 (显式模式匹配,缺失致命)
        let date_col = matcher.detect_ex_factory_column(&table.headers)?;
        info!("预测源日期列识别: {}", date_col);

        let rows = read_order_rows(table, FORECAST_VENDOR_COL, &date_col, FORECAST_QTY_COL)?;
        info!("预测源加载完成: {} 行", rows.len());
        Ok(rows)
    }
}

// ==========================================
// CapacityLoader - 产能源 (宽表)
// ==========================================
// 必需列: Vendor + 至少一个月份列 (含 FM 标记)
pub struct CapacityLoader;

impl CapacityLoader {
    pub fn load<P: AsRef<Path>>(&self, path: P) -> ImportResult<RawCapacityTable> {
        let table = UniversalFileParser.parse(path)?;
        self.from_table(&table)
    }

    pub fn from_table(&self, table: &ParsedTable) -> ImportResult<RawCapacityTable> {
        let matcher = SchemaMatcher;
        matcher.require_column(&table.headers, "capacity", CAPACITY_VENDOR_COL)?;
        let month_columns = matcher.detect_capacity_month_columns(&table.headers)?;
        info!(
            "产能源月份列识别: {:?}",
            month_columns.iter().map(|c| &c.header).collect::<Vec<_>>()
        );

        let cleaner = DataCleaner;
        let mut rows = Vec::new();
        for (idx, record) in table.rows.iter().enumerate() {
            let row_number = idx + 2; // 表头占第 1 行
            let vendor = record
                .get(CAPACITY_VENDOR_COL)
                .cloned()
                .unwrap_or_default();

            let mut cells = Vec::with_capacity(month_columns.len());
            for col in &month_columns {
                let raw = record.get(&col.header).map(|s| s.as_str()).unwrap_or("");
                cells.push(cleaner.parse_quantity(raw, &col.header, row_number)?);
            }

            rows.push(RawCapacityRow {
                vendor,
                cells,
                row_number,
            });
        }

        info!("产能源加载完成: {} 行", rows.len());
        Ok(RawCapacityTable {
            month_columns,
            rows,
        })
    }
}

// 订单/预测共用的行读取: 数量解析失败为致命错误,日期保持原文
fn read_order_rows(
    table: &ParsedTable,
    vendor_col: &str,
    date_col: &str,
    qty_col: &str,
) -> ImportResult<Vec<RawOrderRow>> {
    let cleaner = DataCleaner;
    let mut rows = Vec::with_capacity(table.rows.len());
    for (idx, record) in table.rows.iter().enumerate() {
        let row_number = idx + 2;
        let vendor = record.get(vendor_col).cloned().unwrap_or_default();
        let date_value = record.get(date_col).cloned().unwrap_or_default();
        let raw_qty = record.get(qty_col).map(|s| s.as_str()).unwrap_or("");
        let quantity = cleaner.parse_quantity(raw_qty, qty_col, row_number)?;

        rows.push(RawOrderRow {
            vendor,
            date_value,
            quantity,
            row_number,
        });
    }
    Ok(rows)
}
