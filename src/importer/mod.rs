// ==========================================
// 供应商产能对账系统 - 导入层
// ==========================================
// 职责: 文件解析 → 列匹配 → 类型化原始行
// 红线: 键规范化与日期截断属于引擎层 (Normalizer),此处不做
// ==========================================

pub mod data_cleaner;
pub mod error;
pub mod file_parser;
pub mod schema;
pub mod source_loader;

// 重导出核心类型
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, FileParser, ParsedTable, RawRecord, UniversalFileParser};
pub use schema::{MonthColumn, SchemaMatcher};
pub use source_loader::{
    BookedLoader, CapacityLoader, ForecastLoader, RawCapacityRow, RawCapacityTable, RawOrderRow,
};
