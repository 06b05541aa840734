// ==========================================
// 供应商产能对账系统 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 输出: 有序表头 + 以表头为键的字符串映射 (每数据行一条)
// 表头顺序必须保留: 列识别规则含 "首个命中" 语义
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// 原始行: 表头 → 单元格文本 (两端已 TRIM)
pub type RawRecord = HashMap<String, String>;

/// 解析结果: 源文件的有序表头与全部数据行
#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRecord>,
}

/// 文件解析接口
pub trait FileParser {
    fn parse_to_table(&self, file_path: &Path) -> ImportResult<ParsedTable>;
}

// 将一行单元格按表头组装为映射,完全空白的行返回 None
fn assemble_row<'a, I>(headers: &[String], cells: I) -> Option<RawRecord>
where
    I: Iterator<Item = &'a str>,
{
    let mut row_map = HashMap::new();
    for (col_idx, value) in cells.enumerate() {
        if let Some(header) = headers.get(col_idx) {
            row_map.insert(header.clone(), value.trim().to_string());
        }
    }

    if row_map.values().all(|v| v.is_empty()) {
        None
    } else {
        Some(row_map)
    }
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_table(&self, file_path: &Path) -> ImportResult<ParsedTable> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 打开 CSV 文件
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行,跳过完全空白的行
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            if let Some(row_map) = assemble_row(&headers, record.iter()) {
                rows.push(row_map);
            }
        }

        Ok(ParsedTable { headers, rows })
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_table(&self, file_path: &Path) -> ImportResult<ParsedTable> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 打开 Excel 文件
        let mut workbook: Xlsx<_> = open_workbook(path)
            .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;

        // 读取第一个 sheet
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::ExcelParseError(
                "Excel 文件无工作表".to_string(),
            ));
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        // 提取表头（第一行）
        let mut sheet_rows = range.rows();
        let header_row = sheet_rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无数据行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        // 读取数据行,跳过完全空白的行
        let mut rows = Vec::new();
        for data_row in sheet_rows {
            let cells: Vec<String> = data_row.iter().map(|cell| cell.to_string()).collect();
            if let Some(row_map) = assemble_row(&headers, cells.iter().map(|s| s.as_str())) {
                rows.push(row_map);
            }
        }

        Ok(ParsedTable { headers, rows })
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<ParsedTable> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_to_table(path),
            "xlsx" | "xls" => ExcelParser.parse_to_table(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_csv_parser_valid_file() {
        // 创建临时 CSV 文件
        let mut temp_file = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(temp_file, "VENDOR,Qty,PO exfac date").unwrap();
        writeln!(temp_file, "ACME,100,2025-06-01").unwrap();
        writeln!(temp_file, "GLOBEX,250,2025-07-15").unwrap();

        let parser = CsvParser;
        let table = parser.parse_to_table(temp_file.path()).unwrap();

        assert_eq!(table.headers, vec!["VENDOR", "Qty", "PO exfac date"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].get("VENDOR"), Some(&"ACME".to_string()));
        assert_eq!(table.rows[0].get("Qty"), Some(&"100".to_string()));
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let parser = CsvParser;
        let result = parser.parse_to_table(Path::new("non_existent.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn test_csv_parser_skip_empty_rows() {
        let mut temp_file = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(temp_file, "VENDOR,Qty").unwrap();
        writeln!(temp_file, "ACME,100").unwrap();
        writeln!(temp_file, ",").unwrap(); // 空行
        writeln!(temp_file, "GLOBEX,250").unwrap();

        let parser = CsvParser;
        let table = parser.parse_to_table(temp_file.path()).unwrap();

        // 应跳过空行
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn test_csv_parser_trims_headers_and_values() {
        let mut temp_file = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(temp_file, " VENDOR , Qty ").unwrap();
        writeln!(temp_file, " acme , 100 ").unwrap();

        let parser = CsvParser;
        let table = parser.parse_to_table(temp_file.path()).unwrap();

        assert_eq!(table.headers, vec!["VENDOR", "Qty"]);
        assert_eq!(table.rows[0].get("VENDOR"), Some(&"acme".to_string()));
    }

    #[test]
    fn test_universal_parser_rejects_unknown_extension() {
        let parser = UniversalFileParser;
        let result = parser.parse("data.txt");
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }
}
