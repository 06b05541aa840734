// ==========================================
// 供应商产能对账系统 - 屏幕文本渲染
// ==========================================
// 职责: 透视报表 → 对齐的纯文本表格 (stdout 展示用)
// ==========================================

use crate::domain::report::ReportTable;

/// 渲染为等宽对齐的文本表格
pub fn render_text(table: &ReportTable) -> String {
    let headers = table.header_labels();
    let mut grid: Vec<Vec<String>> = vec![headers];

    for row in &table.rows {
        let mut line = vec![row.vendor_label.clone(), row.item.label().to_string()];
        line.extend(row.cells.iter().map(|c| c.render()));
        grid.push(line);
    }

    // 每列取最大宽度
    let col_count = grid.iter().map(|r| r.len()).max().unwrap_or(0);
    let mut widths = vec![0usize; col_count];
    for row in &grid {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for (row_idx, row) in grid.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        out.push_str(line.join(" | ").trim_end());
        out.push('\n');

        // 表头下划线
        if row_idx == 0 {
            let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            out.push_str(&sep.join("-+-"));
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{ReportCell, ReportRow};
    use crate::domain::types::{MetricLine, PeriodKey, UtilizationFlag, VendorKey};

    #[test]
    fn test_render_text_layout() {
        let table = ReportTable {
            periods: vec![PeriodKey::new(2025, 6).unwrap()],
            vendors: vec![VendorKey::new("ACME")],
            rows: vec![
                ReportRow {
                    vendor_label: "ACME".to_string(),
                    item: MetricLine::Capacity,
                    cells: vec![ReportCell::Number(120.0)],
                },
                ReportRow {
                    vendor_label: String::new(),
                    item: MetricLine::UtilizationWithFlag,
                    cells: vec![ReportCell::Utilization {
                        pct: 125.0,
                        flag: UtilizationFlag::Overbooked,
                    }],
                },
            ],
        };

        let text = render_text(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].contains("Vendor / Month"));
        assert!(lines[0].contains("'Jun'25"));
        assert!(lines[2].contains("ACME"));
        assert!(lines[2].contains("CAPACITY"));
        assert!(lines[3].contains("125.0% - Overbooked"));
    }
}
