// ==========================================
// 供应商产能对账系统 - Excel 导出适配器
// ==========================================
// 职责: 透视报表写为 .xlsx,利用率行按 Flag 枚举着色
// 红线: 着色判定只看 ReportCell::Utilization 携带的枚举,
//       禁止对渲染文本做子串匹配
// ==========================================

use crate::domain::report::{ReportCell, ReportTable};
use crate::domain::types::UtilizationFlag;
use crate::importer::error::ImportResult;
use rust_xlsxwriter::{Color, Format, Workbook};
use std::path::Path;
use tracing::info;

// 标记底色 (红 / 黄 / 绿)
const COLOR_OVERBOOKED: Color = Color::RGB(0xFF0000);
const COLOR_UNDERUTILIZED: Color = Color::RGB(0xFFFF00);
const COLOR_OPTIMAL: Color = Color::RGB(0x00FF00);

fn flag_color(flag: UtilizationFlag) -> Color {
    match flag {
        UtilizationFlag::Overbooked => COLOR_OVERBOOKED,
        UtilizationFlag::Underutilized => COLOR_UNDERUTILIZED,
        UtilizationFlag::Optimal => COLOR_OPTIMAL,
    }
}

/// 写出报表为 Excel 文件
pub fn write_xlsx<P: AsRef<Path>>(
    table: &ReportTable,
    path: P,
    sheet_name: &str,
) -> ImportResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet().set_name(sheet_name)?;

    let header_format = Format::new().set_bold();

    // 表头行
    for (col, label) in table.header_labels().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, label.as_str(), &header_format)?;
    }

    // 数据行 (行 0 为表头)
    for (row_idx, row) in table.rows.iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;
        worksheet.write_string(excel_row, 0, row.vendor_label.as_str())?;
        worksheet.write_string(excel_row, 1, row.item.label())?;

        for (cell_idx, cell) in row.cells.iter().enumerate() {
            let excel_col = (cell_idx + 2) as u16;
            match cell {
                ReportCell::Blank => {} // 空白单元格不写入
                ReportCell::Number(v) => {
                    worksheet.write_number(excel_row, excel_col, *v)?;
                }
                ReportCell::Utilization { flag, .. } => {
                    // 按枚举着色,文本用统一渲染
                    let format = Format::new().set_background_color(flag_color(*flag));
                    worksheet.write_string_with_format(
                        excel_row,
                        excel_col,
                        cell.render(),
                        &format,
                    )?;
                }
            }
        }
    }

    workbook.save(path.as_ref())?;
    info!("Excel 报表已写出: {}", path.as_ref().display());
    Ok(())
}
