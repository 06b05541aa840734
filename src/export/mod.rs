// ==========================================
// 供应商产能对账系统 - 导出适配器层
// ==========================================
// 职责: 报表的屏幕渲染与 Excel 写出
// ==========================================

pub mod text;
pub mod xlsx_writer;

// 重导出核心接口
pub use text::render_text;
pub use xlsx_writer::write_xlsx;
