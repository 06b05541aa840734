// ==========================================
// 供应商产能对账系统 - CLI 主入口
// ==========================================
// 用法:
//   vendor-capacity-recon <booked.csv> <forecast.csv> <capacity.csv> \
//       [output.xlsx] [capacity_year]
//
// 三个输入齐备后执行一次全量对账,打印报表并写出着色 Excel
// ==========================================

use std::error::Error;
use vendor_capacity_recon::{
    export, logging, PipelineConfig, ReconPipeline, APP_NAME, VERSION,
};

fn main() -> Result<(), Box<dyn Error>> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", APP_NAME);
    tracing::info!("系统版本: {}", VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let (Some(booked_path), Some(forecast_path), Some(capacity_path)) =
        (args.next(), args.next(), args.next())
    else {
        eprintln!(
            "用法: vendor-capacity-recon <booked> <forecast> <capacity> [output.xlsx] [capacity_year]"
        );
        std::process::exit(2);
    };

    let output_path = args.next().unwrap_or_else(|| "utilization_report.xlsx".to_string());

    let mut config = PipelineConfig::default();
    if let Some(year_arg) = args.next() {
        config.capacity_year = year_arg
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("capacity_year 无法解析: {}", year_arg))?;
    }

    tracing::info!("产能年份: {}", config.capacity_year);

    // 全量对账 (单次批处理)
    let pipeline = ReconPipeline::new(config.clone());
    let output = pipeline.run_from_files(&booked_path, &forecast_path, &capacity_path)?;

    // 屏幕渲染
    print!("{}", export::render_text(&output.report));

    // Excel 写出 (利用率行按 Flag 着色)
    export::write_xlsx(&output.report, &output_path, &config.sheet_name)?;
    println!("报表已写出: {}", output_path);

    Ok(())
}
