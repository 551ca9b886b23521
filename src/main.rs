//! # 闪光图尺寸扫描工具 — 命令行入口
//!
//! 本文件仅负责日志初始化、参数解析与配置合并。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use shiny_scanner::error::AppError;
use shiny_scanner::scanner::{ScanConfig, Scanner};

#[derive(Parser, Debug)]
#[command(name = "shiny-scanner")]
#[command(version, about = "Report undersized and mismatched base / shiny art pairs", long_about = None)]
struct Cli {
    /// JSON config file; command-line flags override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory with the base (non-shiny) images
    #[arg(long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Directory with the shiny images
    #[arg(long, value_name = "DIR")]
    shiny_dir: Option<PathBuf>,

    /// Report output path
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Content smaller than this in both dimensions is reported
    #[arg(long, value_name = "PIXELS")]
    min_dimension: Option<u32>,

    /// Allowed per-dimension difference between base and shiny content
    #[arg(long, value_name = "PIXELS")]
    tolerance: Option<u32>,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,
}

/// 合并配置：默认值 < 配置文件 < 命令行参数。
fn build_config(cli: &Cli) -> Result<ScanConfig, AppError> {
    let mut config = match &cli.config {
        Some(path) => ScanConfig::load_from_path(path)?,
        None => ScanConfig::default(),
    };

    if let Some(dir) = &cli.base_dir {
        config.base_dir = dir.clone();
    }
    if let Some(dir) = &cli.shiny_dir {
        config.shiny_dir = dir.clone();
    }
    if let Some(path) = &cli.output {
        config.output_path = path.clone();
    }
    if let Some(min_dimension) = cli.min_dimension {
        config.min_dimension = min_dimension;
    }
    if let Some(tolerance) = cli.tolerance {
        config.mismatch_tolerance = tolerance;
    }

    Ok(config)
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = build_config(&cli)?;

    if cli.print_config {
        let json = serde_json::to_string_pretty(&config)
            .map_err(|e| AppError::Report(format!("序列化配置失败: {}", e)))?;
        println!("{json}");
        return Ok(());
    }

    log::info!(
        "⚙️ 扫描配置 - base: {} shiny: {} 输出: {} 阈值: {} 容差: {}",
        config.base_dir.display(),
        config.shiny_dir.display(),
        config.output_path.display(),
        config.min_dimension,
        config.mismatch_tolerance
    );

    let summary = Scanner::new(config).run()?;

    println!("Done! Check the output file for the list of PNG files.");
    println!("{summary}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("运行失败: {err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
