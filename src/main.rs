use byteprobe::utils::{logger, validation::Validate};
use byteprobe::{CliConfig, DumpPipeline, LocalFileSource, ProbeEngine};
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting byteprobe CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 建立檔案來源和管道
    let source = LocalFileSource::new();
    let pipeline = DumpPipeline::new(source, config);

    let engine = ProbeEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(_) => {
            tracing::info!("✅ Byte dump completed successfully");
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Byte dump failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                byteprobe::utils::error::ErrorSeverity::Low => 0,
                byteprobe::utils::error::ErrorSeverity::Medium => 2,
                byteprobe::utils::error::ErrorSeverity::High => 1,
                byteprobe::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
