use clap::Parser;
use sem_keywords::utils::error::{ErrorSeverity, KeywordError};
use sem_keywords::utils::{logger, validation::Validate};
use sem_keywords::{CliConfig, KeywordEngine, KeywordPipeline, LocalStorage};

fn exit_code(e: &KeywordError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sem-keywords CLI");
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

    // 輸入檔案以目前目錄為基準
    let storage = LocalStorage::new(".");
    let pipeline = KeywordPipeline::new(storage, config);
    let engine = KeywordEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            println!("✅ Keyword generation completed successfully!");
            println!("📁 Output saved to: {}", report.output_path);
            println!("{}", report.summary);
        }
        Err(e) => {
            tracing::error!(
                "❌ Keyword generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let code = exit_code(&e);
            if code > 0 {
                std::process::exit(code);
            }
        }
    }

    Ok(())
}
