use clap::Parser;
use sem_keywords::core::{ConfigProvider, Pipeline};
use sem_keywords::utils::error::ErrorSeverity;
use sem_keywords::utils::{logger, validation::Validate};
use sem_keywords::{
    expected_row_count, KeywordEngine, KeywordPipeline, LocalStorage, OutputFormat, TermSource,
    TomlConfig,
};

#[derive(Parser)]
#[command(name = "toml-keywords")]
#[command(about = "Keyword generation driven by a TOML job file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "keywords.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Override the output format from config
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Dry run - show what would be generated without writing output
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based keyword generation");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(format) = args.format {
        config.output.format = format;
        tracing::info!("🔧 Output format overridden to: {:?}", format);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    // 輸入檔案路徑相對於設定檔所在目錄
    let base_dir = std::path::Path::new(&args.config)
        .parent()
        .map(|dir| dir.to_path_buf())
        .unwrap_or_default();
    let storage = LocalStorage::new(base_dir);
    let pipeline = KeywordPipeline::new(storage, config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No output will be written");
        perform_dry_run(&pipeline).await?;
        return Ok(());
    }

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
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn describe_source(source: &TermSource) -> String {
    match source {
        TermSource::Inline(terms) => format!("{} inline terms", terms.len()),
        TermSource::File(path) => format!("file {}", path),
    }
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Campaign: {}", config.campaign_name());
    println!("  Match Types: {}", config.match_types().join(", "));
    println!("  Order Matters: {}", config.order_matters());
    println!("  Products: {}", describe_source(&config.products()));
    println!("  Words: {}", describe_source(&config.words()));
    println!(
        "  Output: {}/{} ({:?})",
        config.output_path(),
        config.output_file(),
        config.output_format()
    );
    println!("  Max Rows: {}", config.max_rows());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

async fn perform_dry_run(
    pipeline: &KeywordPipeline<LocalStorage, TomlConfig>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = pipeline.config();
    let terms = pipeline.extract().await?;
    let rows = expected_row_count(
        terms.products.len(),
        terms.words.len(),
        config.match_types().len(),
        config.order_matters(),
    );

    println!("🔍 Dry Run Analysis:");
    println!("  Products after normalization: {}", terms.products.len());
    println!("  Words after normalization: {}", terms.words.len());
    println!("  Expected keyword rows: {}", rows);

    if rows > config.max_rows() {
        println!(
            "  ⚠️ Exceeds max_rows ({}), the run would be rejected",
            config.max_rows()
        );
    }

    println!();
    println!("✅ Dry run analysis complete.");

    Ok(())
}
