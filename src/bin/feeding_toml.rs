use clap::Parser;
use pawmi_care::config::TomlConfig;
use pawmi_care::core::ConfigProvider;
use pawmi_care::utils::{logger, validation::Validate};
use pawmi_care::{FeedingUnit, GuidanceEngine, GuidancePipeline, LocalStorage};

#[derive(Parser)]
#[command(name = "feeding-toml")]
#[command(about = "Feeding guidance driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "pawmi-care.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the feeding unit from config
    #[arg(long, value_enum)]
    unit: Option<FeedingUnit>,

    /// Print the guidance cards to stdout
    #[arg(long)]
    print: bool,

    /// Dry run - show the configuration without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger(if args.verbose { "debug" } else { config.log_level() });
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based feeding guidance");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 套用命令列覆蓋設定
    if let Some(unit) = args.unit {
        config.feeding.unit = unit;
        tracing::info!("🔧 Feeding unit overridden to: {}", unit);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No request will be made");
        return Ok(());
    }

    let storage = LocalStorage::new(config.load.output_path.clone());
    let pipeline = GuidancePipeline::new(storage, config)?;
    let engine = GuidanceEngine::new(pipeline);

    match engine.run().await {
        Ok(output) => {
            if args.print {
                println!("{}", output.rendered);
            }
            println!("✅ Guidance ready for {} pets", output.pet_count);
            println!("📁 Output saved to: {}", output.output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = e.severity().exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("  App: {}", config.app.name);
    if let Some(version) = &config.app.version {
        tracing::info!("  Version: {}", version);
    }
    tracing::info!("  Endpoint: {}", config.api_endpoint());
    tracing::info!("  Timeout: {}s", config.request_timeout_seconds());
    tracing::info!("  Unit: {}", config.feeding_unit());
    tracing::info!("  Output: {}", config.output_path());
    tracing::info!("  Formats: {}", config.output_formats().join(", "));
    if let Some(archive) = config.archive_name() {
        tracing::info!("  Archive: {}", archive);
    }
}
