use clap::Parser;
use pawmi_care::utils::{logger, validation::Validate};
use pawmi_care::{CliConfig, GuidanceEngine, GuidancePipeline, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pawmi-care CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let print = config.print;
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = GuidancePipeline::new(storage, config)?;
    let engine = GuidanceEngine::new(pipeline);

    match engine.run().await {
        Ok(output) => {
            if print {
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
