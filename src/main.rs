use clap::Parser;
use csv_regroup::utils::{logger, validation::Validate};
use csv_regroup::{CliConfig, LocalStorage, RegroupEngine, RegroupPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting csv-regroup");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Fold in the optional TOML file, then validate the merged result
    let config = match config.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load config file: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let print_summary = config.summary;

    let storage = LocalStorage::new();
    let pipeline = RegroupPipeline::new(storage, config);
    let engine = RegroupEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!("✅ Regroup completed successfully!");
            tracing::info!("📁 Output saved to: {}", summary.results_dir);
            println!(
                "✅ Regrouped {} files into {} groups",
                summary.copied,
                summary.groups.len()
            );
            println!("📁 Output saved to: {}", summary.results_dir);

            if print_summary {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Regroup failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                csv_regroup::utils::error::ErrorSeverity::Low => 0,
                csv_regroup::utils::error::ErrorSeverity::Medium => 2,
                csv_regroup::utils::error::ErrorSeverity::High => 1,
                csv_regroup::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
