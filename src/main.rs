use clap::Parser;
use record_cleaner::utils::{logger, validation::Validate};
use record_cleaner::{CleanerEngine, CliConfig, LocalStorage, RecordCleaner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting record-cleaner");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 創建存儲和管道
    let storage = LocalStorage::new(".".to_string());
    let pipeline = RecordCleaner::new(storage, config);
    let engine = CleanerEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!("✅ Cleaning completed successfully");
            println!("Total rows removed: {}", summary.invalid_count);
            println!("Invalid data saved to: {}", summary.invalid_path);
            println!("Cleaned dataset saved to: {}", summary.clean_path);
        }
        Err(e) => {
            tracing::error!("❌ Cleaning failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
