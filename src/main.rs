use clap::Parser;
use qr_fetch::core::ConfigProvider;
use qr_fetch::utils::{logger, validation::Validate};
use qr_fetch::{CliConfig, LocalStorage, QrEngine, QrError};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, None, config.json_logs);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config).await {
        tracing::error!(
            "❌ QR download failed: {} (Category: {:?})",
            e,
            e.category()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(config: CliConfig) -> Result<(), QrError> {
    // 驗證配置
    config.validate()?;

    let dry_run = config.dry_run;
    let engine = QrEngine::new(LocalStorage::new(), config)?;

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be downloaded");
        let request_url = engine.plan()?;
        println!("Generating QR code for: {}", engine.config().payload());
        println!("Downloading from: {}", request_url);
        return Ok(());
    }

    engine.run().await?;
    Ok(())
}
