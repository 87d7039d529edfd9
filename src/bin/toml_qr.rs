use anyhow::Context;
use clap::Parser;
use qr_fetch::core::ConfigProvider;
use qr_fetch::utils::{logger, validation::Validate};
use qr_fetch::{LocalStorage, QrEngine, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-qr")]
#[command(about = "Download a QR code image using a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "qr-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - show the request URL without downloading
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    // 命令列 --verbose 優先於設定檔中的 level
    let level = if args.verbose { None } else { config.log_level() };
    logger::init_logger(args.verbose, level, config.json_logs());

    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let engine = QrEngine::new(LocalStorage::new(), config)
        .context("failed to build HTTP client")?;

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be downloaded");
        let request_url = engine.plan()?;
        println!("Generating QR code for: {}", engine.config().payload());
        println!("Downloading from: {}", request_url);
        println!(
            "Would save to: {} (timeout: {:?})",
            engine.config().output_path(),
            engine.config().request_timeout()
        );
        return Ok(());
    }

    if let Err(e) = engine.run().await {
        tracing::error!("❌ QR download failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
