use accessory_etl::core::ConfigProvider;
use accessory_etl::utils::logger::{self, LogFormat};
use accessory_etl::utils::validation::Validate;
use accessory_etl::{CatalogPipeline, CliConfig, EtlEngine, LocalStorage, TomlConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 初始化日誌
    let format = if args.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(args.verbose, format);

    tracing::info!("Starting accessory-etl");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    match args.config.clone() {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            };
            run(config).await
        }
        None => run(args).await,
    }
}

async fn run<C: ConfigProvider + Validate>(config: C) -> anyhow::Result<()> {
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".");
    let pipeline = CatalogPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("ETL process completed successfully");
            println!("✅ Catalog written to: {}", output_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!("ETL process failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    }
}
