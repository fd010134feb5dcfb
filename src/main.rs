use address_lookup::app::build_directory;
use address_lookup::core::ConfigProvider;
use address_lookup::utils::{logger, validation::Validate};
use address_lookup::{AddressError, AddressServer, CliConfig, TomlConfig};
use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting address-lookup");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?;
            run(&config).await
        }
        None => run(&cli).await,
    }
}

async fn run<C: ConfigProvider + Validate>(config: &C) -> anyhow::Result<()> {
    // 驗證配置
    if let Err(e) = config.validate() {
        report(&e);
        std::process::exit(1);
    }

    let directory = match build_directory(config).await {
        Ok(directory) => Arc::new(directory),
        Err(e) => {
            report(&e);
            std::process::exit(1);
        }
    };

    let server = AddressServer::bind(config.listen_address(), directory, config.request_timeout())
        .await
        .with_context(|| format!("failed to bind {}", config.listen_address()))?;

    server
        .serve(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}

fn report(e: &AddressError) {
    tracing::error!("❌ Startup failed: {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
}
