pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::{ConversionRequest, CurrencyCode};
use crate::providers::exchange_rate_api::ExchangeRateApiProvider;
use anyhow::Result;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub enum AppCommand {
    Convert {
        amount: f64,
        from: Option<String>,
        to: Option<String>,
        show_trend: bool,
    },
    Trend {
        currency: Option<String>,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fxc starting...");

    let config = AppConfig::load(config_path)?.with_env_overrides();
    debug!("Loaded config: {config:#?}");
    run_with_config(command, &config).await
}

pub fn rate_provider(config: &AppConfig) -> ExchangeRateApiProvider {
    ExchangeRateApiProvider::new(
        &config.providers.exchange_rate_api.base_url,
        config.api_key.clone(),
    )
}

/// Runs `command` against an already resolved configuration.
pub async fn run_with_config(command: AppCommand, config: &AppConfig) -> Result<()> {
    match command {
        AppCommand::Convert {
            amount,
            from,
            to,
            show_trend,
        } => {
            let request = ConversionRequest::new(
                amount,
                from.as_deref().unwrap_or(&config.default_from),
                to.as_deref().unwrap_or(&config.default_to),
            )?;
            let outcome = cli::convert::run(&rate_provider(config), &request, show_trend).await?;
            debug!(?outcome, "Convert command finished");
            Ok(())
        }
        AppCommand::Trend { currency } => {
            let target: CurrencyCode = currency
                .as_deref()
                .unwrap_or(&config.default_to)
                .parse()?;
            cli::trend::run(&target);
            Ok(())
        }
    }
}
