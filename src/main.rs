use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxc::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxc::AppCommand {
    fn from(cmd: Commands) -> fxc::AppCommand {
        match cmd {
            Commands::Convert {
                amount,
                from,
                to,
                no_trend,
            } => fxc::AppCommand::Convert {
                amount,
                from,
                to,
                show_trend: !no_trend,
            },
            Commands::Trend { currency } => fxc::AppCommand::Trend { currency },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount using the latest exchange rate
    Convert {
        /// Amount to convert
        #[arg(default_value_t = 0.0, allow_negative_numbers = true)]
        amount: f64,

        /// Source currency code, e.g. USD
        #[arg(short, long)]
        from: Option<String>,

        /// Target currency code, e.g. EUR
        #[arg(short, long)]
        to: Option<String>,

        /// Skip the trend chart
        #[arg(long)]
        no_trend: bool,
    },
    /// Display the sample exchange rate trend for a currency
    Trend {
        /// Currency code, defaults to the configured target currency
        currency: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxc::cli::setup::setup(),
        Some(cmd) => fxc::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
