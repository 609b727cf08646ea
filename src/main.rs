use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use xrate::core::log::init_logging;
use xrate::providers::ExchangeRateApiProvider;

#[derive(Parser)]
#[command(version, about = "A beautiful CLI currency converter")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for xrate::AppCommand {
    fn from(cmd: Commands) -> xrate::AppCommand {
        match cmd {
            Commands::Convert {
                amount,
                base,
                target,
            } => xrate::AppCommand::Convert {
                amount,
                base,
                target,
            },
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert currency from base to target
    #[command(allow_negative_numbers = true)]
    Convert {
        /// Amount to convert, in the base currency
        amount: String,
        /// Currency code the amount is in (e.g. usd)
        base: String,
        /// Currency code to convert into (e.g. eur)
        target: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(cmd) => {
            let provider = ExchangeRateApiProvider::default();
            xrate::run_command(cmd.into(), &provider, &mut std::io::stdout().lock()).await
        }
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
