pub mod cli;
pub mod convert;
pub mod core;
pub mod providers;

use crate::core::RateProvider;
use anyhow::Result;
use std::io::Write;
use tracing::info;

pub enum AppCommand {
    Convert {
        amount: String,
        base: String,
        target: String,
    },
}

/// Runs `command` against `provider`, writing user facing output to `out`.
pub async fn run_command(
    command: AppCommand,
    provider: &dyn RateProvider,
    out: &mut impl Write,
) -> Result<()> {
    info!("Currency converter starting...");

    match command {
        AppCommand::Convert {
            amount,
            base,
            target,
        } => cli::convert::run(provider, &amount, &base, &target, out).await,
    }
}
