use crate::convert::{convert, parse_amount};
use crate::core::RateProvider;
use anyhow::Result;
use std::io::Write;
use tracing::debug;

/// Runs the `convert` command and writes its single result line to `out`.
///
/// The amount is validated before the provider is touched. Currency codes are
/// uppercased here and otherwise passed through unchecked.
pub async fn run(
    provider: &dyn RateProvider,
    amount: &str,
    base: &str,
    target: &str,
    out: &mut impl Write,
) -> Result<()> {
    let amount = parse_amount(amount)?;
    let base = base.to_uppercase();
    let target = target.to_uppercase();
    debug!(amount, %base, %target, "Converting");

    let conversion = convert(provider, amount, &base, &target).await?;
    writeln!(out, "{conversion}")?;
    Ok(())
}
