//! Converts an amount from a base currency into a target currency.

use anyhow::{Result, anyhow};
use std::fmt;
use tracing::debug;

use crate::core::RateProvider;

/// Outcome of a single conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    Converted {
        amount: f64,
        base: String,
        converted: f64,
        target: String,
    },
    /// The target code is not present in the rate table for the base.
    UnknownTarget,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Converted {
                amount,
                base,
                converted,
                target,
            } => write!(f, "💵 {amount:.2} {base} = {converted:.2} {target}"),
            Conversion::UnknownTarget => write!(f, "Invalid target currency"),
        }
    }
}

/// Parses a user supplied amount as a 64-bit float.
///
/// Finite input that overflows to infinity is out of range and rejected;
/// an explicit `inf`/`infinity` literal is accepted.
pub fn parse_amount(input: &str) -> Result<f64> {
    let invalid = || anyhow!("Invalid amount: {}", input);
    let amount = input.parse::<f64>().map_err(|_| invalid())?;

    if amount.is_infinite() && !is_infinity_literal(input) {
        return Err(invalid());
    }
    Ok(amount)
}

fn is_infinity_literal(input: &str) -> bool {
    let unsigned = input.strip_prefix(['+', '-']).unwrap_or(input);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Fetches the rates for `base` and converts `amount` into `target`.
///
/// Codes are used exactly as given. The product is left unrounded; rounding
/// only happens when the result is displayed.
pub async fn convert(
    provider: &dyn RateProvider,
    amount: f64,
    base: &str,
    target: &str,
) -> Result<Conversion> {
    let rates = provider.fetch_rates(base).await?;

    let Some(rate) = rates.get(target) else {
        debug!(%base, %target, "Target currency not in rate table");
        return Ok(Conversion::UnknownTarget);
    };

    debug!(%base, %target, rate, "Found conversion rate");
    Ok(Conversion::Converted {
        amount,
        base: base.to_string(),
        converted: amount * rate,
        target: target.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RateTable;
    use async_trait::async_trait;

    struct StaticRates(RateTable);

    #[async_trait]
    impl RateProvider for StaticRates {
        async fn fetch_rates(&self, _base: &str) -> Result<RateTable> {
            Ok(self.0.clone())
        }
    }

    struct FailingRates;

    #[async_trait]
    impl RateProvider for FailingRates {
        async fn fetch_rates(&self, _base: &str) -> Result<RateTable> {
            Err(anyhow!("HTTP request failed: connection refused"))
        }
    }

    fn rates(entries: &[(&str, f64)]) -> StaticRates {
        StaticRates(entries.iter().map(|(k, v)| (*k, *v)).collect())
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100").unwrap(), 100.0);
        assert_eq!(parse_amount("12.5").unwrap(), 12.5);
        assert_eq!(parse_amount("-3").unwrap(), -3.0);
        assert_eq!(parse_amount("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_parse_infinity_literal() {
        assert_eq!(parse_amount("inf").unwrap(), f64::INFINITY);
        assert_eq!(parse_amount("-Infinity").unwrap(), f64::NEG_INFINITY);
        assert_eq!(parse_amount("+INF").unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_parse_invalid_amount() {
        for input in ["abc", "", "12,5", " 10", "10usd", "1e400", "-1e400"] {
            let err = parse_amount(input).unwrap_err();
            assert_eq!(err.to_string(), format!("Invalid amount: {input}"));
        }
    }

    #[tokio::test]
    async fn test_convert_multiplies_by_rate() {
        let provider = rates(&[("EUR", 0.92)]);
        let result = convert(&provider, 100.0, "USD", "EUR").await.unwrap();

        assert_eq!(result.to_string(), "💵 100.00 USD = 92.00 EUR");
    }

    #[tokio::test]
    async fn test_convert_keeps_full_precision() {
        let provider = rates(&[("JPY", 110.5)]);
        let result = convert(&provider, 1.005, "USD", "JPY").await.unwrap();

        match result {
            Conversion::Converted { converted, .. } => assert_eq!(converted, 1.005 * 110.5),
            other => panic!("Expected a conversion, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_convert_display_rounds_to_two_places() {
        let provider = rates(&[("GBP", 0.78912)]);
        let result = convert(&provider, 3.14159, "USD", "GBP").await.unwrap();

        assert_eq!(result.to_string(), "💵 3.14 USD = 2.48 GBP");
    }

    #[tokio::test]
    async fn test_convert_negative_amount() {
        let provider = rates(&[("EUR", 0.5)]);
        let result = convert(&provider, -10.0, "USD", "EUR").await.unwrap();

        assert_eq!(result.to_string(), "💵 -10.00 USD = -5.00 EUR");
    }

    #[tokio::test]
    async fn test_unknown_target_currency() {
        let provider = rates(&[("EUR", 0.92)]);
        let result = convert(&provider, 10.0, "USD", "XXX").await.unwrap();

        assert_eq!(result, Conversion::UnknownTarget);
        assert_eq!(result.to_string(), "Invalid target currency");
    }

    #[tokio::test]
    async fn test_provider_error_is_propagated() {
        let result = convert(&FailingRates, 10.0, "USD", "EUR").await;

        assert_eq!(
            result.unwrap_err().to_string(),
            "HTTP request failed: connection refused"
        );
    }
}
