//! Currency rate abstractions

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

/// Rates of one unit of a base currency, keyed by currency code.
///
/// Codes are kept exactly as the remote service returns them.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RateTable(HashMap<String, f64>);

impl RateTable {
    pub fn get(&self, code: &str) -> Option<f64> {
        self.0.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        RateTable(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches the latest rate table for `base`.
    async fn fetch_rates(&self, base: &str) -> Result<RateTable>;
}
