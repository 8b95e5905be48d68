use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

use super::types::TradesPage;

const DATA_API_BASE: &str = "https://data.solanatracker.io";

/// Provider page cap used for every wallet analysis.
pub const DEFAULT_TRADE_LIMIT: usize = 300;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("rate limit exceeded")]
    RateLimited,

    #[error("invalid API key")]
    Unauthorized,

    #[error("trading history not found")]
    NotFound,

    #[error("SolanaTracker API error: {status}")]
    Provider { status: StatusCode },

    #[error("HTTP request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("could not decode trades response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("invalid provider URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Classify a non-success provider status.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::TOO_MANY_REQUESTS => FetchError::RateLimited,
            StatusCode::UNAUTHORIZED => FetchError::Unauthorized,
            StatusCode::NOT_FOUND => FetchError::NotFound,
            status => FetchError::Provider { status },
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrackerClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl TrackerClient {
    pub fn new(http: Client, api_key: Option<String>) -> Self {
        Self::with_base_url(http, DATA_API_BASE, api_key)
    }

    pub fn with_base_url(http: Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// `{base}/wallet/{wallet}/trades`, with `wallet` encoded as a single
    /// path segment so it cannot add segments, a query or a fragment.
    fn wallet_trades_url(&self, wallet: &str) -> Result<Url, FetchError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push("wallet")
            .push(wallet)
            .push("trades");
        Ok(url)
    }

    /// Fetch the most recent trades for a wallet in a single request.
    ///
    /// The provider is asked for `limit` trades; anything beyond that is
    /// dropped locally. Pagination fields are passed through untouched.
    pub async fn get_wallet_trades(
        &self,
        wallet: &str,
        limit: usize,
    ) -> Result<TradesPage, FetchError> {
        let url = self.wallet_trades_url(wallet)?;
        let limit_param = limit.to_string();

        let mut req = self
            .http
            .get(url.clone())
            .query(&[("page_size", &limit_param), ("limit", &limit_param)]);

        match &self.api_key {
            Some(key) => req = req.header("x-api-key", key),
            None => tracing::warn!("SolanaTracker API key not found, sending anonymous request"),
        }

        tracing::debug!(%url, limit, "Fetching wallet trades");

        let resp = req.send().await.map_err(FetchError::Network)?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%status, wallet, "SolanaTracker returned an error status");
            return Err(FetchError::from_status(status));
        }

        let mut page: TradesPage = resp.json().await.map_err(FetchError::Decode)?;

        tracing::debug!(count = page.trades.len(), "SolanaTracker returned trades");

        if page.trades.len() > limit {
            tracing::debug!(
                returned = page.trades.len(),
                limit,
                "Truncating oversized trades response"
            );
            page.trades.truncate(limit);
        }

        Ok(page)
    }
}
