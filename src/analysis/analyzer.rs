use std::time::Instant;

use metrics::{counter, histogram};
use reqwest::StatusCode;
use thiserror::Error;

use super::aggregator::aggregate_losses;
use super::reference::ReferenceAssets;
use crate::models::WalletAnalysisResult;
use crate::solana_tracker::{FetchError, TrackerClient, DEFAULT_TRADE_LIMIT};

const GENERIC_FAILURE_MESSAGE: &str = "Failed to fetch wallet data. Please try again later.";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("wallet address is empty")]
    InvalidWallet,

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("unauthorized: bad or missing API key")]
    Unauthorized,

    #[error("wallet has no trading history")]
    NotFound,

    #[error("provider error: {status}")]
    ProviderError { status: StatusCode },

    #[error("network failure: {0}")]
    NetworkFailure(#[source] reqwest::Error),

    #[error("fetch failed: {0}")]
    FetchFailed(#[source] FetchError),
}

impl From<FetchError> for AnalysisError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::RateLimited => AnalysisError::RateLimited,
            FetchError::Unauthorized => AnalysisError::Unauthorized,
            FetchError::NotFound => AnalysisError::NotFound,
            FetchError::Provider { status } => AnalysisError::ProviderError { status },
            FetchError::Network(err) => AnalysisError::NetworkFailure(err),
            other => AnalysisError::FetchFailed(other),
        }
    }
}

impl AnalysisError {
    /// Every value `kind()` can return.
    pub const KINDS: [&'static str; 7] = [
        "invalid_wallet",
        "rate_limited",
        "unauthorized",
        "not_found",
        "provider_error",
        "network_failure",
        "fetch_failed",
    ];

    /// Message suitable for showing to the person who asked for the analysis.
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalysisError::InvalidWallet => "Enter a wallet address to analyze.",
            AnalysisError::RateLimited => {
                "Rate limit exceeded. Please wait a moment and try again."
            }
            AnalysisError::Unauthorized => "Invalid API key. Please check your API key.",
            AnalysisError::NotFound => "Wallet has no trading history.",
            AnalysisError::ProviderError { status } if status.is_server_error() => {
                "API is experiencing issues. Please try again later."
            }
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }

    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::InvalidWallet => "invalid_wallet",
            AnalysisError::RateLimited => "rate_limited",
            AnalysisError::Unauthorized => "unauthorized",
            AnalysisError::NotFound => "not_found",
            AnalysisError::ProviderError { .. } => "provider_error",
            AnalysisError::NetworkFailure(_) => "network_failure",
            AnalysisError::FetchFailed(_) => "fetch_failed",
        }
    }
}

/// Entry point for wallet loss analysis: one fetch, one reduction.
#[derive(Debug, Clone)]
pub struct LossAnalyzer {
    client: TrackerClient,
    refs: ReferenceAssets,
    trade_limit: usize,
}

impl LossAnalyzer {
    pub fn new(client: TrackerClient) -> Self {
        Self {
            client,
            refs: ReferenceAssets::default(),
            trade_limit: DEFAULT_TRADE_LIMIT,
        }
    }

    pub fn with_reference_assets(mut self, refs: ReferenceAssets) -> Self {
        self.refs = refs;
        self
    }

    pub fn client(&self) -> &TrackerClient {
        &self.client
    }

    pub async fn analyze_wallet(
        &self,
        wallet: &str,
    ) -> Result<WalletAnalysisResult, AnalysisError> {
        let wallet = wallet.trim();
        if wallet.is_empty() {
            return Err(AnalysisError::InvalidWallet);
        }

        counter!("wallet_analyses_total").increment(1);
        tracing::info!(wallet, limit = self.trade_limit, "Analyzing wallet");

        let started = Instant::now();
        let fetched = self.client.get_wallet_trades(wallet, self.trade_limit).await;
        histogram!("trade_fetch_latency_seconds").record(started.elapsed().as_secs_f64());

        let page = match fetched {
            Ok(page) => page,
            Err(e) => {
                let err = AnalysisError::from(e);
                counter!("wallet_analysis_failures_total", "kind" => err.kind()).increment(1);
                tracing::error!(error = %err, kind = err.kind(), wallet, "Wallet analysis failed");
                return Err(err);
            }
        };

        counter!("trades_fetched_total").increment(page.trades.len() as u64);

        if page.trades.is_empty() {
            tracing::info!(wallet, "No trades found for wallet");
            return Ok(WalletAnalysisResult::default());
        }

        let result = aggregate_losses(&page.trades, &self.refs);

        tracing::info!(
            wallet,
            total_transactions = result.total_transactions,
            processed = result.processed_transactions,
            losses = result.losses.len(),
            "Wallet analysis complete"
        );

        Ok(result)
    }
}
