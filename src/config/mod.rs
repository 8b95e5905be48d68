use rust_decimal::Decimal;
use std::env;

const DEFAULT_TRACKER_URL: &str = "https://data.solanatracker.io";

/// Average cost of one chemotherapy session in the US, in USD.
const DEFAULT_TREATMENT_COST_USD: i64 = 12_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    // SolanaTracker data API (key optional; anonymous requests are rate limited harder)
    pub solana_tracker_api_key: Option<String>,
    pub solana_tracker_base_url: String,

    // Mints treated as money in addition to SOL/USDC/USDT
    pub extra_reference_mints: Vec<String>,

    // Bearer token for /api routes; auth disabled when unset
    pub api_token: Option<String>,

    // Presentation
    pub treatment_cost_usd: Decimal,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,

            solana_tracker_api_key: env::var("SOLANA_TRACKER_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            solana_tracker_base_url: env::var("SOLANA_TRACKER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_TRACKER_URL.into()),
            extra_reference_mints: parse_mint_list(
                &env::var("EXTRA_REFERENCE_MINTS").unwrap_or_default(),
            ),

            api_token: env::var("API_TOKEN").ok().filter(|t| !t.is_empty()),

            treatment_cost_usd: env::var("TREATMENT_COST_USD")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v: &Decimal| *v > Decimal::ZERO)
                .unwrap_or(Decimal::from(DEFAULT_TREATMENT_COST_USD)),
        })
    }

    /// Returns true if a SolanaTracker API key is configured.
    pub fn has_tracker_auth(&self) -> bool {
        self.solana_tracker_api_key.is_some()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            solana_tracker_api_key: None,
            solana_tracker_base_url: DEFAULT_TRACKER_URL.into(),
            extra_reference_mints: Vec::new(),
            api_token: None,
            treatment_cost_usd: Decimal::from(DEFAULT_TREATMENT_COST_USD),
        }
    }
}

/// Comma-separated mint list; blanks are dropped.
fn parse_mint_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
