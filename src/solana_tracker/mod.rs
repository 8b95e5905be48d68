pub mod client;
pub mod types;

pub use client::{FetchError, TrackerClient, DEFAULT_TRADE_LIMIT};
pub use types::{ApiTokenInfo, ApiTrade, ApiTradeLeg, TradesPage};
