use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Token metadata
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiTokenInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub decimals: u8,
}

// ---------------------------------------------------------------------------
// Trade (Data API: /wallet/{owner}/trades)
// ---------------------------------------------------------------------------

// Numeric fields are `Option` because the provider sends explicit `null`s,
// which `#[serde(default)]` alone does not accept.

/// One side of a swap: the asset that left or entered the wallet.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiTradeLeg {
    pub address: String,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub token: ApiTokenInfo,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiPrice {
    #[serde(default)]
    pub usd: Option<Decimal>,
    /// SOL price comes back as a string on this endpoint.
    #[serde(default)]
    pub sol: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiVolume {
    #[serde(default)]
    pub usd: Option<Decimal>,
    #[serde(default)]
    pub sol: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiTrade {
    pub tx: String,
    pub from: ApiTradeLeg,
    pub to: ApiTradeLeg,
    #[serde(default)]
    pub price: ApiPrice,
    #[serde(default)]
    pub volume: ApiVolume,
    #[serde(default)]
    pub wallet: String,
    #[serde(default)]
    pub program: String,
    /// Epoch milliseconds.
    pub time: i64,
}

impl ApiTrade {
    /// Quantity moved on whichever leg carries `address`, if either does.
    /// A null amount counts as zero.
    pub fn amount_of(&self, address: &str) -> Option<Decimal> {
        if self.to.address == address {
            Some(self.to.amount.unwrap_or_default())
        } else if self.from.address == address {
            Some(self.from.amount.unwrap_or_default())
        } else {
            None
        }
    }

    /// Fiat value of the swap; zero when the provider had none.
    pub fn volume_usd(&self) -> Decimal {
        self.volume.usd.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradesPage {
    #[serde(default)]
    pub trades: Vec<ApiTrade>,
    #[serde(default)]
    pub next_cursor: Option<i64>,
    #[serde(default)]
    pub has_next_page: bool,
}
