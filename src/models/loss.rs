use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Realized loss on a single token across all of its buys and sells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenLoss {
    pub mint: String,
    pub name: String,
    pub symbol: String,
    pub loss_amount: Decimal,
    /// Volume-weighted average buy price (USD per token).
    pub buy_price: Decimal,
    /// Volume-weighted average sell price (USD per token).
    pub sell_price: Decimal,
    /// Total quantity bought.
    pub quantity: Decimal,
    /// Calendar date (UTC) of the earliest buy.
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl TokenLoss {
    /// Drop from average buy to average sell price, in percent of the buy price.
    /// Zero when the buy price is not positive.
    pub fn loss_percentage(&self) -> Decimal {
        if self.buy_price <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        (self.buy_price - self.sell_price)
            .checked_div(self.buy_price)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map(|pct| pct.normalize())
            .unwrap_or(Decimal::ZERO)
    }

    pub fn treatment_sessions(&self, treatment_cost_usd: Decimal) -> u64 {
        whole_sessions(self.loss_amount, treatment_cost_usd)
    }
}

/// How many whole sessions `amount` pays for; 0 for a non-positive cost.
pub fn whole_sessions(amount: Decimal, treatment_cost_usd: Decimal) -> u64 {
    if treatment_cost_usd <= Decimal::ZERO {
        return 0;
    }
    amount
        .checked_div(treatment_cost_usd)
        .and_then(|n| n.floor().to_u64())
        .unwrap_or(0)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAnalysisResult {
    /// Sorted by `loss_amount`, largest first.
    pub losses: Vec<TokenLoss>,
    pub total_transactions: usize,
    /// Tokens that had at least one buy and one sell.
    pub processed_transactions: usize,
}

impl WalletAnalysisResult {
    pub fn total_loss(&self) -> Decimal {
        self.losses.iter().map(|l| l.loss_amount).sum()
    }
}

/// Headline numbers for a wallet's losses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LossSummary {
    pub total_loss: Decimal,
    /// Mean loss per losing token, 0 when there are none.
    pub average_loss: Decimal,
    pub tokens_with_losses: usize,
    pub treatment_cost_usd: Decimal,
    /// Whole treatment sessions the total loss would have paid for.
    pub treatment_sessions: u64,
}

impl LossSummary {
    pub fn new(result: &WalletAnalysisResult, treatment_cost_usd: Decimal) -> Self {
        let total_loss = result.total_loss();
        let tokens_with_losses = result.losses.len();
        let average_loss = total_loss
            .checked_div(Decimal::from(tokens_with_losses))
            .unwrap_or(Decimal::ZERO);

        Self {
            total_loss,
            average_loss,
            tokens_with_losses,
            treatment_cost_usd,
            treatment_sessions: whole_sessions(total_loss, treatment_cost_usd),
        }
    }
}
