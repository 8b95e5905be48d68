use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TokenLoss;

/// Order in which losses are listed in a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LossOrder {
    /// Largest loss first.
    #[default]
    Amount,
    /// Most recent first-buy date first.
    Date,
    /// Largest percentage drop first.
    Percentage,
}

/// A token loss with the figures derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LossEntry {
    #[serde(flatten)]
    pub loss: TokenLoss,
    pub loss_percentage: Decimal,
    pub treatment_sessions: u64,
}

/// Filter out losses below `min_loss`, order the rest and attach derived figures.
/// Sorting is stable, so equal keys keep their incoming order.
pub fn build_entries(
    losses: Vec<TokenLoss>,
    order: LossOrder,
    min_loss: Option<Decimal>,
    treatment_cost_usd: Decimal,
) -> Vec<LossEntry> {
    let mut entries: Vec<LossEntry> = losses
        .into_iter()
        .filter(|l| min_loss.map_or(true, |min| l.loss_amount >= min))
        .map(|loss| LossEntry {
            loss_percentage: loss.loss_percentage(),
            treatment_sessions: loss.treatment_sessions(treatment_cost_usd),
            loss,
        })
        .collect();

    match order {
        LossOrder::Amount => entries.sort_by(|a, b| b.loss.loss_amount.cmp(&a.loss.loss_amount)),
        LossOrder::Date => entries.sort_by(|a, b| b.loss.date.cmp(&a.loss.date)),
        LossOrder::Percentage => entries.sort_by(|a, b| b.loss_percentage.cmp(&a.loss_percentage)),
    }

    entries
}
