use std::collections::HashMap;

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;

use super::reference::ReferenceAssets;
use crate::models::{TokenLoss, WalletAnalysisResult};
use crate::solana_tracker::{ApiTokenInfo, ApiTrade};

const UNKNOWN_TOKEN_NAME: &str = "Unknown Token";
const UNKNOWN_TOKEN_SYMBOL: &str = "UNKNOWN";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeDirection {
    Buy,
    Sell,
}

/// A trade's direction relative to the non-reference token it moves.
#[derive(Debug, Clone, Copy)]
pub struct Classified<'a> {
    pub mint: &'a str,
    pub token: &'a ApiTokenInfo,
    pub direction: TradeDirection,
}

/// Decide whether `trade` buys or sells a non-reference token.
///
/// Only swaps with exactly one reference leg qualify. Reference-to-reference
/// and token-to-token swaps return `None`.
pub fn classify<'a>(trade: &'a ApiTrade, refs: &ReferenceAssets) -> Option<Classified<'a>> {
    let from_ref = refs.contains(&trade.from.address);
    let to_ref = refs.contains(&trade.to.address);

    match (from_ref, to_ref) {
        (true, false) => Some(Classified {
            mint: &trade.to.address,
            token: &trade.to.token,
            direction: TradeDirection::Buy,
        }),
        (false, true) => Some(Classified {
            mint: &trade.from.address,
            token: &trade.from.token,
            direction: TradeDirection::Sell,
        }),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Cohorts
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct TokenCohort<'a> {
    mint: &'a str,
    token: &'a ApiTokenInfo,
    buys: Vec<&'a ApiTrade>,
    sells: Vec<&'a ApiTrade>,
}

impl<'a> TokenCohort<'a> {
    fn is_round_trip(&self) -> bool {
        !self.buys.is_empty() && !self.sells.is_empty()
    }

    /// Reduce the cohort to a loss record, or `None` on break-even or gain.
    fn realized_loss(&self) -> Option<TokenLoss> {
        let total_bought_usd = sum_volume_usd(&self.buys);
        let total_sold_usd = sum_volume_usd(&self.sells);

        if total_sold_usd >= total_bought_usd {
            return None;
        }

        let total_bought_qty = sum_quantity(&self.buys, self.mint);
        let total_sold_qty = sum_quantity(&self.sells, self.mint);

        let earliest_buy_ms = self.buys.iter().map(|t| t.time).min()?;

        Some(TokenLoss {
            mint: self.mint.to_string(),
            name: display_or(&self.token.name, UNKNOWN_TOKEN_NAME),
            symbol: display_or(&self.token.symbol, UNKNOWN_TOKEN_SYMBOL),
            loss_amount: total_bought_usd - total_sold_usd,
            buy_price: average_price(total_bought_usd, total_bought_qty),
            sell_price: average_price(total_sold_usd, total_sold_qty),
            quantity: total_bought_qty,
            date: calendar_date(earliest_buy_ms),
            image_url: self.token.image.clone(),
        })
    }
}

fn sum_volume_usd(trades: &[&ApiTrade]) -> Decimal {
    trades.iter().map(|t| t.volume_usd()).sum()
}

/// Sum the quantity on the leg matching `mint`, whichever side it sits on.
fn sum_quantity(trades: &[&ApiTrade], mint: &str) -> Decimal {
    trades.iter().filter_map(|t| t.amount_of(mint)).sum()
}

/// USD per token. Zero when no quantity was moved or the quotient
/// does not fit in a `Decimal`.
fn average_price(total_usd: Decimal, quantity: Decimal) -> Decimal {
    if quantity > Decimal::ZERO {
        total_usd.checked_div(quantity).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    }
}

fn calendar_date(epoch_ms: i64) -> NaiveDate {
    DateTime::from_timestamp_millis(epoch_ms)
        .unwrap_or_default()
        .date_naive()
}

fn display_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Group `trades` into per-token cohorts and compute realized losses.
///
/// Pure function of its input: the same trades always produce the same
/// result. Losses come back largest first; equal losses keep the order in
/// which their tokens were first seen.
pub fn aggregate_losses(trades: &[ApiTrade], refs: &ReferenceAssets) -> WalletAnalysisResult {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut cohorts: Vec<TokenCohort<'_>> = Vec::new();

    for trade in trades {
        let Some(classified) = classify(trade, refs) else {
            continue;
        };

        let slot = *index.entry(classified.mint).or_insert_with(|| {
            cohorts.push(TokenCohort {
                mint: classified.mint,
                token: classified.token,
                buys: Vec::new(),
                sells: Vec::new(),
            });
            cohorts.len() - 1
        });

        let cohort = &mut cohorts[slot];
        match classified.direction {
            TradeDirection::Buy => cohort.buys.push(trade),
            TradeDirection::Sell => cohort.sells.push(trade),
        }
    }

    let round_trips: Vec<&TokenCohort<'_>> =
        cohorts.iter().filter(|c| c.is_round_trip()).collect();

    let mut losses: Vec<TokenLoss> = round_trips
        .iter()
        .filter_map(|c| c.realized_loss())
        .collect();

    // Vec::sort_by is stable.
    losses.sort_by(|a, b| b.loss_amount.cmp(&a.loss_amount));

    WalletAnalysisResult {
        losses,
        total_transactions: trades.len(),
        processed_transactions: round_trips.len(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
