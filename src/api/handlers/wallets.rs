use axum::extract::{Path, Query, State};
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analysis::{build_entries, LossEntry, LossOrder};
use crate::errors::AppError;
use crate::models::LossSummary;
use crate::AppState;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LossQuery {
    #[serde(default)]
    pub sort: LossOrder,
    pub min_loss: Option<Decimal>,
}

#[derive(Serialize)]
pub struct WalletLossReport {
    pub wallet: String,
    pub losses: Vec<LossEntry>,
    pub total_transactions: usize,
    pub processed_transactions: usize,
    /// Always covers every loss, whatever `min_loss` hid from `losses`.
    pub summary: LossSummary,
}

/// GET /api/wallets/:address/losses?sort=amount|date|percentage&min_loss=1000
pub async fn losses(
    State(state): State<AppState>,
    Path(address): Path<String>,
    Query(query): Query<LossQuery>,
) -> Result<Json<ApiResponse<WalletLossReport>>, AppError> {
    let result = state.analyzer.analyze_wallet(&address).await?;
    let cost = state.config.treatment_cost_usd;
    let summary = LossSummary::new(&result, cost);

    Ok(Json(ApiResponse {
        success: true,
        data: Some(WalletLossReport {
            wallet: address.trim().to_string(),
            losses: build_entries(result.losses, query.sort, query.min_loss, cost),
            total_transactions: result.total_transactions,
            processed_transactions: result.processed_transactions,
            summary,
        }),
        error: None,
    }))
}
