pub mod analysis;
pub mod api;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod solana_tracker;

use crate::analysis::LossAnalyzer;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub analyzer: LossAnalyzer,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}
