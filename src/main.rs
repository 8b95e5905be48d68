use sds::analysis::{LossAnalyzer, ReferenceAssets};
use sds::api::router::create_router;
use sds::config::AppConfig;
use sds::solana_tracker::TrackerClient;
use sds::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);

    let metrics_handle = sds::metrics::init_metrics()?;

    if !config.has_tracker_auth() {
        tracing::warn!("SOLANA_TRACKER_API_KEY not set, requests will be sent without credentials");
    }

    let client = TrackerClient::with_base_url(
        reqwest::Client::new(),
        config.solana_tracker_base_url.clone(),
        config.solana_tracker_api_key.clone(),
    );
    let refs = ReferenceAssets::default().with_mints(config.extra_reference_mints.iter().cloned());
    let analyzer = LossAnalyzer::new(client).with_reference_assets(refs);

    tracing::info!(
        tracker_url = %config.solana_tracker_base_url,
        treatment_cost_usd = %config.treatment_cost_usd,
        extra_reference_mints = config.extra_reference_mints.len(),
        "Loss analyzer ready"
    );

    let state = AppState {
        config,
        analyzer,
        metrics_handle,
    };
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

/// `LOG_FORMAT=json` switches to one JSON object per line.
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().with_target(true).json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
