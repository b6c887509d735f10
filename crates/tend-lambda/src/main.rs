use tracing_subscriber::EnvFilter;

use tend_lambda::config::ServiceConfig;
use tend_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServiceConfig::from_env()?;
    tracing::info!(
        time_zone = %config.time_zone_name,
        max_caseload = config.max_caseload,
        "starting tend service"
    );

    let app = tend_lambda::app(AppState::new(config));
    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
