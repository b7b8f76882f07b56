use std::sync::Arc;

use anyhow::Context;

use storefront_api::{app, config::ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = ApiConfig::from_env()?;
    let services = app::services::CatalogServices::from_config(&config)
        .with_context(|| format!("loading catalog from {}", config.catalog_path.display()))?;

    let app = app::build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        catalog = %config.catalog_path.display(),
        reload = %config.reload,
        "listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
