use std::sync::Arc;

use anyhow::Context;
use post_graphql_server::{
    build_schema, handlers::ServerContext, run_server, seed, MongoStore, ServerConfig,
    SharedStore,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().context("invalid configuration")?;

    let store: SharedStore = Arc::new(MongoStore::new(config.database.clone()));
    tracing::info!(
        "using collection {} in database {}",
        config.database.collection_name,
        config.database.database_name
    );

    // Startup cannot continue on a half-seeded collection.
    seed::seed(store.as_ref())
        .await
        .context("failed to seed mock data")?;

    let state = ServerContext::new(build_schema(store.clone()), store);

    let (tx, rx) = tokio::sync::oneshot::channel();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("shutdown requested");
        tx.send(()).ok();
    });

    run_server(&config, state, rx).await?;

    Ok(())
}
