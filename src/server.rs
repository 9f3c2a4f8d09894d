use crate::config::ServerConfig;
use crate::handlers;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::{Ipv4Addr, SocketAddr};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind http server on {0}")]
    BindFailed(SocketAddr, #[source] hyper::Error),
    #[error("http server failed")]
    ServeFailed(#[source] hyper::Error),
}

pub fn build_router(state: handlers::ServerContext) -> Router {
    Router::new()
        .route("/", post(handlers::graphql_handler))
        .route("/health", get(handlers::health_handler))
        .route(
            handlers::GRAPHQL_PATH,
            get(handlers::graphiql_handler).post(handlers::graphql_handler),
        )
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

pub async fn run_server(
    config: &ServerConfig,
    state: handlers::ServerContext,
    rx: tokio::sync::oneshot::Receiver<()>,
) -> Result<(), ServerError> {
    let socket = SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), config.listen_port);

    tracing::debug!("initializing http server on {}", socket);

    let router = build_router(state);
    let server = axum::Server::try_bind(&socket).map_err(|e| ServerError::BindFailed(socket, e))?;

    tracing::info!("http server start listen on {}", socket);

    server
        .serve(router.into_make_service())
        .with_graceful_shutdown(async {
            rx.await.ok();
        })
        .await
        .map_err(ServerError::ServeFailed)?;

    tracing::debug!("http server on {} has shutdown", socket);

    Ok(())
}
