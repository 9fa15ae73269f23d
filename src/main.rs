use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use fyyur::{
    config::AppConfig,
    db::connection,
    logging::init_tracing,
    middleware::{catch_panic_layer, html_error_middleware},
    routes::router,
    state::AppState,
};

#[tokio::main]
async fn main() {
    // No subscriber exists until the config is loaded.
    let cfg = match AppConfig::from_env().context("failed to load config") {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{err:?}");
            std::process::exit(1);
        }
    };
    init_tracing(&cfg.logging);

    if let Err(err) = run(cfg).await {
        tracing::error!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = connection::connect(&cfg.database).await?;
    let state = AppState::new(cfg, db);

    let app = Router::new()
        .merge(router(Arc::clone(&state)))
        .layer(middleware::from_fn(html_error_middleware))
        .layer(catch_panic_layer())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", state.config.general.host, state.config.general.port)
        .parse()
        .context("invalid host/port")?;
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
