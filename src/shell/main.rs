use axum::{Extension, Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, fmt};

use service_contracts::shell::config::AppConfig;
use service_contracts::shell::graphql::{self, graphiql};
use service_contracts::shell::http;
use service_contracts::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    // In-memory deps for now
    let state = AppState::in_memory(&config.outbox_topic);
    let schema = graphql::schema(state.clone());

    let app = Router::new()
        .route("/gql", get(graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .merge(http::router(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.addr();
    tracing::info!(%addr, topic = %config.outbox_topic, "listening; GraphQL at /gql");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
