use healthbook::backend::{self, seed};
use healthbook::config::Config;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use axum::http::header;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cfg = Config::from_env()?;
    let (state, demo) = seed::demo_state();

    // Seeded sessions, ready for `healthbook session set`.
    for account in [&demo.patient, &demo.admin] {
        tracing::info!(
            role = %account.user.role,
            token = %account.token,
            user = %serde_json::to_string(&account.user)?,
            "demo session"
        );
    }
    tracing::info!(
        "demo centers: /centers/{} and /centers/{}",
        seed::DEMO_CENTER_ID,
        seed::DEMO_IDLE_CENTER_ID
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]);

    let app = backend::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    tracing::info!("Listening on http://{}", cfg.bind_addr);
    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
