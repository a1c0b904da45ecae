use dotenv::dotenv;
use steam_compare::web::{self, AppState};
use steam_compare::ProfileManager;
use std::env;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let api_key = env::var("STEAM_API_KEY")
        .map_err(|_| "STEAM_API_KEY must be set")?;
    let mut builder = ProfileManager::builder(api_key);

    if let Some(ttl) = env::var("CACHE_TTL_SECS").ok().and_then(|value| value.parse().ok()) {
        builder = builder.cache_ttl(Duration::from_secs(ttl));
    }

    let state = AppState {
        manager: Arc::new(builder.build()),
    };
    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| String::from("0.0.0.0:8080"));
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    log::info!("listening on {}", addr);

    axum::serve(listener, web::router(state)).await?;

    Ok(())
}
