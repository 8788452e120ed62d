use std::net::SocketAddr;

use anyhow::Context;
use axum::http::HeaderValue;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_booking_api::app;
use cinema_booking_api::booking::BookingService;
use cinema_booking_api::catalog::CatalogClient;
use cinema_booking_api::config::Config;
use cinema_booking_api::state::AppState;
use cinema_booking_api::store::BookingStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinema_booking_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let options = SqliteConnectOptions::new()
        .filename(&config.database_path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .context("failed to open the reservation database")?;

    let store = BookingStore::new(pool);
    store
        .initialize()
        .await
        .context("failed to create the booking tables")?;

    let state = AppState {
        bookings: BookingService::new(store),
        catalog: CatalogClient::new(config.tmdb_api_key.clone()),
    };

    let allowed_origin = config
        .app_url
        .parse::<HeaderValue>()
        .context("APP_URL is not a valid origin")?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state, allowed_origin)).await?;

    Ok(())
}
