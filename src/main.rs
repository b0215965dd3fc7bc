use actix_web::{middleware::from_fn, web, App, HttpServer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;
mod domain;
mod metrics;
mod state;

use config::Config;
use state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging, overridable with RUST_LOG
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,event_booking=debug")),
        )
        .init();

    let config = Config::from_env()?;

    // === 1. Seed the in-memory stores ===
    let metrics = metrics::Metrics::new()?;
    let state = web::Data::new(AppState::seeded(metrics));
    state.refresh_record_gauges().await;

    tracing::info!(
        events = state.events.len().await,
        bookings = state.bookings.len().await,
        "Stores seeded"
    );

    // === 2. Serve the API ===
    let app_state = state.clone();
    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(from_fn(api::track_requests))
            .configure(api::configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let server = server.bind((config.host.as_str(), config.port))?;

    tracing::info!(
        "🚀 Event Booking API running on http://{}:{}",
        config.host,
        config.port
    );

    server.run().await?;

    tracing::info!("Server stopped");
    Ok(())
}
