// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Clinic public site server.
//!
//! Serves the localized site pages and the contact-form endpoint.

use anyhow::Context;
use clinic_portal::{config::Config, i18n::Catalogs, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        port = config.port,
        default_locale = %config.locales.default_locale(),
        "Starting clinic site"
    );

    let catalogs = Catalogs::embedded(config.locales.default_locale())
        .context("Failed to load message catalogs")?;
    tracing::info!(
        locales = ?config.locales.supported(),
        "Message catalogs loaded"
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        catalogs,
    });

    // Build router
    let app = clinic_portal::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_portal=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
