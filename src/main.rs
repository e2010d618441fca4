use anyhow::{Context, Result};
use axum::{extract::FromRef, Router};
use std::{net::SocketAddr, path::Path, sync::Arc};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Settings;
use crate::dataset::{Dataset, DatasetEncoding};

// Declare modules
mod aggregate;
mod charts;
mod config;
mod dataset;
mod error;
mod models;
mod routes;

// Define the application state struct. The dataset is loaded once at startup
// and shared read-only; requests never mutate it, so no locking is needed.
#[derive(Clone, FromRef)]
struct AppState {
    settings: Arc<Settings>,
    dataset: Arc<Dataset>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file first. Ignore errors (e.g., file not found)
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "autodash_rust=info,tower_http=info".into()), // Default to info if RUST_LOG not set
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Initializing AutoDash Rust server...");

    // Load configuration
    let settings = match Settings::new() {
        Ok(s) => {
            tracing::info!("Configuration loaded successfully.");
            s
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e); // Propagate the error
        }
    };
    // Wrap settings in Arc for shared ownership
    let shared_settings = Arc::new(settings);

    let encoding = DatasetEncoding::from_name(&shared_settings.dataset_encoding).with_context(
        || {
            format!(
                "Unsupported dataset encoding '{}' in configuration",
                shared_settings.dataset_encoding
            )
        },
    )?;

    // Load the dataset once. The server must not start serving without it.
    let dataset: Arc<Dataset> =
        match dataset::load(Path::new(&shared_settings.dataset_path), encoding) {
            Ok(d) => {
                tracing::info!(
                    "Loaded {} records from '{}'.",
                    d.len(),
                    shared_settings.dataset_path
                );
                Arc::new(d)
            }
            Err(e) => {
                tracing::error!("Failed to load dataset: {}", e);
                return Err(e.into());
            }
        };

    // Create the application state instance
    let app_state = AppState {
        settings: shared_settings.clone(),
        dataset,
    };

    let router: Router = routes::create_router(app_state.clone()); // Pass state to router creation

    // Combine the router with static file serving
    let app = router.nest_service("/static", ServeDir::new("static"));

    // Parse the server address from settings
    let addr: SocketAddr = match app_state.settings.server_address.parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(
                "Invalid server address format in configuration ('{}'): {}",
                app_state.settings.server_address,
                e
            );
            return Err(anyhow::anyhow!(
                "Invalid server address format: {}",
                shared_settings.server_address
            ));
        }
    };

    // Create a TCP listener
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => {
            tracing::info!("Server listening on {}", addr);
            l
        }
        Err(e) => {
            tracing::error!("Failed to bind to address {}: {}", addr, e);
            return Err(e.into()); // Convert std::io::Error to anyhow::Error
        }
    };

    // Run the server
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
