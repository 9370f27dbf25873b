//! Campus walking directions HTTP service.
//!
//! # Endpoints
//!
//! - `POST /api/v1/route` - Compute a route between two locations or coordinates
//! - `GET /api/v1/locations` - List locations, optionally by `category`
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//!
//! # Configuration
//!
//! - `CAMPUSNAV_SEGMENTS_PATH` / `CAMPUSNAV_LOCATIONS_PATH` - Catalog files
//!   (default: built-in campus data)
//! - `CAMPUSNAV_SPACING_M`, `CAMPUSNAV_PROXIMITY_DEG`, `CAMPUSNAV_ALGORITHM`,
//!   `CAMPUSNAV_QUANTIZE` - Routing configuration
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `SERVICE_PORT` - HTTP port (default: 8080)

use std::env;
use std::net::SocketAddr;

use tracing::{error, info};

use campusnav_service::{app, init_logging, AppState, LoggingConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env();
    init_logging(&logging_config);

    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    info!(port = port, "starting campus navigation service");

    let state = AppState::from_env().map_err(|e| {
        error!(error = %e, "failed to load application state");
        e
    })?;

    info!(
        waypoints = state.router().graph().len(),
        locations = state.locations().len(),
        algorithm = %state.router().config().algorithm,
        "application state loaded"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
