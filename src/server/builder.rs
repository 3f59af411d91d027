//! Server builder and run_server function

use crate::config::Config;
use crate::core::authorization::AuthorizationEngine;
use crate::core::rate_limiter::RateLimiter;
use crate::ledger::JsonRpcLedger;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing::info;

/// Build the shared application state from configuration
pub fn build_state(config: Config) -> Result<AppState> {
    let ledger = JsonRpcLedger::new(config.ledger())
        .map_err(|e| GatewayError::Config(format!("ledger client: {}", e)))?;

    let limiter = Arc::new(RateLimiter::new(config.rate_limit().clone()));
    limiter.clone().start_cleanup_task();

    let engine = AuthorizationEngine::new(Arc::new(ledger), limiter, config.billing())?;
    Ok(AppState::new(config, engine))
}

/// Run the server with automatic configuration loading
pub async fn run_server() -> Result<()> {
    info!("Starting metergate billing authorization gateway");

    // Auto-load configuration file
    let config_path = "config/gateway.yaml";
    let config = match Config::from_file(config_path).await {
        Ok(config) => {
            info!("Configuration loaded from {}", config_path);
            config
        }
        Err(e) => {
            info!("Configuration file unavailable ({}), using defaults", e);
            Config::default()
        }
    };

    let address = config.server().address();
    let workers = config.server().workers;
    let state = build_state(config)?;

    info!("Server starting at: http://{}", address);
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /v1/authorize - Authorization decision");
    info!("   GET  /v1/cost - Cost quote");
    info!("   POST /v1/credits/calculate - Credit accrual calculation");
    info!("   POST /v1/admin/grants/initial - Prepare initial grant");

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure_routes)
    })
    .bind(&address)
    .map_err(|e| GatewayError::Config(format!("Failed to bind {}: {}", address, e)))?;

    if let Some(workers) = workers {
        server = server.workers(workers);
    }

    server.run().await.map_err(GatewayError::Io)
}
