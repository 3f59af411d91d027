//! Privileged grant preparation endpoints
//!
//! These endpoints prepare write payloads for an external signer; nothing
//! here touches on-chain state directly.

use crate::ledger::{prepare_write, UserAddress, WriteIntent};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::current_timestamp;
use crate::utils::error::GatewayError;
use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Configure admin routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1/admin").route("/grants/initial", web::post().to(prepare_initial_grant)),
    );
}

/// Initial grant request body
#[derive(Debug, Deserialize)]
pub struct InitialGrantRequest {
    /// Recipient account address
    pub user: String,
}

/// Prepared grant payload for external signing
#[derive(Debug, Serialize)]
struct PreparedGrant {
    user: UserAddress,
    amount: u64,
    calldata: String,
    prepared_at: u64,
}

/// Prepare the one-time initial grant for a new user
///
/// Re-checks eligibility against current ledger state, encodes the grant
/// calldata, and marks the process-local guard so subsequent authorization
/// calls stop offering the grant path. Submission is the signer's job.
pub async fn prepare_initial_grant(
    state: web::Data<AppState>,
    body: web::Json<InitialGrantRequest>,
) -> ActixResult<HttpResponse, GatewayError> {
    let user: UserAddress = body
        .user
        .parse()
        .map_err(|e| GatewayError::Validation(format!("user: {}", e)))?;

    if !state.engine.initial_grant_eligible(&user).await {
        return Ok(HttpResponse::Conflict().json(ApiResponse::<()>::error(format!(
            "{} is not eligible for the initial grant",
            user
        ))));
    }

    let amount = state.engine.initial_grant_amount();
    let intent = WriteIntent::GrantInitialCredits { user, amount };
    let calldata = prepare_write(&intent);

    state.engine.grant_guard().mark(&user).await;
    info!("Prepared initial grant of {} credits for {}", amount, user);

    Ok(HttpResponse::Ok().json(ApiResponse::success(PreparedGrant {
        user,
        amount,
        calldata,
        prepared_at: current_timestamp(),
    })))
}
