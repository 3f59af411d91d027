//! Authorization and cost endpoints

use crate::core::cost::{AccrualReason, InferenceMode};
use crate::ledger::UserAddress;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use crate::utils::generate_request_id;
use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configure authorization routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1")
            .route("/authorize", web::post().to(authorize))
            .route("/cost", web::get().to(cost_quote))
            .route("/credits/calculate", web::post().to(calculate_credits)),
    );
}

/// Authorization request body
#[derive(Debug, Deserialize)]
pub struct AuthorizeRequest {
    /// User account address
    pub user: String,
    /// Inference mode name
    pub mode: String,
    /// Requested unit count
    pub quantity: i64,
}

/// Authorize one requested operation
///
/// Rate-limited requests are normal decision outcomes, returned with 200;
/// only malformed input is an error.
pub async fn authorize(
    state: web::Data<AppState>,
    body: web::Json<AuthorizeRequest>,
) -> ActixResult<HttpResponse, GatewayError> {
    let request_id = generate_request_id();

    let user: UserAddress = body
        .user
        .parse()
        .map_err(|e| GatewayError::Validation(format!("user: {}", e)))?;
    let mode: InferenceMode = body
        .mode
        .parse()
        .map_err(|e| GatewayError::Validation(format!("mode: {}", e)))?;
    let quantity = u64::try_from(body.quantity)
        .ok()
        .filter(|&q| q > 0)
        .ok_or_else(|| {
            GatewayError::Validation(format!("quantity must be positive, got {}", body.quantity))
        })?;

    let decision = state.engine.authorize(&user, mode, quantity).await?;
    debug!(
        "Decision {} for {}: {} ({})",
        request_id,
        user,
        decision.reason.as_str(),
        decision.cost
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(decision)))
}

/// Cost quote query parameters
#[derive(Debug, Deserialize)]
pub struct CostQuery {
    /// Inference mode name
    pub mode: String,
    /// Requested unit count
    pub quantity: i64,
}

/// Cost quote payload
#[derive(Debug, Serialize)]
struct CostQuote {
    mode: String,
    quantity: i64,
    cost: u64,
}

/// Quote the credit cost of an operation without authorizing it
pub async fn cost_quote(
    state: web::Data<AppState>,
    query: web::Query<CostQuery>,
) -> ActixResult<HttpResponse, GatewayError> {
    let cost = state.engine.quote(&query.mode, query.quantity)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(CostQuote {
        mode: query.mode.clone(),
        quantity: query.quantity,
        cost,
    })))
}

/// Credit calculation request body
#[derive(Debug, Deserialize)]
pub struct CalculateCreditsRequest {
    /// Accrual reason name; unknown reasons are treated as trusted custom
    /// accruals
    pub reason: String,
    /// Reason-specific parameter
    pub parameter: u64,
}

/// Credit calculation payload
#[derive(Debug, Serialize)]
struct CreditAmount {
    reason: AccrualReason,
    parameter: u64,
    amount: u64,
}

/// Compute an off-band credit accrual amount
pub async fn calculate_credits(
    state: web::Data<AppState>,
    body: web::Json<CalculateCreditsRequest>,
) -> ActixResult<HttpResponse, GatewayError> {
    let reason = AccrualReason::parse(&body.reason);
    let amount = state.engine.calculate_credits(reason, body.parameter);
    Ok(HttpResponse::Ok().json(ApiResponse::success(CreditAmount {
        reason,
        parameter: body.parameter,
        amount,
    })))
}
