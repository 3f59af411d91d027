//! HTTP server tests

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::core::authorization::AuthorizationEngine;
    use crate::core::rate_limiter::RateLimiter;
    use crate::ledger::{
        LedgerError, LedgerStateProvider, Plan, SubscriptionSnapshot, UserAddress,
    };
    use crate::server::routes;
    use crate::server::state::AppState;
    use actix_web::{test, web, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    const ALICE: &str = "0x00112233445566778899aabbccddeeff00112233";

    struct StubLedger {
        subscription: Option<SubscriptionSnapshot>,
        balance: u64,
    }

    #[async_trait]
    impl LedgerStateProvider for StubLedger {
        async fn subscription_of(
            &self,
            _user: &UserAddress,
        ) -> Result<Option<SubscriptionSnapshot>, LedgerError> {
            Ok(self.subscription.clone())
        }

        async fn credit_balance_of(&self, _user: &UserAddress) -> Result<u64, LedgerError> {
            Ok(self.balance)
        }
    }

    fn test_state(subscription: Option<SubscriptionSnapshot>, balance: u64) -> AppState {
        let config = Config::default();
        let ledger = Arc::new(StubLedger {
            subscription,
            balance,
        });
        let limiter = Arc::new(RateLimiter::new(config.rate_limit().clone()));
        let engine = AuthorizationEngine::new(ledger, limiter, config.billing()).unwrap();
        AppState::new(config, engine)
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(None, 0)))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp["success"], true);
        assert_eq!(resp["data"]["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_authorize_credits_path() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(None, 10)))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/authorize")
            .set_json(serde_json::json!({
                "user": ALICE,
                "mode": "tags",
                "quantity": 3
            }))
            .to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp["success"], true);
        assert_eq!(resp["data"]["allowed"], true);
        assert_eq!(resp["data"]["method"], "credits");
        assert_eq!(resp["data"]["cost"], 6);
    }

    #[actix_web::test]
    async fn test_authorize_rejects_bad_address() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(None, 0)))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/authorize")
            .set_json(serde_json::json!({
                "user": "not-an-address",
                "mode": "basic",
                "quantity": 1
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_authorize_rejects_unknown_mode() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(None, 0)))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/authorize")
            .set_json(serde_json::json!({
                "user": ALICE,
                "mode": "turbo",
                "quantity": 1
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_cost_quote_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(None, 0)))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/v1/cost?mode=full&quantity=4")
            .to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp["data"]["cost"], 20);
    }

    #[actix_web::test]
    async fn test_calculate_credits_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(None, 0)))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/credits/calculate")
            .set_json(serde_json::json!({
                "reason": "social_quest",
                "parameter": 8
            }))
            .to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp["data"]["amount"], 10);
    }

    #[actix_web::test]
    async fn test_initial_grant_prepare_and_exhaust() {
        let state = test_state(None, 0);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/admin/grants/initial")
            .set_json(serde_json::json!({ "user": ALICE }))
            .to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp["success"], true);
        assert_eq!(resp["data"]["amount"], 50);
        let calldata = resp["data"]["calldata"].as_str().unwrap();
        assert!(calldata.starts_with("0x"));

        // Second preparation for the same user is refused by the guard
        let req = test::TestRequest::post()
            .uri("/v1/admin/grants/initial")
            .set_json(serde_json::json!({ "user": ALICE }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_subscription_path_over_http() {
        let snapshot = SubscriptionSnapshot {
            plan_id: 1,
            start_timestamp: 1_700_000_000,
            used_this_window: 10,
            last_renewed_at: 1_700_000_000,
            plan: Plan {
                price_units: 10,
                monthly_cap: 20,
                active: true,
            },
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(Some(snapshot), 0)))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/authorize")
            .set_json(serde_json::json!({
                "user": ALICE,
                "mode": "basic",
                "quantity": 5
            }))
            .to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp["data"]["method"], "subscription");
        assert_eq!(resp["data"]["reason"], "within_subscription_cap");
        assert_eq!(resp["data"]["cost"], 0);
    }
}
