use actix_web::{error::InternalError, web, HttpResponse, Result};
use serde_json::json;

use crate::routes::{balance::configure_balance_routes, token::configure_token_routes};

/// Health check endpoint
async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({"status": "ok"})))
}

/// Malformed JSON bodies are answered in the same `{"error": ...}` shape as every other failure
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        log::warn!("Rejected request body: {}", message);
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "error": message })),
        )
        .into()
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health_check))
        .configure(configure_balance_routes)
        .configure(configure_token_routes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{erc20::mock::MockTokenReader, TokenReader};
    use crate::config::Config;
    use actix_web::{http::StatusCode, test, App};
    use alloy::primitives::{address, Address, U256};
    use serde_json::Value;
    use std::sync::Arc;

    const HOLDER: Address = address!("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed");
    const HOLDER_CHECKSUMMED: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    macro_rules! init_app {
        ($mock:expr) => {{
            let reader: Arc<dyn TokenReader> = $mock.clone();
            test::init_service(
                App::new()
                    .app_data(web::Data::new(reader))
                    .app_data(web::Data::new(Arc::new(Config::default())))
                    .configure(configure_routes),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_health_check() {
        let mock = Arc::new(MockTokenReader::new(18));
        let app = init_app!(mock);

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[actix_web::test]
    async fn test_balance_rejects_invalid_address_without_remote_call() {
        let mock = Arc::new(MockTokenReader::new(18));
        let app = init_app!(mock);

        for bad in ["invalid", "0x1234", "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD"] {
            let req = test::TestRequest::get()
                .uri(&format!("/balance/{}/", bad))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "error": "Invalid Ethereum address" }));
        }

        assert_eq!(mock.call_count(), 0);
    }

    #[actix_web::test]
    async fn test_balance_scales_raw_amount() {
        let mock = Arc::new(
            MockTokenReader::new(18)
                .with_balance(HOLDER, U256::from(1_000_000_000_000_000_000u128)),
        );
        let app = init_app!(mock);

        let req = test::TestRequest::get()
            .uri(&format!("/balance/{}/", HOLDER_CHECKSUMMED))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "address": HOLDER_CHECKSUMMED, "balance": 1.0, "unit": "TBY" })
        );
    }

    #[actix_web::test]
    async fn test_balance_upstream_failure_is_503() {
        let mock = Arc::new(MockTokenReader::new(18).failing("error sending request"));
        let app = init_app!(mock);

        let req = test::TestRequest::get()
            .uri(&format!("/balance/{}/", HOLDER_CHECKSUMMED))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "error sending request" }));
    }

    #[actix_web::test]
    async fn test_batch_preserves_order_and_isolates_invalid() {
        let mock = Arc::new(
            MockTokenReader::new(18)
                .with_balance(HOLDER, U256::from(1_000_000_000_000_000_000u128)),
        );
        let app = init_app!(mock);

        let req = test::TestRequest::post()
            .uri("/balance/")
            .set_json(json!({ "addresses": ["invalid", HOLDER_CHECKSUMMED] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "balances": [
                    { "address": "invalid", "balance": null, "error": "Invalid address" },
                    { "address": HOLDER_CHECKSUMMED, "balance": 1.0 }
                ]
            })
        );
    }

    #[actix_web::test]
    async fn test_batch_requires_addresses() {
        let mock = Arc::new(MockTokenReader::new(18));
        let app = init_app!(mock);

        for payload in [json!({ "addresses": [] }), json!({})] {
            let req = test::TestRequest::post()
                .uri("/balance/")
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "error": "Addresses list is required" }));
        }

        assert_eq!(mock.call_count(), 0);
    }

    #[actix_web::test]
    async fn test_batch_rejects_malformed_body() {
        let mock = Arc::new(MockTokenReader::new(18));
        let app = init_app!(mock);

        let req = test::TestRequest::post()
            .uri("/balance/")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("error").is_some());
        assert_eq!(mock.call_count(), 0);
    }

    #[actix_web::test]
    async fn test_batch_rejects_string_instead_of_list() {
        let mock = Arc::new(MockTokenReader::new(18));
        let app = init_app!(mock);

        let req = test::TestRequest::post()
            .uri("/balance/")
            .set_json(json!({ "addresses": "0xabc" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
        assert_eq!(mock.call_count(), 0);
    }

    #[actix_web::test]
    async fn test_batch_upstream_failure_is_500() {
        let mock = Arc::new(MockTokenReader::new(18).failing("execution reverted"));
        let app = init_app!(mock);

        let req = test::TestRequest::post()
            .uri("/balance/")
            .set_json(json!({ "addresses": [HOLDER_CHECKSUMMED] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "execution reverted" }));
    }

    #[actix_web::test]
    async fn test_token_info_reports_unavailable_total_supply() {
        let mock = Arc::new(MockTokenReader::new(18));
        let app = init_app!(mock);

        let req = test::TestRequest::get().uri("/token/info/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "symbol": "TBY",
                "name": "Test Token",
                "decimals": 18,
                "total_supply": "Not available",
                "contract_address": mock.token_address.to_checksum(None),
            })
        );
    }

    #[actix_web::test]
    async fn test_token_info_with_total_supply() {
        let mock = Arc::new(
            MockTokenReader::new(6).with_total_supply(U256::from(1_234_500_000u64)),
        );
        let app = init_app!(mock);

        let req = test::TestRequest::get().uri("/token/info/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total_supply"], json!(1234.5));
        assert_eq!(body["decimals"], json!(6));
    }

    #[actix_web::test]
    async fn test_token_info_failure_is_500() {
        let mock = Arc::new(MockTokenReader::new(18).failing("node unreachable"));
        let app = init_app!(mock);

        let req = test::TestRequest::get().uri("/token/info/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "node unreachable" }));
    }
}
