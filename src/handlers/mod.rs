// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Route table and request extractor configuration

pub mod content;
pub mod health;
pub mod leads;

pub use content::config as content_config;
pub use health::config as health_config;
pub use leads::config as leads_config;

use crate::errors::ApiError;
use actix_cors::Cors;
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{web, HttpRequest};

/// Register every route plus the extractor error handlers
/// Expects `web::Data<Store>` and `web::Data<Config>` in app data
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error));

    health_config(cfg);

    cfg.service(
        web::scope("/api")
            .configure(content_config)
            .configure(leads_config),
    );
}

/// CORS policy: open to every origin, method and header, with credentials
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

/// Body that parses but does not fit the record shape is a validation
/// failure; anything else is malformed input
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let api_error = match &err {
        JsonPayloadError::Deserialize(e) if e.is_data() => ApiError::ValidationError(e.to_string()),
        _ => ApiError::InvalidInput(err.to_string()),
    };
    api_error.into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::InvalidInput(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::db::{MemoryStore, Store};
    use crate::models::{Destination, Hotel, LeadReceipt, Listing, Package, Testimonial, TransportOption};
    use actix_web::http::{Method, StatusCode};
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    macro_rules! app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($store))
                    .app_data(web::Data::new(Config::default()))
                    .configure(configure),
            )
            .await
        };
    }

    fn valid_inquiry() -> Value {
        json!({
            "name": "Asha",
            "email": "asha@example.com",
            "phone": "9876543210",
            "service_type": "package",
            "package_id": "kedarnath-3n4d",
            "travelers": 2
        })
    }

    #[actix_web::test]
    async fn test_cors_echoes_any_origin() {
        let app = test::init_service(
            App::new()
                .wrap(cors())
                .app_data(web::Data::new(Store::unconfigured()))
                .app_data(web::Data::new(Config::default()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/hotels")
            .insert_header(("Origin", "http://site.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("access-control-allow-origin").unwrap(),
            "http://site.example"
        );
        assert_eq!(
            resp.headers().get("access-control-allow-credentials").unwrap(),
            "true"
        );

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/inquiry")
            .insert_header(("Origin", "https://other.example"))
            .insert_header(("Access-Control-Request-Method", "POST"))
            .insert_header(("Access-Control-Request-Headers", "content-type"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get("access-control-allow-origin").unwrap(),
            "https://other.example"
        );
        assert!(resp.headers().contains_key("access-control-allow-methods"));
    }

    #[actix_web::test]
    async fn test_hotels_limit_one_without_store() {
        let app = app!(Store::unconfigured());

        let req = test::TestRequest::get().uri("/api/hotels?limit=1").to_request();
        let hotels: Vec<Hotel> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].name, "Himalayan View Inn");
    }

    #[actix_web::test]
    async fn test_every_listing_serves_fallback_without_store() {
        let app = app!(Store::unconfigured());

        let req = test::TestRequest::get().uri("/api/destinations").to_request();
        let body: Vec<Destination> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, Destination::fallback_samples());

        let req = test::TestRequest::get().uri("/api/packages").to_request();
        let body: Vec<Package> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, Package::fallback_samples());

        let req = test::TestRequest::get().uri("/api/transport?limit=5").to_request();
        let body: Vec<TransportOption> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, TransportOption::fallback_samples());

        let req = test::TestRequest::get().uri("/api/testimonials?limit=1").to_request();
        let body: Vec<Testimonial> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, Testimonial::fallback_samples()[..1].to_vec());
    }

    #[actix_web::test]
    async fn test_negative_limit_is_bad_request() {
        let app = app!(Store::unconfigured());

        let req = test::TestRequest::get().uri("/api/hotels?limit=-1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_newsletter_without_store_returns_null_id() {
        let app = app!(Store::unconfigured());

        let req = test::TestRequest::post()
            .uri("/api/newsletter")
            .set_json(json!({"email": "a@b.com"}))
            .to_request();
        let receipt: LeadReceipt = test::call_and_read_body_json(&app, req).await;

        assert_eq!(receipt, LeadReceipt::ok(None));
    }

    #[actix_web::test]
    async fn test_inquiry_persisted_with_store() {
        let backend = Arc::new(MemoryStore::new());
        let app = app!(Store::new(backend.clone()));

        let req = test::TestRequest::post()
            .uri("/api/inquiry")
            .set_json(valid_inquiry())
            .to_request();
        let receipt: LeadReceipt = test::call_and_read_body_json(&app, req).await;

        assert_eq!(receipt.status, "ok");
        assert!(receipt.id.is_some());
        assert_eq!(backend.documents("inquiry").await.len(), 1);
    }

    #[actix_web::test]
    async fn test_inquiry_ok_when_store_fails() {
        let app = app!(Store::new(Arc::new(MemoryStore::failing())));

        let req = test::TestRequest::post()
            .uri("/api/inquiry")
            .set_json(valid_inquiry())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let receipt: LeadReceipt = test::read_body_json(resp).await;
        assert_eq!(receipt, LeadReceipt::ok(None));
    }

    #[actix_web::test]
    async fn test_invalid_inquiry_never_reaches_store() {
        let backend = Arc::new(MemoryStore::new());
        let app = app!(Store::new(backend.clone()));

        let mut bad_email = valid_inquiry();
        bad_email["email"] = json!("not-an-email");
        let mut no_travelers = valid_inquiry();
        no_travelers["travelers"] = json!(0);
        let mut bad_service = valid_inquiry();
        bad_service["service_type"] = json!("cruise");

        for body in [bad_email, no_travelers, bad_service] {
            let req = test::TestRequest::post()
                .uri("/api/inquiry")
                .set_json(body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

            let error: Value = test::read_body_json(resp).await;
            assert_eq!(error["error"]["code"], "VALIDATION_ERROR");
        }

        assert!(backend.documents("inquiry").await.is_empty());
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = app!(Store::unconfigured());

        let req = test::TestRequest::post()
            .uri("/api/newsletter")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"email\":")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_root_and_diagnostics() {
        let app = app!(Store::unconfigured());

        let req = test::TestRequest::get().uri("/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Travel Platform API is running");

        let req = test::TestRequest::get().uri("/test").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["backend"], "✅ Running");
        assert_eq!(body["database_url"], "❌ Not Set");
        assert_eq!(body["connection_status"], "Not Connected");
        assert_eq!(body["collections"], json!([]));
    }

    #[actix_web::test]
    async fn test_diagnostics_lists_collections() {
        let backend = MemoryStore::new()
            .with_documents("hotel", vec![json!({"name": "x"})])
            .await;
        let app = app!(Store::new(Arc::new(backend)));

        let req = test::TestRequest::get().uri("/test").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["database"], "✅ Connected & Working");
        assert_eq!(body["collections"], json!(["hotel"]));
    }

    #[actix_web::test]
    async fn test_diagnostics_reports_store_error() {
        let app = app!(Store::new(Arc::new(MemoryStore::failing())));

        let req = test::TestRequest::get().uri("/test").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let database = body["database"].as_str().unwrap_or_default();
        assert!(database.starts_with("⚠️  Connected but Error"));
        assert_eq!(body["connection_status"], "Connected");
    }
}
