// src/handlers/health.rs
// DOCUMENTATION: Liveness and diagnostics handlers
// PURPOSE: Report process status, configuration presence and store reachability

use crate::config::Config;
use crate::db::Store;
use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;

/// Collection names listed by the diagnostics endpoint
const DIAGNOSTIC_COLLECTIONS: u32 = 10;

/// Longest store error message echoed back
const ERROR_PREVIEW_CHARS: usize = 80;

/// Response for GET /test
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// GET /
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Travel Platform API is running"
    }))
}

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "travel-platform-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /test
/// DOCUMENTATION: Informational only; always 200
pub async fn diagnostics(store: web::Data<Store>, config: web::Data<Config>) -> impl Responder {
    let mut response = DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: set_or_not(config.database_url.is_some()),
        database_name: set_or_not(config.database_name.is_some()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if store.is_configured() {
        response.database = "✅ Available".to_string();
        response.connection_status = "Connected".to_string();

        match store.collection_names(DIAGNOSTIC_COLLECTIONS).await {
            Ok(collections) => {
                response.collections = collections;
                response.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                log::warn!("Diagnostics could not list collections: {}", e);
                response.database = format!("⚠️  Connected but Error: {}", preview(&e.to_string()));
            }
        }
    } else {
        response.database = "⚠️  Available but not initialized".to_string();
    }

    HttpResponse::Ok().json(response)
}

fn set_or_not(present: bool) -> String {
    if present { "✅ Set" } else { "❌ Not Set" }.to_string()
}

fn preview(message: &str) -> String {
    message.chars().take(ERROR_PREVIEW_CHARS).collect()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/test", web::get().to(diagnostics))
        .route("/health", web::get().to(health_check));
}
