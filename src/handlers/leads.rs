// src/handlers/leads.rs
// DOCUMENTATION: HTTP handlers for lead capture
// PURPOSE: Validate submissions before they reach the store

use crate::db::Store;
use crate::errors::ApiError;
use crate::models::{Inquiry, Lead, Newsletter};
use crate::services::LeadService;
use actix_web::{web, HttpResponse, Responder};
use serde::de::DeserializeOwned;

/// POST /api/inquiry and POST /api/newsletter
/// Validation errors are the only failure a client ever sees
pub async fn submit_lead<T: Lead + DeserializeOwned + 'static>(
    store: web::Data<Store>,
    req: web::Json<T>,
) -> Result<impl Responder, ApiError> {
    req.validate()?;

    let receipt = LeadService::submit(store.get_ref(), &req.into_inner()).await;
    Ok(HttpResponse::Ok().json(receipt))
}

/// Configuration for lead routes, mounted under /api
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/inquiry", web::post().to(submit_lead::<Inquiry>))
        .route("/newsletter", web::post().to(submit_lead::<Newsletter>));
}
