// src/handlers/content.rs
// DOCUMENTATION: HTTP handlers for public content listings
// PURPOSE: Parse the limit, call the content service, return JSON arrays

use crate::db::Store;
use crate::models::{Destination, Hotel, ListQuery, Listing, Package, Testimonial, TransportOption};
use crate::services::ContentService;
use actix_web::{web, HttpResponse, Responder};

/// GET /api/{kind}?limit=N
/// List records of one kind, live or fallback
pub async fn list_records<T: Listing>(
    store: web::Data<Store>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let records: Vec<T> = ContentService::list(store.get_ref(), query.limit).await;
    HttpResponse::Ok().json(records)
}

/// Configuration for content routes, mounted under /api
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/destinations", web::get().to(list_records::<Destination>))
        .route("/packages", web::get().to(list_records::<Package>))
        .route("/hotels", web::get().to(list_records::<Hotel>))
        .route("/transport", web::get().to(list_records::<TransportOption>))
        .route("/testimonials", web::get().to(list_records::<Testimonial>));
}
