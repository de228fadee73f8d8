// src/lib.rs
// DOCUMENTATION: Library root shared by the API server and the seed tool
// PURPOSE: Content and lead-capture API for a travel booking site

pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
