// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, document store, and start HTTP server

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::io;
use std::sync::Arc;
use travel_platform_api::config::{self, Config};
use travel_platform_api::db::{PgDocumentStore, Store};
use travel_platform_api::handlers;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        return Err(io::Error::new(io::ErrorKind::InvalidInput, e));
    }

    log::info!("Starting travel platform API...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Build the document store handle, degrading to fallback-only mode
    let store = match config::init_db_pool(&config) {
        Ok(Some(pool)) => Store::new(Arc::new(PgDocumentStore::new(pool))),
        Ok(None) => Store::unconfigured(),
        Err(e) => {
            log::error!("Invalid database configuration, serving fallback data: {}", e);
            Store::unconfigured()
        }
    };

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let store_data = web::Data::new(store.clone());
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            // Application state (document store and config)
            .app_data(store_data.clone())
            .app_data(config_data.clone())
            // Middleware
            .wrap(handlers::cors())
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::configure)
    })
    .bind(&server_addr)?
    .run()
    .await?;

    // 6. Tear down the store once the server has stopped
    store.close().await;
    log::info!("Shutdown complete");

    Ok(())
}
