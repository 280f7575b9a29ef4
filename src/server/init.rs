/**
 * Server Initialization
 *
 * This module assembles the application: configuration, optional services
 * (database, mailer), the image host client, and the router.
 *
 * # Initialization Process
 *
 * 1. Build `AppConfig` from the environment
 * 2. Connect the database and run migrations (optional service)
 * 3. Build the image host client and the mailer
 * 4. Create the router with the assembled state
 *
 * # Error Handling
 *
 * Initialization is resilient: a missing database or a broken SMTP setup
 * disables that service and the server starts anyway. Requests that need a
 * disabled service fail individually.
 */

use axum::Router;
use std::sync::Arc;

use crate::images::host::ImageHostClient;
use crate::mailer::Mailer;
use crate::routes::router::create_router;
use crate::server::config::{load_database, AppConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application.
///
/// Returns the configured router together with the loaded configuration so
/// the caller can bind the listen port.
pub async fn create_app() -> (Router, Arc<AppConfig>) {
    tracing::info!("Initializing pixshelf backend server");

    let config = Arc::new(AppConfig::from_env());

    let db_pool = load_database(&config).await;

    let image_host = ImageHostClient::new(&config.image_host);

    let mailer = config.smtp.as_ref().and_then(|smtp| {
        match Mailer::from_config(smtp) {
            Ok(mailer) => Some(mailer),
            Err(e) => {
                tracing::error!("Failed to configure mail transport: {}", e);
                tracing::warn!("Mail transport will be disabled.");
                None
            }
        }
    });

    let app_state = AppState {
        db_pool,
        config: config.clone(),
        image_host,
        mailer,
    };

    tracing::info!("Router configured");

    (create_router(app_state), config)
}
