/**
 * Application State Management
 *
 * This module defines the application state container and the `FromRef`
 * implementations that let Axum handlers extract only the parts they need.
 *
 * # Thread Safety
 *
 * All fields are cheap to clone and thread-safe: the pool and the host
 * client hold their own internal sharing, the config is behind an `Arc`.
 * The auth core itself holds no shared mutable state.
 */

use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

use crate::images::host::ImageHostClient;
use crate::mailer::Mailer;
use crate::server::config::AppConfig;

/// Central state container cloned into every handler.
///
/// # Fields
///
/// * `db_pool` - optional PostgreSQL pool; `None` when the database is not
///   configured, in which case store-backed requests fail individually
/// * `config` - explicit configuration built once at startup
/// * `image_host` - client for the external image host upload API
/// * `mailer` - optional SMTP mailer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, if configured
    pub db_pool: Option<PgPool>,
    /// Application configuration (signing secret, credentials)
    pub config: Arc<AppConfig>,
    /// Image host upload client
    pub image_host: ImageHostClient,
    /// SMTP mailer, if configured
    pub mailer: Option<Mailer>,
}

/// Extract the optional database pool directly.
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Extract the shared configuration directly.
impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

/// Extract the image host client directly.
impl FromRef<AppState> for ImageHostClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.image_host.clone()
    }
}

/// Extract the optional mailer directly.
impl FromRef<AppState> for Option<Mailer> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.mailer.clone()
    }
}

#[cfg(test)]
impl AppState {
    /// State with no database and no mailer, for handler-level tests.
    pub fn for_tests() -> Self {
        use crate::server::config::ImageHostConfig;

        let config = AppConfig {
            server_port: 0,
            database_url: None,
            jwt_secret: "test-secret".to_string(),
            image_host: ImageHostConfig {
                private_key: "private_test_key".to_string(),
                upload_endpoint: "http://127.0.0.1:0/upload".to_string(),
            },
            smtp: None,
        };

        Self {
            db_pool: None,
            image_host: ImageHostClient::new(&config.image_host),
            config: Arc::new(config),
            mailer: None,
        }
    }
}
