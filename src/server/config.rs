/**
 * Server Configuration
 *
 * This module loads all environment-driven configuration into one explicit
 * `AppConfig` struct at startup. The struct is injected into handlers and
 * middleware through the application state; nothing reads the environment
 * after boot.
 *
 * # Configuration Sources
 *
 * Environment variables, with development defaults where a missing value
 * should not prevent startup:
 *
 * - `SERVER_PORT`           - listen port (default 3000)
 * - `DATABASE_URL`          - PostgreSQL connection string (optional)
 * - `JWT_SECRET`            - token signing secret
 * - `IMAGEKIT_PRIVATE_KEY`  - image host private API key
 * - `IMAGEKIT_UPLOAD_ENDPOINT` - image host upload URL (defaulted)
 * - `EMAIL` / `PASSWORD`    - SMTP credentials (optional, mail disabled
 *   when absent)
 * - `SMTP_RELAY`            - SMTP relay host (default smtp.gmail.com)
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * Optional services that cannot be configured are set to `None` and the
 * server continues without them.
 */

use sqlx::PgPool;

/// Image host section of the configuration.
#[derive(Debug, Clone)]
pub struct ImageHostConfig {
    /// Private API key, sent as basic-auth username
    pub private_key: String,
    /// Full URL of the upload endpoint
    pub upload_endpoint: String,
}

/// SMTP section of the configuration.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP relay host
    pub relay: String,
    /// Account username (also the sender address)
    pub username: String,
    /// Account password
    pub password: String,
}

/// All environment-driven configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen port
    pub server_port: u16,
    /// PostgreSQL connection string, if configured
    pub database_url: Option<String>,
    /// Token signing secret
    pub jwt_secret: String,
    /// Image host credentials and endpoint
    pub image_host: ImageHostConfig,
    /// SMTP credentials; `None` disables the mailer
    pub smtp: Option<SmtpConfig>,
}

impl AppConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Self {
        let server_port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);

        let database_url = std::env::var("DATABASE_URL").ok();
        if database_url.is_none() {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
        }

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development default");
            "dev-secret-change-in-production".to_string()
        });

        let image_host = ImageHostConfig {
            private_key: std::env::var("IMAGEKIT_PRIVATE_KEY").unwrap_or_default(),
            upload_endpoint: std::env::var("IMAGEKIT_UPLOAD_ENDPOINT").unwrap_or_else(|_| {
                "https://upload.imagekit.io/api/v1/files/upload".to_string()
            }),
        };

        let smtp = match (std::env::var("EMAIL"), std::env::var("PASSWORD")) {
            (Ok(username), Ok(password)) => Some(SmtpConfig {
                relay: std::env::var("SMTP_RELAY")
                    .unwrap_or_else(|_| "smtp.gmail.com".to_string()),
                username,
                password,
            }),
            _ => {
                tracing::warn!("EMAIL/PASSWORD not set. Mail transport will be disabled.");
                None
            }
        };

        Self {
            server_port,
            database_url,
            jwt_secret,
            image_host,
            smtp,
        }
    }
}

/// Connect to the database and run migrations.
///
/// # Returns
///
/// - `Some(PgPool)` if the database is successfully configured
/// - `None` if no URL is set or the connection fails
///
/// Errors are logged but do not prevent server startup; requests that need
/// the store fail individually instead.
pub async fn load_database(config: &AppConfig) -> Option<PgPool> {
    let database_url = config.database_url.as_ref()?;

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            // Migrations may have been applied out of band; keep serving.
            tracing::error!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}
