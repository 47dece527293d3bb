//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME, DEFAULT_CORS_ORIGIN,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub cors_origin: String,
    pub admin_username: String,
    admin_password: String,
    pub admin_email: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("cors_origin", &self.cors_origin)
            .field("admin_username", &self.admin_username)
            .field("admin_password", &"[REDACTED]")
            .field("admin_email", &self.admin_email)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        if env::var("ADMIN_PASSWORD").is_err() {
            tracing::warn!("ADMIN_PASSWORD not set, seeding admin with the default password");
        }

        Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),
            admin_username: env::var("ADMIN_USERNAME")
                .unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.to_string()),
            admin_password: env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string()),
            admin_email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string()),
        }
    }

    /// Password for the seed admin account.
    pub fn admin_password(&self) -> &str {
        &self.admin_password
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
