use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub endpoints: ProviderEndpoints,
    pub outbound: OutboundConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Base URLs for the supported PIX gateways.
///
/// Defaults reproduce the endpoints the service integrates against.
/// Pushin Pay and Ghostpay share one status-check host (`status_base`);
/// only the auth headers differ between the two.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderEndpoints {
    pub oasyfy_base: String,
    pub pushinpay_base: String,
    pub ghostpay_base: String,
    pub status_base: String,
}

/// Outbound HTTP behavior toward the gateways.
///
/// No timeout by default: a create/status call blocks until the gateway
/// responds or the transport errors.
#[derive(Debug, Clone, Deserialize)]
pub struct OutboundConfig {
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            endpoints: ProviderEndpoints {
                oasyfy_base: env::var("OASYFY_BASE_URL")
                    .unwrap_or_else(|_| "https://app.oasyfy.com".to_string()),
                pushinpay_base: env::var("PUSHINPAY_BASE_URL")
                    .unwrap_or_else(|_| "https://api.pushinpay.com.br".to_string()),
                ghostpay_base: env::var("GHOSTPAY_BASE_URL")
                    .unwrap_or_else(|_| "https://example.com.br".to_string()),
                status_base: env::var("PIX_STATUS_BASE_URL")
                    .unwrap_or_else(|_| "https://example.com.br".to_string()),
            },
            outbound: OutboundConfig {
                timeout_secs: match env::var("GATEWAY_TIMEOUT_SECS") {
                    Ok(raw) => Some(raw.parse().map_err(|_| {
                        AppError::Configuration("Invalid GATEWAY_TIMEOUT_SECS".to_string())
                    })?),
                    Err(_) => None,
                },
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.database.max_connections == 0 {
            return Err(AppError::Configuration(
                "Database max connections must be greater than 0".to_string(),
            ));
        }

        if self.outbound.timeout_secs == Some(0) {
            return Err(AppError::Configuration(
                "Gateway timeout must be greater than 0 when set".to_string(),
            ));
        }

        Ok(())
    }
}
