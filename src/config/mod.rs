use crate::core::{AppError, Result};
use crate::modules::pricing::{TaxCalculator, DEFAULT_TAX_RATE};
use rust_decimal::Decimal;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub mod kiosk;

pub use kiosk::KioskConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub kiosk: KioskConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; unset keys take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tax_rate = match lookup("KIOSK_TAX_RATE") {
            Some(raw) => Decimal::from_str(raw.trim())
                .map_err(|_| AppError::Configuration(format!("Invalid KIOSK_TAX_RATE: {}", raw)))?,
            None => DEFAULT_TAX_RATE,
        };

        Ok(Config {
            app: AppConfig {
                env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "warn".to_string()),
            },
            kiosk: KioskConfig {
                tax_rate,
                logo_path: lookup("KIOSK_LOGO_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(kiosk::DEFAULT_LOGO_PATH)),
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        TaxCalculator::new()
            .validate_tax_rate(self.kiosk.tax_rate)
            .map_err(|err| AppError::Configuration(format!("KIOSK_TAX_RATE: {}", err)))?;

        if self.app.log_level.trim().is_empty() {
            return Err(AppError::Configuration(
                "LOG_LEVEL cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
