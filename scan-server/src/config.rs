//! Configuration module

use std::env;
use std::path::PathBuf;

use urlrisk_core::constants::DEFAULT_MODEL_PATH;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Trained model artifact (.onnx or .json), loaded once at start-up
    pub model_path: PathBuf,

    /// Allowed CORS origin (the web UI)
    pub cors_origin: String,

    /// Maximum URLs accepted by the batch endpoint
    pub max_batch_size: usize,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),

            model_path: env::var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH)),

            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),

            max_batch_size: env::var("MAX_BATCH_SIZE")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(100),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            cors_origin: "http://localhost:5173".to_string(),
            max_batch_size: 100,
            environment: "development".to_string(),
        }
    }
}
