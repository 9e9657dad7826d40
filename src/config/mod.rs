mod app_config;
mod s3_config;

pub use app_config::{AppConfig, CorsConfig, DatabaseConfig, ServerConfig, StorageConfig};
pub use s3_config::*;
