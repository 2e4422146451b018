//! 应用运行配置加载。

use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    pub database_url: String,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("SMT_DATABASE_URL")
            .map_err(|_| ConfigError::Missing("SMT_DATABASE_URL".to_string()))?;
        let http_addr = env::var("SMT_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        Ok(Self {
            http_addr,
            database_url,
        })
    }
}
