use alloy::primitives::Address;
use anyhow::{anyhow, Result};
use log::{error, info, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::chain::parse_rpc_urls;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub chain: ChainConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub supports_credentials: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChainConfig {
    /// JSON-RPC endpoints, used together behind a fallback transport
    pub rpcs: Vec<String>,
    pub token_address: String,
    /// Label reported next to single-address balances
    pub unit: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8081,
                log_level: "info".to_string(),
            },
            cors: CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
                allowed_methods: vec!["GET".to_string(), "POST".to_string()],
                allowed_headers: vec!["Accept".to_string(), "Content-Type".to_string()],
                supports_credentials: false,
            },
            chain: ChainConfig {
                rpcs: vec!["https://polygon-rpc.com".to_string()],
                token_address: "0x1a9b54a3075119f1546c52ca0940551a6ce5d2d0".to_string(),
                unit: "TBY".to_string(),
            },
        }
    }
}

impl ServerConfig {
    /// Log level to run with; `cli` wins over the configured `log_level`
    pub fn level_filter(&self, cli: Option<&str>) -> LevelFilter {
        match cli.unwrap_or(self.log_level.as_str()).to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        }
    }
}

impl ChainConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        parse_rpc_urls(&self.rpcs)?;
        self.token_address()?;

        if self.unit.is_empty() {
            return Err(anyhow!("Token unit label not configured"));
        }

        Ok(())
    }

    /// Parsed token contract address
    pub fn token_address(&self) -> Result<Address> {
        self.token_address
            .parse::<Address>()
            .map_err(|e| anyhow!("Invalid token address '{}': {}", self.token_address, e))
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let path = path.as_ref();
        info!("Loading config from {}", path.display());
        match Self::load_from_file(path) {
            Ok(config) => {
                info!("Config loaded from file");
                Ok(config)
            }
            Err(e) => {
                error!("Failed to load config from file: {}", e);
                // Fall back to environment variables or defaults
                info!("Falling back to environment variables or defaults");
                Ok(Self::from_env())
            }
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn from_env() -> Self {
        let mut config = Config::default();

        // Override with environment variables if present
        if let Ok(host) = std::env::var("SERVER_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = std::env::var("SERVER_PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                config.server.port = port_num;
            }
        }

        if let Ok(log_level) = std::env::var("RUST_LOG") {
            config.server.log_level = log_level;
        }

        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            config.cors.allowed_origins =
                origins.split(',').map(|s| s.trim().to_string()).collect();
        }

        if let Ok(rpcs) = std::env::var("RPC_URLS") {
            config.chain.rpcs = rpcs
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        if let Ok(token_address) = std::env::var("TOKEN_ADDRESS") {
            config.chain.token_address = token_address;
        }

        if let Ok(unit) = std::env::var("TOKEN_UNIT") {
            config.chain.unit = unit;
        }

        config
    }
}
