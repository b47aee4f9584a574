// src/lib.rs

pub mod api;
pub mod blockchain;
pub mod config;
pub mod mcp;
pub mod utils;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: config::Config,
    /// Gateway to the configured blockchain node
    pub gateway: blockchain::NodeGateway,
}

impl AppState {
    pub fn new(config: config::Config) -> anyhow::Result<Self> {
        let gateway = blockchain::NodeGateway::new(&config)?;
        Ok(Self { config, gateway })
    }
}
