// src/config.rs

use anyhow::{bail, Context, Result};
use std::env;
use url::Url;

/// Public Sepolia endpoint used when `ETHEREUM_RPC_URL` is not set.
pub const DEFAULT_RPC_URL: &str = "https://ethereum-sepolia-rpc.publicnode.com";
pub const DEFAULT_NETWORK_NAME: &str = "Sepolia Testnet";
pub const DEFAULT_PORT: u16 = 8080;

// A struct to hold all configuration, loaded once at startup from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    // Server settings
    pub port: u16,

    /// JSON-RPC endpoint of the node. Immutable for the process lifetime.
    pub rpc_url: String,
    /// Label reported by `get_testnet_info`.
    pub network_name: String,

    /// Serialize transfers per sender and track nonces locally.
    pub nonce_tracking: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rpc_url: DEFAULT_RPC_URL.to_string(),
            network_name: DEFAULT_NETWORK_NAME.to_string(),
            nonce_tracking: true,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load variables from the .env file into the environment
        dotenvy::dotenv().ok();

        let rpc_url = env::var("ETHEREUM_RPC_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_string());
        validate_rpc_url(&rpc_url)?;

        Ok(Config {
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .context("PORT must be a valid number")?,
            rpc_url,
            network_name: env::var("NETWORK_NAME")
                .unwrap_or_else(|_| DEFAULT_NETWORK_NAME.to_string()),
            nonce_tracking: match env::var("NONCE_TRACKING") {
                Ok(value) => parse_flag(&value).context("NONCE_TRACKING must be true or false")?,
                Err(_) => true,
            },
        })
    }

    /// Scheme, host and port only. Hosted endpoints often carry an API key in
    /// the path or query.
    pub fn redacted_rpc_url(&self) -> String {
        match Url::parse(&self.rpc_url) {
            Ok(url) => match (url.host_str(), url.port()) {
                (Some(host), Some(port)) => format!("{}://{}:{}", url.scheme(), host, port),
                (Some(host), None) => format!("{}://{}", url.scheme(), host),
                _ => url.scheme().to_string(),
            },
            Err(_) => "<invalid url>".to_string(),
        }
    }
}

fn validate_rpc_url(raw: &str) -> Result<()> {
    let url = Url::parse(raw).with_context(|| format!("ETHEREUM_RPC_URL is not a URL: {}", raw))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => bail!(
            "ETHEREUM_RPC_URL must use http or https, got '{}'",
            other
        ),
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognized flag value '{}'", other),
    }
}
