// src/blockchain/mod.rs

pub mod client;
pub use client::NodeGateway;

pub mod models;
pub mod nonce_manager;
pub mod services;

pub use models::{GatewayError, GatewayResult};
