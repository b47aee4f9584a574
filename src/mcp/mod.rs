// MCP protocol surface: JSON-RPC envelopes, dispatcher, tools and resources
pub mod handler;
pub mod protocol;
pub mod resources;
pub mod tools;
