// src/mcp/resources.rs
//
// Static resources. Only `greeting://{name}` exists; it never touches the node.

use serde_json::{json, Value};

pub const GREETING_SCHEME: &str = "greeting://";

pub fn greeting(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Resolves a resource URI to its text, if it names a known resource.
pub fn read_resource(uri: &str) -> Option<String> {
    uri.strip_prefix(GREETING_SCHEME)
        .filter(|name| !name.is_empty())
        .map(greeting)
}

/// Templates returned by `resources/templates/list`.
pub fn resource_templates() -> Value {
    json!([
        {
            "uriTemplate": "greeting://{name}",
            "name": "greeting",
            "description": "Get a personalized greeting",
            "mimeType": "text/plain"
        }
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_by_name() {
        assert_eq!(read_resource("greeting://Ada").as_deref(), Some("Hello, Ada!"));
    }

    #[test]
    fn unknown_or_empty_uris_are_not_found() {
        assert_eq!(read_resource("greeting://"), None);
        assert_eq!(read_resource("balance://0x00"), None);
        assert_eq!(read_resource("Ada"), None);
    }
}
