//! Client configuration.

use anyhow::{bail, Context, Result};
use url::Url;

/// Environment variable overriding the server URL.
pub const SERVER_URL_ENV: &str = "GOPLAYGO_SERVER_URL";

/// Default game-server WebSocket endpoint.
pub const DEFAULT_SERVER_URL: &str = "ws://localhost:3001/socket";

/// Resolve the server URL from the environment, falling back to the default.
pub fn server_url() -> Result<String> {
    let raw = std::env::var(SERVER_URL_ENV).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
    validate_server_url(&raw)
}

fn validate_server_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw).with_context(|| format!("invalid server URL: {raw}"))?;
    match url.scheme() {
        "ws" | "wss" => Ok(raw.to_string()),
        other => bail!("unsupported server URL scheme '{other}', expected ws or wss"),
    }
}
