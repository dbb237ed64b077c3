//! API utilities for frontend-backend communication
//!
//! Owns the client configuration and builds the data API client every
//! screen talks through.

use super::transport::GlooTransport;
use contracts::shared::api::ApiClient;
use contracts::shared::config::{load_config, ClientConfig};
use std::sync::OnceLock;

/// `config.toml` shipped with the bundle
const BUNDLED_CONFIG: &str = include_str!("../../config.toml");

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Client configuration, parsed once on first use
pub fn client_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        load_config(Some(BUNDLED_CONFIG)).unwrap_or_else(|e| {
            log::error!("Invalid config.toml, using defaults: {}", e);
            ClientConfig::default()
        })
    })
}

/// Get the base URL for API requests
///
/// Uses `api.base_url` when configured, otherwise the current window
/// location with the configured port.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available and no base URL is configured
pub fn api_base() -> String {
    let config = client_config();
    let window = match web_sys::window() {
        Some(w) => w,
        None => return config.api.base_url.trim_end_matches('/').to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    config.api_base(&protocol, &hostname)
}

/// Data API client over the browser fetch transport
pub fn api_client() -> ApiClient<GlooTransport> {
    ApiClient::new(GlooTransport::new(api_base(), client_config().api.timeout_ms))
}
