use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Full base URL of the data API; empty means "page host + `port`"
    pub base_url: String,
    pub port: u16,
    /// Per-request timeout; 0 disables it
    pub timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            port: 3000,
            timeout_ms: 15_000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000
timeout_ms = 15000

[log]
level = "debug"
"#;

/// Load client configuration
///
/// `contents` is the text of a bundled `config.toml`, if the build shipped
/// one; missing keys take their defaults. Without it the embedded default
/// configuration is used.
pub fn load_config(contents: Option<&str>) -> anyhow::Result<ClientConfig> {
    match contents.filter(|c| !c.trim().is_empty()) {
        Some(text) => {
            log::info!("Loading config from bundled config.toml");
            Ok(toml::from_str(text)?)
        }
        None => {
            log::info!("Using default embedded configuration");
            Ok(toml::from_str(DEFAULT_CONFIG)?)
        }
    }
}

impl ClientConfig {
    /// Configured log level; unknown names fall back to `Debug`
    pub fn log_level(&self) -> log::Level {
        match self.log.level.trim().to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" | "warning" => log::Level::Warn,
            "info" => log::Level::Info,
            "trace" => log::Level::Trace,
            _ => log::Level::Debug,
        }
    }

    /// Base URL of the data API given the page location
    ///
    /// An explicit `base_url` wins; otherwise the page protocol and host are
    /// combined with the configured port.
    pub fn api_base(&self, protocol: &str, hostname: &str) -> String {
        let explicit = self.api.base_url.trim().trim_end_matches('/');
        if !explicit.is_empty() {
            return explicit.to_string();
        }
        format!("{}//{}:{}", protocol, hostname, self.api.port)
    }
}
