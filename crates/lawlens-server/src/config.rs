//! Environment-based configuration
//!
//! Every setting has a hardcoded fallback, so the server starts with no
//! environment at all (the gateway is simply degraded without an API
//! key). Malformed numeric values fall back silently to their defaults.

use lawlens_domain::DEFAULT_ALLOWED_EXTENSIONS;
use lawlens_llm::GatewayConfig;
use std::path::PathBuf;
use std::str::FromStr;

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 5000;

/// Default maximum request body size: 16 MiB
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 16 * 1024 * 1024;

/// Server configuration assembled from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host (e.g. "0.0.0.0")
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Maximum request body size in bytes
    pub max_content_length: usize,

    /// Lowercased extension allow-list
    pub allowed_extensions: Vec<String>,

    /// Scratch directory for staging PDF uploads
    pub upload_dir: PathBuf,

    /// External provider settings
    pub gateway: GatewayConfig,
}

impl ServerConfig {
    /// Assemble configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Assemble configuration from an arbitrary lookup function.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = GatewayConfig::default();

        let gateway = GatewayConfig {
            api_key: get("OPENROUTER_API_KEY").unwrap_or_default(),
            base_url: get("OPENROUTER_BASE_URL").unwrap_or(defaults.base_url),
            model: get("MODEL_NAME").unwrap_or(defaults.model),
            max_tokens: parse_or("MAX_TOKENS", &get, defaults.max_tokens),
            temperature: parse_or("TEMPERATURE", &get, defaults.temperature),
            site_url: get("SITE_URL").unwrap_or(defaults.site_url),
            site_name: get("SITE_NAME").unwrap_or(defaults.site_name),
        };

        ServerConfig {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", &get, DEFAULT_PORT),
            max_content_length: parse_or("MAX_CONTENT_LENGTH", &get, DEFAULT_MAX_CONTENT_LENGTH),
            allowed_extensions: get("ALLOWED_EXTENSIONS")
                .map(|raw| parse_extensions(&raw))
                .unwrap_or_else(default_extensions),
            upload_dir: get("UPLOAD_FOLDER")
                .map(PathBuf::from)
                .unwrap_or_else(std::env::temp_dir),
            gateway,
        }
    }

    /// Sensible configuration for tests: loopback bind, system temp
    /// scratch dir, degraded gateway.
    pub fn default_test_config() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            allowed_extensions: default_extensions(),
            upload_dir: std::env::temp_dir(),
            gateway: GatewayConfig::default(),
        }
    }

    /// Full bind address (host:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a comma-separated extension list, lowercasing and dropping
/// empty entries. An all-empty value falls back to the defaults.
pub fn parse_extensions(raw: &str) -> Vec<String> {
    let parsed: Vec<String> = raw
        .split(',')
        .map(|ext| ext.trim().to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect();

    if parsed.is_empty() {
        default_extensions()
    } else {
        parsed
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn parse_or<T: FromStr>(key: &str, get: &impl Fn(&str) -> Option<String>, default: T) -> T {
    get(key)
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = ServerConfig::from_lookup(|_| None);

        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_content_length, DEFAULT_MAX_CONTENT_LENGTH);
        assert_eq!(config.allowed_extensions, vec!["pdf", "txt", "docx"]);
        assert!(config.gateway.api_key.is_empty());
        assert_eq!(config.gateway.model, "openai/gpt-oss-20b:free");
        assert_eq!(config.gateway.max_tokens, 4000);
    }

    #[test]
    fn test_environment_overrides() {
        let vars = [
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("OPENROUTER_API_KEY", "sk-or-abc"),
            ("MODEL_NAME", "meta-llama/llama-3-8b"),
            ("MAX_TOKENS", "2048"),
            ("TEMPERATURE", "0.7"),
            ("ALLOWED_EXTENSIONS", "pdf,txt"),
        ];
        let config = ServerConfig::from_lookup(lookup(&vars));

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.gateway.api_key, "sk-or-abc");
        assert_eq!(config.gateway.model, "meta-llama/llama-3-8b");
        assert_eq!(config.gateway.max_tokens, 2048);
        assert_eq!(config.gateway.temperature, 0.7);
        assert_eq!(config.allowed_extensions, vec!["pdf", "txt"]);
    }

    #[test]
    fn test_malformed_numbers_fall_back() {
        let vars = [
            ("PORT", "not-a-port"),
            ("MAX_TOKENS", ""),
            ("TEMPERATURE", "warm"),
        ];
        let config = ServerConfig::from_lookup(lookup(&vars));

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.gateway.max_tokens, 4000);
        assert_eq!(config.gateway.temperature, 0.3);
    }

    #[test]
    fn test_parse_extensions() {
        assert_eq!(parse_extensions("pdf,txt,docx"), vec!["pdf", "txt", "docx"]);
        assert_eq!(parse_extensions(" PDF , Txt "), vec!["pdf", "txt"]);
        assert_eq!(parse_extensions("pdf,,txt"), vec!["pdf", "txt"]);
        // Nothing usable: fall back to defaults
        assert_eq!(parse_extensions(" , ,"), vec!["pdf", "txt", "docx"]);
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig::default_test_config();
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
    }
}
