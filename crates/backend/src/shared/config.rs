use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the built single-page app (index.html + wasm bundle)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    /// Resend API key. Normally supplied through RESEND_API_KEY.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_from")]
    pub from: String,
    /// Comma-separated recipient list
    #[serde(default)]
    pub to: String,
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

fn default_api_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_from() -> String {
    "Website <no-reply@example.com>".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            from: default_from(),
            to: String::new(),
        }
    }
}

impl EmailConfig {
    /// Recipients parsed from the comma-separated `to` list: trimmed, empty entries dropped.
    pub fn recipients(&self) -> Vec<String> {
        parse_recipients(&self.to)
    }

    /// API key, if one is set and non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

pub fn parse_recipients(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[email]
api_url = "https://api.resend.com"
from = "Website <no-reply@example.com>"
to = ""
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Environment variables are applied on top (see [`apply_env_overrides`]).
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Override file values with PORT, STATIC_DIR, RESEND_API_KEY, RESEND_API_URL,
/// CONTACT_FROM and CONTACT_TO.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup("PORT") {
        match port.trim().parse::<u16>() {
            Ok(port) => config.server.port = port,
            Err(_) => tracing::warn!("Ignoring invalid PORT value: {:?}", port),
        }
    }
    if let Some(dir) = lookup("STATIC_DIR") {
        config.server.static_dir = dir;
    }
    if let Some(key) = lookup("RESEND_API_KEY") {
        config.email.api_key = Some(key);
    }
    if let Some(url) = lookup("RESEND_API_URL") {
        config.email.api_url = url;
    }
    if let Some(from) = lookup("CONTACT_FROM") {
        config.email.from = from;
    }
    if let Some(to) = lookup("CONTACT_TO") {
        config.email.to = to;
    }
}

/// Get the static directory from configuration.
/// Relative paths are tried next to the executable first, then against the working directory.
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    PathBuf::from(&config.server.static_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert!(config.email.api_key().is_none());
        assert!(config.email.recipients().is_empty());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.email.api_url, "https://api.resend.com");
    }

    #[test]
    fn test_parse_recipients() {
        assert_eq!(
            parse_recipients(" a@x.com, ,b@y.org ,,"),
            vec!["a@x.com".to_string(), "b@y.org".to_string()]
        );
        assert!(parse_recipients("").is_empty());
        assert!(parse_recipients(" , ").is_empty());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("PORT", "8080"),
            ("RESEND_API_KEY", "re_test"),
            ("CONTACT_TO", "sales@example.com, ops@example.com"),
            ("CONTACT_FROM", "Agency <hello@example.com>"),
        ]);
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        apply_env_overrides(&mut config, |key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.email.api_key(), Some("re_test"));
        assert_eq!(config.email.recipients().len(), 2);
        assert_eq!(config.email.from, "Agency <hello@example.com>");
    }

    #[test]
    fn test_invalid_port_is_ignored() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        apply_env_overrides(&mut config, |key| {
            (key == "PORT").then(|| "not-a-port".to_string())
        });
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_blank_api_key_is_not_configured() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        config.email.api_key = Some("   ".into());
        assert!(config.email.api_key().is_none());
    }
}
