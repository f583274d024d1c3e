use base64::{engine::general_purpose, Engine as _};
use rand::Rng;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the compiled SPA (trunk `dist`)
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub login_path: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Empty means a fresh random secret on every start
    #[serde(default)]
    pub secret: String,
    pub ttl_hours: i64,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[upstream]
base_url = "http://localhost:3333"
login_path = "/login"
timeout_secs = 30

[session]
secret = ""
ttl_hours = 24
"#;

pub const ENV_UPSTREAM_URL: &str = "GATEWAY_UPSTREAM_URL";
pub const ENV_SESSION_SECRET: &str = "GATEWAY_SESSION_SECRET";

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Environment overrides are applied on top of either source.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = match config_path_next_to_exe() {
        Some(config_path) if config_path.exists() => {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            toml::from_str::<Config>(&contents)?
        }
        Some(config_path) => {
            tracing::warn!("config.toml not found at: {}", config_path.display());
            default_config()?
        }
        None => default_config()?,
    };

    config.apply_overrides(|key| std::env::var(key).ok());
    Ok(config)
}

fn default_config() -> anyhow::Result<Config> {
    tracing::info!("Using default embedded configuration");
    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

fn config_path_next_to_exe() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    exe_path.parent().map(|dir| dir.join("config.toml"))
}

impl Config {
    /// Applies `GATEWAY_*` overrides; blank values are ignored
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_UPSTREAM_URL).filter(|v| !v.trim().is_empty()) {
            self.upstream.base_url = url;
        }
        if let Some(secret) = lookup(ENV_SESSION_SECRET).filter(|v| !v.trim().is_empty()) {
            self.session.secret = secret;
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl SessionConfig {
    /// Configured secret, or a random one when none is set.
    ///
    /// A random secret invalidates every session on restart.
    pub fn resolve_secret(&self) -> String {
        if self.secret.trim().is_empty() {
            tracing::warn!("No session secret configured, generating a random one");
            generate_session_secret()
        } else {
            self.secret.clone()
        }
    }
}

/// Generate a cryptographically secure session secret (256 bits)
fn generate_session_secret() -> String {
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    fn default() -> Config {
        toml::from_str(DEFAULT_CONFIG).unwrap()
    }

    #[test]
    fn test_default_config_loads() {
        let config = default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.upstream.login_path, "/login");
        assert_eq!(config.session.ttl_hours, 24);
        assert!(config.session.secret.is_empty());
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = default();
        config.apply_overrides(|key| match key {
            ENV_UPSTREAM_URL => Some("https://api.freitasgas.com.br".to_string()),
            ENV_SESSION_SECRET => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config.upstream.base_url, "https://api.freitasgas.com.br");
        assert!(config.session.secret.is_empty());
    }

    #[test]
    fn test_random_secret_when_empty() {
        let session = default().session;
        let a = session.resolve_secret();
        let b = session.resolve_secret();
        assert_ne!(a, b);
        assert_eq!(general_purpose::STANDARD.decode(&a).unwrap().len(), 32);

        let fixed = SessionConfig { secret: "s3cr3t".into(), ttl_hours: 1 };
        assert_eq!(fixed.resolve_secret(), "s3cr3t");
    }
}
