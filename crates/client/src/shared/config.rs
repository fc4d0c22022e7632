use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Session values attached to every request (set at login)
#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub database: String,
    pub user: String,
}

fn default_timeout_secs() -> u64 {
    30
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:3020/api"
timeout_secs = 30

[session]
database = "catalog_dev"
user = "admin"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<ClientConfig> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: ClientConfig = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: ClientConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<ClientConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3020/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.session.user, "admin");
    }

    #[test]
    fn test_timeout_defaults_when_missing() {
        let config: ClientConfig = toml::from_str(
            r#"
[api]
base_url = "http://localhost:3020/api"

[session]
database = "catalog_dev"
user = "admin"
"#,
        )
        .unwrap();
        assert_eq!(config.api.timeout_secs, 30);
    }
}
