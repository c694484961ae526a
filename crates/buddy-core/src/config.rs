use std::{fs, path::Path, time::Duration};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

pub const MAIN_CONFIG_FILE: &str = "main.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_app_env")]
    pub env: String,
}

fn default_app_name() -> String {
    "buddy".to_string()
}

fn default_app_env() -> String {
    "dev".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            env: default_app_env(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Empty means any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            allowed_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Relative paths are resolved against the config root by the caller.
    /// `:memory:` opens a throwaway database.
    #[serde(default = "default_database_path")]
    pub path: String,
}

fn default_database_path() -> String {
    "data/buddy.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_store_timeout_ms")]
    pub store_timeout_ms: u64,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_store_timeout_ms() -> u64 {
    2000
}

fn default_history_limit() -> usize {
    50
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            store_timeout_ms: default_store_timeout_ms(),
            history_limit: default_history_limit(),
        }
    }
}

impl EngineConfig {
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_seed_on_startup")]
    pub on_startup: bool,
    #[serde(default)]
    pub force: bool,
}

fn default_seed_on_startup() -> bool {
    true
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            on_startup: default_seed_on_startup(),
            force: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuddyConfig {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Expand `${VAR}` placeholders from the environment. Unset variables expand
/// to the empty string; an unclosed `${` is kept verbatim.
pub fn resolve_env_var(raw: &str) -> String {
    let mut output = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                output.push_str(&std::env::var(&after[..end]).unwrap_or_default());
                rest = &after[end + 1..];
            }
            None => {
                output.push_str(&rest[start..]);
                return output;
            }
        }
    }

    output.push_str(rest);
    output
}

/// Load `main.yaml` from `dir`. A missing file yields the defaults.
pub fn load_config(dir: &Path) -> Result<BuddyConfig> {
    let path = dir.join(MAIN_CONFIG_FILE);
    let mut config = if path.exists() {
        read_yaml_file::<BuddyConfig>(&path)?
    } else {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        BuddyConfig::default()
    };

    resolve_config_env(&mut config);
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &BuddyConfig) -> Result<()> {
    if config.server.bind.trim().is_empty() {
        return Err(anyhow!("server.bind must not be empty"));
    }
    if config.database.path.trim().is_empty() {
        return Err(anyhow!("database.path must not be empty"));
    }
    if config.engine.store_timeout_ms == 0 {
        return Err(anyhow!("engine.store_timeout_ms must be greater than 0"));
    }
    if config.engine.history_limit == 0 {
        return Err(anyhow!("engine.history_limit must be greater than 0"));
    }
    Ok(())
}

fn resolve_config_env(config: &mut BuddyConfig) {
    config.app.name = resolve_env_var(&config.app.name);
    config.app.env = resolve_env_var(&config.app.env);
    config.server.bind = resolve_env_var(&config.server.bind);
    for origin in &mut config.server.allowed_origins {
        *origin = resolve_env_var(origin);
    }
    config.database.path = resolve_env_var(&config.database.path);
}

fn read_yaml_file<T>(path: &Path) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse yaml file: {}", path.display()))
}
