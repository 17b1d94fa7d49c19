use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub auth: AuthConfig,
    pub sync: SyncConfig,
    pub logging: LoggingConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Общий пароль демо-аккаунтов
    pub password: String,
    pub session_file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SyncConfig {
    /// Имитация задержки кассовой системы, мс
    pub delay_ms: u64,
}

impl SyncConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub dir: String,
    pub filter: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    pub dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[auth]
password = "password"
session_file = "target/session.json"

[sync]
delay_ms = 2000

[logging]
dir = "logs"
filter = "info"

[export]
dir = "target/exports"
"#;

/// Встроенная конфигурация по умолчанию
pub fn embedded_default() -> anyhow::Result<Config> {
    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
///
/// Вызывается до инициализации tracing, поэтому сообщения идут в stdout.
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                println!("Loading config from: {}", config_path.display());
                return load_from_file(&config_path);
            } else {
                println!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    println!("Using default embedded configuration");
    embedded_default()
}

pub fn load_from_file(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

/// Resolves relative paths relative to the executable directory
pub fn resolve_path(raw: &str) -> PathBuf {
    let path = Path::new(raw);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_loads() {
        let config = embedded_default().unwrap();
        assert_eq!(config.auth.password, "password");
        assert_eq!(config.auth.session_file, "target/session.json");
        assert_eq!(config.sync.delay(), Duration::from_millis(2000));
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.export.dir, "target/exports");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[auth]\npassword = \"secret\"\nsession_file = \"s.json\"\n\
             [sync]\ndelay_ms = 0\n\
             [logging]\ndir = \"/tmp/logs\"\nfilter = \"debug\"\n\
             [export]\ndir = \"out\"\n"
        )
        .unwrap();
        let config = load_from_file(file.path()).unwrap();
        assert_eq!(config.auth.password, "secret");
        assert_eq!(config.sync.delay(), Duration::ZERO);
        assert_eq!(resolve_path("/tmp/logs"), PathBuf::from("/tmp/logs"));
    }
}
