use std::path::Path;

use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_WORKER_THREADS: usize = 4;
pub const DEFAULT_ADMIN_ADDR: &str = "127.0.0.1:9188";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            worker_threads: Some(DEFAULT_WORKER_THREADS),
        }
    }
}

/// Secondary listener exposing `/healthz` and `/metrics`.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_admin_addr")]
    pub addr: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            addr: default_admin_addr(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_admin_addr() -> String {
    DEFAULT_ADMIN_ADDR.to_string()
}

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`) when present, otherwise build the
    /// config from environment variables. A file that exists but fails to
    /// parse is an error.
    pub fn load() -> Result<Self> {
        let path = config_path();
        let mut cfg = if Path::new(&path).exists() {
            load_from_file(&path)?
        } else {
            Self::from_env()
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Defaults overridden by `SERVER_HOST`, `SERVER_PORT`,
    /// `TOKIO_WORKER_THREADS`, `ADMIN_ADDR` and `LOG_FORMAT`.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            cfg.server.worker_threads = Some(w);
        }
        if let Ok(addr) = std::env::var("ADMIN_ADDR") {
            cfg.admin.enabled = true;
            cfg.admin.addr = addr;
        }
        if let Ok(format) = std::env::var("LOG_FORMAT") {
            if format.eq_ignore_ascii_case("json") {
                cfg.logging.format = LogFormat::Json;
            }
        }
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.admin.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = DEFAULT_HOST.to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
            Some(_) => {}
        }
        Ok(())
    }
}

impl AdminConfig {
    fn validate(&self) -> Result<()> {
        if self.enabled && self.addr.trim().is_empty() {
            return Err(anyhow!("admin.addr is empty while admin.enabled = true"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() -> Result<()> {
        let cfg = parse("")?;
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 4000);
        assert!(!cfg.admin.enabled);
        assert_eq!(cfg.admin.addr, "127.0.0.1:9188");
        assert_eq!(cfg.logging.format, LogFormat::Compact);
        Ok(())
    }

    #[test]
    fn parses_all_sections() -> Result<()> {
        let cfg = parse(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8088
            worker_threads = 2

            [admin]
            enabled = true
            addr = "127.0.0.1:9999"

            [logging]
            format = "json"
            "#,
        )?;
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8088);
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert!(cfg.admin.enabled);
        assert_eq!(cfg.admin.addr, "127.0.0.1:9999");
        assert_eq!(cfg.logging.format, LogFormat::Json);
        Ok(())
    }

    #[test]
    fn zero_port_is_rejected() -> Result<()> {
        let mut cfg = parse("[server]\nport = 0\n")?;
        assert!(cfg.normalize_and_validate().is_err());
        Ok(())
    }

    #[test]
    fn blank_host_and_zero_workers_are_normalized() -> Result<()> {
        let mut cfg = parse("[server]\nhost = \"  \"\nworker_threads = 0\n")?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.server.host, DEFAULT_HOST);
        assert_eq!(cfg.server.worker_threads, Some(DEFAULT_WORKER_THREADS));
        Ok(())
    }

    #[test]
    fn enabled_admin_requires_addr() -> Result<()> {
        let mut cfg = parse("[admin]\nenabled = true\naddr = \"\"\n")?;
        assert!(cfg.normalize_and_validate().is_err());
        Ok(())
    }

    #[test]
    fn unknown_log_format_fails_to_parse() {
        assert!(parse("[logging]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn load_from_file_reads_toml() -> Result<()> {
        let tmp = std::env::temp_dir().join(format!("kvstore_config_{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&tmp, "[server]\nport = 4100\n")?;
        let cfg = load_from_file(tmp.to_str().ok_or_else(|| anyhow!("non-utf8 temp path"))?)?;
        assert_eq!(cfg.server.port, 4100);
        let _ = std::fs::remove_file(&tmp);
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("/nonexistent-kvstore-config.toml").is_err());
    }
}
