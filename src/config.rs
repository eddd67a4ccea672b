use std::net::IpAddr;
use std::path::PathBuf;

pub const DEFAULT_SEARCH_PATH: &str = "/usr/local/sbin:/usr/local/bin:/usr/sbin:/usr/bin:/sbin:/bin";

const DEFAULT_INSTRUCTIONS: &str = "Read the file, follow up with the client to clarify anything unclear, then send a requirements summary.";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub storage_dir: PathBuf,
    pub form_path: PathBuf,
    pub webhook_url: Option<String>,
    pub webhook_timeout_secs: u64,
    pub notify: NotifyConfig,
    pub studio_name: String,
    pub max_body_size: usize,
    pub log_level: String,
}

/// Settings for the local system-event command.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    /// `None` disables the system event entirely.
    pub command: Option<String>,
    pub search_path: String,
    pub timeout_secs: u64,
    pub instructions: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            command: Some("openclaw".to_string()),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            timeout_secs: 5,
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            storage_dir: PathBuf::from("memory/intakes"),
            form_path: PathBuf::from("index.html"),
            webhook_url: None,
            webhook_timeout_secs: 30,
            notify: NotifyConfig::default(),
            studio_name: "Swift Studio".to_string(),
            max_body_size: 1_048_576,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Config::default();

        let host: IpAddr = env_or("INTAKER_HOST", &defaults.host.to_string())
            .parse()
            .map_err(|e| format!("Invalid INTAKER_HOST: {e}"))?;

        let port: u16 = env_or("INTAKER_PORT", &defaults.port.to_string())
            .parse()
            .map_err(|e| format!("Invalid INTAKER_PORT: {e}"))?;

        let storage_dir = std::env::var("INTAKER_STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.storage_dir);

        let form_path = std::env::var("INTAKER_FORM_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.form_path);

        let webhook_url = std::env::var("INTAKER_WEBHOOK_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|s| validate_webhook_url(s.trim()))
            .transpose()?;

        let webhook_timeout_secs: u64 = env_or("INTAKER_WEBHOOK_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|e| format!("Invalid INTAKER_WEBHOOK_TIMEOUT_SECS: {e}"))?;

        // An explicitly empty command turns the system event off.
        let command = match std::env::var("INTAKER_NOTIFY_COMMAND") {
            Ok(cmd) if cmd.trim().is_empty() => None,
            Ok(cmd) => Some(cmd),
            Err(_) => defaults.notify.command,
        };

        let notify = NotifyConfig {
            command,
            search_path: env_or("INTAKER_NOTIFY_PATH", DEFAULT_SEARCH_PATH),
            timeout_secs: env_or("INTAKER_NOTIFY_TIMEOUT_SECS", "5")
                .parse()
                .map_err(|e| format!("Invalid INTAKER_NOTIFY_TIMEOUT_SECS: {e}"))?,
            instructions: env_or("INTAKER_NOTIFY_INSTRUCTIONS", DEFAULT_INSTRUCTIONS),
        };

        let studio_name = env_or("INTAKER_STUDIO_NAME", &defaults.studio_name);

        let max_body_size: usize = env_or("INTAKER_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid INTAKER_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("INTAKER_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            storage_dir,
            form_path,
            webhook_url,
            webhook_timeout_secs,
            notify,
            studio_name,
            max_body_size,
            log_level,
        })
    }
}

fn validate_webhook_url(raw: &str) -> Result<String, String> {
    let url = reqwest::Url::parse(raw).map_err(|e| format!("Invalid INTAKER_WEBHOOK_URL: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(raw.to_string()),
        other => Err(format!("Invalid INTAKER_WEBHOOK_URL: unsupported scheme '{other}'")),
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
