use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub listings: ListingsSettings,
    #[serde(default)]
    pub supabase: SupabaseSettings,
    #[serde(default)]
    pub mailgun: MailgunSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingsSettings {
    #[serde(default = "default_contractors_url")]
    pub contractors_url: String,
}

impl Default for ListingsSettings {
    fn default() -> Self {
        Self {
            contractors_url: default_contractors_url(),
        }
    }
}

fn default_contractors_url() -> String {
    "https://nemohomepros.com/contractors.json".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseSettings {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_bucket")]
    pub bucket: String,
}

impl Default for SupabaseSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            bucket: default_bucket(),
        }
    }
}

fn default_bucket() -> String {
    "contractor-images".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailgunSettings {
    #[serde(default = "default_mailgun_api_base")]
    pub api_base: String,
    pub api_key: Option<String>,
    pub domain: Option<String>,
    pub notification_email: Option<String>,
}

impl Default for MailgunSettings {
    fn default() -> Self {
        Self {
            api_base: default_mailgun_api_base(),
            api_key: None,
            domain: None,
            notification_email: None,
        }
    }
}

fn default_mailgun_api_base() -> String {
    "https://api.mailgun.net/v3".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with NEMO__)
    /// 4. Deployment environment variables (SUPABASE_URL, MAILGUN_API_KEY, ...)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local development overrides
            .add_source(File::with_name("config/local").required(false))
            // e.g. NEMO__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("NEMO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_deployment_env(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("NEMO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Fold in the deployment environment variables the hosting platform
/// provides under their conventional names.
fn apply_deployment_env(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(url) = env::var("SUPABASE_URL") {
        builder = builder.set_override("supabase.url", url)?;
    }
    if let Ok(api_key) = env::var("SUPABASE_SERVICE_KEY") {
        builder = builder.set_override("supabase.api_key", api_key)?;
    }
    if let Ok(api_key) = env::var("MAILGUN_API_KEY") {
        builder = builder.set_override("mailgun.api_key", api_key)?;
    }
    if let Ok(domain) = env::var("MAILGUN_DOMAIN") {
        builder = builder.set_override("mailgun.domain", domain)?;
    }
    if let Ok(recipient) = env::var("NOTIFICATION_EMAIL") {
        builder = builder.set_override("mailgun.notification_email", recipient)?;
    }

    builder.build()
}
