use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub site: SiteConfig,
    pub assets: AssetsConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute origin used for canonical and hreflang URLs
    pub base_url: String,
    /// Brand appended to page titles
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub enabled: bool,
    /// Cache-Control max-age in seconds (accepts 3600, "30m", "1h", "1d")
    #[serde(deserialize_with = "deserialize_duration_secs")]
    pub max_age: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub out_dir: String,
}

impl Config {
    /// Load configuration with environment variable override support
    ///
    /// Loading order:
    /// 1. Load from config.toml file
    /// 2. Override with environment variables (prefixed with APP_)
    /// 3. Validate the final configuration
    pub fn load() -> Result<Self, anyhow::Error> {
        let mut config = if let Some(config_path) = Self::find_config_file() {
            tracing::info!("Loading configuration from {}", config_path);
            Self::from_toml(&config_path)?
        } else {
            tracing::warn!("Configuration file not found, using defaults");
            Config::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - APP_SERVER_HOST: Server host (default: 0.0.0.0)
    /// - APP_SERVER_PORT: Server port (default: 3000)
    /// - APP_LOG_LEVEL: Logging filter (e.g., "info,suatrua_site=debug")
    /// - APP_LOG_FILE: Log file path; empty disables file logging
    /// - APP_SITE_BASE_URL: Public origin (default: https://homeserviceshcm.com)
    /// - APP_SITE_NAME: Brand appended to titles
    /// - APP_ASSETS_ENABLED: Serve embedded assets (true/false)
    /// - APP_ASSETS_MAX_AGE: Asset cache lifetime (accepts "3600", "30m", "1h")
    /// - APP_EXPORT_DIR: Default output directory of `export`
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("APP_SERVER_HOST") {
            self.server.host = host;
            tracing::info!("Override server.host from env: {}", self.server.host);
        }

        if let Some(port) = lookup("APP_SERVER_PORT") {
            match port.parse() {
                Ok(val) => {
                    self.server.port = val;
                    tracing::info!("Override server.port from env: {}", self.server.port);
                },
                Err(_) => tracing::warn!(
                    "Invalid APP_SERVER_PORT '{}' (keep {})",
                    port,
                    self.server.port
                ),
            }
        }

        if let Some(level) = lookup("APP_LOG_LEVEL") {
            self.logging.level = level;
            tracing::info!("Override logging.level from env: {}", self.logging.level);
        }

        if let Some(file) = lookup("APP_LOG_FILE") {
            self.logging.file = if file.is_empty() { None } else { Some(file) };
            tracing::info!("Override logging.file from env: {:?}", self.logging.file);
        }

        if let Some(base_url) = lookup("APP_SITE_BASE_URL") {
            self.site.base_url = base_url;
            tracing::info!("Override site.base_url from env: {}", self.site.base_url);
        }

        if let Some(name) = lookup("APP_SITE_NAME") {
            self.site.name = name;
            tracing::info!("Override site.name from env: {}", self.site.name);
        }

        if let Some(enabled) = lookup("APP_ASSETS_ENABLED") {
            match enabled.parse() {
                Ok(val) => {
                    self.assets.enabled = val;
                    tracing::info!("Override assets.enabled from env: {}", self.assets.enabled);
                },
                Err(_) => tracing::warn!(
                    "Invalid APP_ASSETS_ENABLED '{}' (keep {})",
                    enabled,
                    self.assets.enabled
                ),
            }
        }

        if let Some(max_age) = lookup("APP_ASSETS_MAX_AGE") {
            match parse_duration_to_secs(&max_age) {
                Ok(val) => {
                    self.assets.max_age = val;
                    tracing::info!("Override assets.max_age from env: {}", self.assets.max_age);
                },
                Err(e) => tracing::warn!(
                    "Invalid APP_ASSETS_MAX_AGE '{}': {} (keep {})",
                    max_age,
                    e,
                    self.assets.max_age
                ),
            }
        }

        if let Some(out_dir) = lookup("APP_EXPORT_DIR") {
            self.export.out_dir = out_dir;
            tracing::info!("Override export.out_dir from env: {}", self.export.out_dir);
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }

        let base_url = &self.site.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            anyhow::bail!("site.base_url must be an absolute http(s) URL, got '{}'", base_url);
        }
        if base_url.ends_with('/') {
            anyhow::bail!("site.base_url must not end with '/', got '{}'", base_url);
        }

        if self.site.name.trim().is_empty() {
            anyhow::bail!("site.name cannot be empty");
        }

        if self.export.out_dir.is_empty() {
            anyhow::bail!("export.out_dir cannot be empty");
        }

        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, anyhow::Error> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn find_config_file() -> Option<String> {
        let possible_paths =
            ["conf/config.toml", "config.toml", "./conf/config.toml", "./config.toml"];

        for path in &possible_paths {
            if Path::new(path).exists() {
                return Some(path.to_string());
            }
        }
        None
    }

    fn from_toml(path: &str) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 3000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info,suatrua_site=debug,tower_http=info".to_string(), file: None }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://homeserviceshcm.com".to_string(),
            name: "Home Services HCM".to_string(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self { enabled: true, max_age: 3600 }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { out_dir: "build/site".to_string() }
    }
}

// =========================
// Helpers for parsing values
// =========================

fn parse_duration_to_secs(input: &str) -> Result<u64, String> {
    // Accept plain numbers (treated as seconds)
    if let Ok(val) = input.parse::<u64>() {
        return Ok(val);
    }

    let s = input.trim().to_lowercase();
    let (num_str, unit) = s.split_at(s.chars().take_while(|c| c.is_ascii_digit()).count());
    if num_str.is_empty() || unit.is_empty() {
        return Err("missing number or unit".into());
    }
    let n: u64 = num_str.parse().map_err(|_| "invalid number".to_string())?;
    let multiplier: u64 = match unit {
        "s" | "sec" | "secs" | "second" | "seconds" => 1,
        "m" | "min" | "mins" | "minute" | "minutes" => 60,
        "h" | "hr" | "hour" | "hours" => 60 * 60,
        "d" | "day" | "days" => 60 * 60 * 24,
        _ => return Err(format!("unsupported unit: {}", unit)),
    };
    n.checked_mul(multiplier).ok_or_else(|| format!("duration too large: {}", input))
}

// Accepts a plain number of seconds or a string like "30m"
fn deserialize_duration_secs<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct Visitor;
    impl<'de> serde::de::Visitor<'de> for Visitor {
        type Value = u64;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a number of seconds or a string like '30s', '5m', '1h'")
        }
        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
            Ok(v)
        }
        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            if v >= 0 { Ok(v as u64) } else { Err(E::custom("negative not allowed")) }
        }
        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            parse_duration_to_secs(v).map_err(E::custom)
        }
    }
    deserializer.deserialize_any(Visitor)
}
