//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// JWT configuration.
    pub jwt: JwtSettings,
    /// Reporting and display configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// JWT settings as read from configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    /// Secret key shared with the identity provider.
    pub secret: String,
    /// Access token expiration in seconds.
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry_secs: u64,
}

fn default_access_token_expiry() -> u64 {
    900 // 15 minutes
}

/// Reporting configuration: range limits and display preferences.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Decimal places shown for growth percentages (1 or 2).
    #[serde(default = "default_percent_precision")]
    pub percent_precision: u32,
    /// Payroll-to-revenue ratio at which a period is flagged as warning.
    #[serde(default = "default_ratio_warning")]
    pub payroll_ratio_warning_percent: u32,
    /// Payroll-to-revenue ratio at which a period is flagged as critical.
    #[serde(default = "default_ratio_critical")]
    pub payroll_ratio_critical_percent: u32,
    /// Longest month range a single report may span.
    #[serde(default = "default_max_range_months")]
    pub max_range_months: u32,
    /// Thousands separator used when rendering currency.
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            percent_precision: default_percent_precision(),
            payroll_ratio_warning_percent: default_ratio_warning(),
            payroll_ratio_critical_percent: default_ratio_critical(),
            max_range_months: default_max_range_months(),
            thousands_separator: default_thousands_separator(),
        }
    }
}

fn default_percent_precision() -> u32 {
    1
}

fn default_ratio_warning() -> u32 {
    30
}

fn default_ratio_critical() -> u32 {
    40
}

fn default_max_range_months() -> u32 {
    36
}

fn default_thousands_separator() -> String {
    "'".to_string()
}

impl ReportingConfig {
    /// Returns the configured thousands separator, falling back to an apostrophe.
    #[must_use]
    pub fn thousands_separator_char(&self) -> char {
        self.thousands_separator.chars().next().unwrap_or('\'')
    }

    /// Returns the percentage precision clamped to the supported 1..=2 range.
    #[must_use]
    pub fn clamped_percent_precision(&self) -> u32 {
        self.percent_precision.clamp(1, 2)
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CHAFF").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
