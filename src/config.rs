use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use folio_contact::SubmissionCredentials;
use serde::Deserialize;
use std::{env, path::PathBuf, time::Duration};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub emailjs: EmailJsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub output_dir: PathBuf,
    pub brand: String,
    pub owner: String,
    pub title: String,
    pub email: String,
    pub location: String,
    #[serde(default = "default_avatar")]
    pub avatar: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub resume_url: String,
}

fn default_avatar() -> String {
    "/static/developer-image.png".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailJsConfig {
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default = "default_emailjs_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_emailjs_timeout")]
    pub timeout_secs: u64,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            service_id: None,
            template_id: None,
            public_key: None,
            endpoint: default_emailjs_endpoint(),
            timeout_secs: default_emailjs_timeout(),
        }
    }
}

impl EmailJsConfig {
    pub fn credentials(&self) -> SubmissionCredentials {
        SubmissionCredentials {
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            public_key: self.public_key.clone(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_emailjs_endpoint() -> String {
    folio_contact::DEFAULT_ENDPOINT.to_string()
}

fn default_emailjs_timeout() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
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
    "pretty".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ViewportConfig {
    #[serde(default = "default_pointer_throttle_ms")]
    pub pointer_throttle_ms: u64,
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,
    #[serde(default = "default_header_elevation_offset")]
    pub header_elevation_offset: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            pointer_throttle_ms: default_pointer_throttle_ms(),
            reveal_threshold: default_reveal_threshold(),
            header_elevation_offset: default_header_elevation_offset(),
        }
    }
}

fn default_pointer_throttle_ms() -> u64 {
    100
}

fn default_reveal_threshold() -> f64 {
    folio_viewport::DEFAULT_REVEAL_THRESHOLD
}

fn default_header_elevation_offset() -> f64 {
    folio_viewport::DEFAULT_HEADER_ELEVATION
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Plain provider variables (EMAILJS_SERVICE_ID, ...)
    /// 2. Environment variables (FOLIO__SITE__OUTPUT_DIR, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("site.output_dir", "dist")?
            .set_default("site.brand", "ARS")?
            .set_default("site.owner", "Abdul Rehman Siddiqui")?
            .set_default("site.title", "Full Stack Developer")?
            .set_default("site.email", "ar.mazhar005@gmail.com")?
            .set_default("site.location", "Islamabad, Pakistan")?
            .set_default("site.github_url", "https://github.com/i23-2082")?
            .set_default(
                "site.linkedin_url",
                "https://www.linkedin.com/in/abdul-rehman-1080b2262/",
            )?
            .set_default("site.resume_url", "/static/resume.pdf")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: a missing file just means defaults + environment
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        for (var, key) in [
            ("EMAILJS_SERVICE_ID", "emailjs.service_id"),
            ("EMAILJS_TEMPLATE_ID", "emailjs.template_id"),
            ("EMAILJS_PUBLIC_KEY", "emailjs.public_key"),
        ] {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// Provider credentials are deliberately not checked here: their absence
    /// is reported by the first submission attempt.
    pub fn validate(&self) -> Result<(), String> {
        if self.site.output_dir.as_os_str().is_empty() {
            return Err("Site output_dir must not be empty".to_string());
        }
        if self.emailjs.timeout_secs == 0 {
            return Err("EmailJS timeout_secs must be greater than 0".to_string());
        }
        if url::Url::parse(&self.emailjs.endpoint).is_err() {
            return Err(format!(
                "EmailJS endpoint is not a valid URL: {}",
                self.emailjs.endpoint
            ));
        }
        if !(0.0..=1.0).contains(&self.viewport.reveal_threshold) {
            return Err("Viewport reveal_threshold must be between 0 and 1".to_string());
        }
        if self.viewport.pointer_throttle_ms == 0 {
            return Err("Viewport pointer_throttle_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}
