//! Site configuration module.
//!
//! Handles loading and validating `config.toml`, plus environment overrides
//! for the values that differ between deployments (port, mail credentials,
//! public base URL). Everything else ships with working defaults so the
//! binary runs with no config file at all.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [server]
//! bind = "0.0.0.0"          # Listen address
//! port = 5000               # Listen port (env: FOLIO_PORT)
//! assets_dir = "assets"     # Directory served under /assets/
//!
//! [site]
//! base_url = ""             # Relay base URL the form posts to
//!                           # (env: PUBLIC_BASE_URL; empty = same origin)
//!
//! [mail]
//! smtp_host = "smtp.gmail.com"
//! smtp_port = 587
//! inbox = ""                # Operator inbox; defaults to the mail username
//! username = ""             # SMTP account (env: EMAIL_USER)
//! password = ""             # SMTP app password (env: EMAIL_PASS)
//!
//! [theme]
//! accent = "#eab308"        # Accent color
//! accent_soft = "rgba(234, 179, 8, 0.2)"
//! education_per_page = 2    # Carousel cards per page
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want. Unknown
//! keys are rejected to catch typos early.
//!
//! Credentials belong in the environment, not in the file: `EMAIL_USER`
//! and `EMAIL_PASS` always win over `[mail]` values.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Public-facing site settings.
    pub site: SitePublicConfig,
    /// Outbound mail settings for the contact relay.
    pub mail: MailConfig,
    /// Visual theme settings.
    pub theme: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            site: SitePublicConfig::default(),
            mail: MailConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Listen address.
    pub bind: String,
    /// Listen port.
    pub port: u16,
    /// Directory served under `/assets/` (images, CV document).
    pub assets_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 5000,
            assets_dir: "assets".to_string(),
        }
    }
}

/// Public-facing site settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SitePublicConfig {
    /// Base URL the contact form posts to. Empty means same origin, which
    /// is right when one process serves both the page and the relay. Set
    /// it when the page is statically hosted and the relay runs elsewhere.
    pub base_url: String,
}

/// Outbound mail settings for the contact relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MailConfig {
    /// SMTP relay hostname.
    pub smtp_host: String,
    /// SMTP submission port (STARTTLS).
    pub smtp_port: u16,
    /// Operator inbox submissions are delivered to. Defaults to `username`.
    pub inbox: String,
    /// SMTP account name.
    pub username: String,
    /// SMTP password or app password.
    pub password: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            inbox: String::new(),
            username: String::new(),
            password: String::new(),
        }
    }
}

impl MailConfig {
    /// The inbox submissions are delivered to: explicit `inbox`, or the
    /// SMTP account itself when unset.
    pub fn delivery_inbox(&self) -> &str {
        if self.inbox.is_empty() {
            &self.username
        } else {
            &self.inbox
        }
    }
}

/// Visual theme settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Accent color for headings, buttons, and highlights.
    pub accent: String,
    /// Translucent accent used for badges and icon wells.
    pub accent_soft: String,
    /// Education carousel cards per page. The source site derived this
    /// from viewport width at mount; here rendering is the mount, so it
    /// is fixed per build.
    pub education_per_page: usize,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "#eab308".to_string(),
            accent_soft: "rgba(234, 179, 8, 0.2)".to_string(),
            education_per_page: 2,
        }
    }
}

impl SiteConfig {
    /// Load config from a file if it exists, apply environment overrides,
    /// and validate. A missing file is not an error — defaults apply.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let raw = fs::read_to_string(path)?;
            toml::from_str(&raw)?
        } else {
            Self::default()
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Environment overrides for deployment-specific values.
    fn apply_env(&mut self) {
        if let Some(port) = env_u16("FOLIO_PORT") {
            self.server.port = port;
        }
        if let Ok(user) = std::env::var("EMAIL_USER") {
            self.mail.username = user;
        }
        if let Ok(pass) = std::env::var("EMAIL_PASS") {
            self.mail.password = pass;
        }
        if let Ok(url) = std::env::var("PUBLIC_BASE_URL") {
            self.site.base_url = url;
        }
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme.education_per_page == 0 {
            return Err(ConfigError::Validation(
                "theme.education_per_page must be at least 1".into(),
            ));
        }
        if self.mail.smtp_host.is_empty() {
            return Err(ConfigError::Validation(
                "mail.smtp_host must not be empty".into(),
            ));
        }
        if self.site.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.base_url must not end with a slash".into(),
            ));
        }
        Ok(())
    }

    /// True when SMTP credentials are present and the relay can deliver.
    pub fn mail_ready(&self) -> bool {
        !self.mail.username.is_empty() && !self.mail.password.is_empty()
    }
}

fn env_u16(name: &str) -> Option<u16> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

/// Returns the stock config.toml content with all options documented.
pub fn stock_config_toml() -> String {
    r##"# folio configuration
# All options are optional - defaults shown below.

[server]
# Listen address and port for `folio serve`.
bind = "0.0.0.0"
port = 5000
# Directory served under /assets/ (profile photo, project images, CV).
assets_dir = "assets"

[site]
# Base URL the contact form posts to. Leave empty when one process serves
# both the page and the relay; set it when the page is hosted statically.
# Also settable via PUBLIC_BASE_URL.
base_url = ""

[mail]
# SMTP relay the contact form is forwarded through.
smtp_host = "smtp.gmail.com"
smtp_port = 587
# Inbox submissions are delivered to. Defaults to the SMTP username.
inbox = ""
# Account credentials. Prefer the EMAIL_USER / EMAIL_PASS environment
# variables over writing these here.
username = ""
password = ""

[theme]
# Accent color for headings, buttons, and highlights.
accent = "#eab308"
accent_soft = "rgba(234, 179, 8, 0.2)"
# Education carousel cards per page.
education_per_page = 2
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let parsed: SiteConfig = toml::from_str(&stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(parsed.server.port, defaults.server.port);
        assert_eq!(parsed.mail.smtp_host, defaults.mail.smtp_host);
        assert_eq!(
            parsed.theme.education_per_page,
            defaults.theme.education_per_page
        );
    }

    #[test]
    fn sparse_config_overrides_only_named_values() {
        let config: SiteConfig = toml::from_str(
            r#"
            [server]
            port = 8080
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.mail.smtp_port, 587);
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
            [server]
            prot = 8080
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn zero_cards_per_page_rejected() {
        let mut config = SiteConfig::default();
        config.theme.education_per_page = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn trailing_slash_base_url_rejected() {
        let mut config = SiteConfig::default();
        config.site.base_url = "https://relay.example.com/".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn inbox_falls_back_to_username() {
        let mut mail = MailConfig::default();
        mail.username = "me@example.com".to_string();
        assert_eq!(mail.delivery_inbox(), "me@example.com");
        mail.inbox = "inbox@example.com".to_string();
        assert_eq!(mail.delivery_inbox(), "inbox@example.com");
    }

    #[test]
    fn mail_ready_requires_both_credentials() {
        let mut config = SiteConfig::default();
        assert!(!config.mail_ready());
        config.mail.username = "me@example.com".to_string();
        assert!(!config.mail_ready());
        config.mail.password = "app-password".to_string();
        assert!(config.mail_ready());
    }
}
