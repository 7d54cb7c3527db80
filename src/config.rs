//! Site configuration resolved at build time.
//!
//! The wasm bundle has no process environment, so values are captured with
//! `option_env!` when the crate is compiled and parsed here into typed
//! config. Every key is optional:
//!
//! - `FOLIO_EMAIL_DELIVERY`: `emailjs` (default) or `simulated`
//! - `FOLIO_EMAILJS_PUBLIC_KEY`, `FOLIO_EMAILJS_SERVICE_ID`,
//!   `FOLIO_EMAILJS_TEMPLATE_ID`: account ids, site owner's by default
//! - `FOLIO_THEME_TOGGLE`: `false`/`0` hides the theme button
//! - `FOLIO_INITIAL_SECTION`: section shown on load, `home` by default

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_EMAILJS_PUBLIC_KEY: &str = "qMxU_vXjtObDhzOUF";
pub const DEFAULT_EMAILJS_SERVICE_ID: &str = "service_rldv4wq";
pub const DEFAULT_EMAILJS_TEMPLATE_ID: &str = "template_n9kjlml";
pub const DEFAULT_INITIAL_SECTION: &str = "home";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown FOLIO_EMAIL_DELIVERY '{0}' (expected 'emailjs' or 'simulated')")]
    UnknownDelivery(String),
    #[error("unrecognized boolean '{value}' for {key}")]
    InvalidFlag { key: &'static str, value: String },
}

/// EmailJS account identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            public_key: DEFAULT_EMAILJS_PUBLIC_KEY.to_owned(),
            service_id: DEFAULT_EMAILJS_SERVICE_ID.to_owned(),
            template_id: DEFAULT_EMAILJS_TEMPLATE_ID.to_owned(),
        }
    }
}

/// How a validated contact form leaves the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    EmailJs(EmailConfig),
    /// No outbound call; every valid submission succeeds.
    Simulated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub delivery: Delivery,
    pub theme_toggle: bool,
    pub initial_section: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            delivery: Delivery::EmailJs(EmailConfig::default()),
            theme_toggle: true,
            initial_section: DEFAULT_INITIAL_SECTION.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Config baked in at compile time. A malformed value is logged and the
    /// default is used instead.
    pub fn from_build_env() -> Self {
        Self::from_vars(build_var).unwrap_or_else(|e| {
            log::warn!("site config rejected, using defaults: {e}");
            Self::default()
        })
    }

    /// Build config from a variable lookup. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown delivery mode or a malformed flag.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let delivery = match var("FOLIO_EMAIL_DELIVERY").as_deref().unwrap_or("emailjs") {
            "emailjs" => {
                let defaults = EmailConfig::default();
                Delivery::EmailJs(EmailConfig {
                    public_key: var("FOLIO_EMAILJS_PUBLIC_KEY").unwrap_or(defaults.public_key),
                    service_id: var("FOLIO_EMAILJS_SERVICE_ID").unwrap_or(defaults.service_id),
                    template_id: var("FOLIO_EMAILJS_TEMPLATE_ID").unwrap_or(defaults.template_id),
                })
            }
            "simulated" => Delivery::Simulated,
            other => return Err(ConfigError::UnknownDelivery(other.to_owned())),
        };

        let theme_toggle = match var("FOLIO_THEME_TOGGLE") {
            Some(raw) => parse_flag("FOLIO_THEME_TOGGLE", &raw)?,
            None => true,
        };
        let initial_section = var("FOLIO_INITIAL_SECTION").unwrap_or_else(|| DEFAULT_INITIAL_SECTION.to_owned());

        Ok(Self { delivery, theme_toggle, initial_section })
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { key, value: raw.to_owned() }),
    }
}

fn build_var(key: &str) -> Option<String> {
    let value = match key {
        "FOLIO_EMAIL_DELIVERY" => option_env!("FOLIO_EMAIL_DELIVERY"),
        "FOLIO_EMAILJS_PUBLIC_KEY" => option_env!("FOLIO_EMAILJS_PUBLIC_KEY"),
        "FOLIO_EMAILJS_SERVICE_ID" => option_env!("FOLIO_EMAILJS_SERVICE_ID"),
        "FOLIO_EMAILJS_TEMPLATE_ID" => option_env!("FOLIO_EMAILJS_TEMPLATE_ID"),
        "FOLIO_THEME_TOGGLE" => option_env!("FOLIO_THEME_TOGGLE"),
        "FOLIO_INITIAL_SECTION" => option_env!("FOLIO_INITIAL_SECTION"),
        _ => None,
    };
    value.map(str::to_owned)
}
