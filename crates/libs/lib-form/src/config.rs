//! # Validator Configuration
//!
//! Style class names, messages and the default minimum password length.
//! Every field has a default matching the stock page markup, so a page that
//! never calls [`init_config()`] gets the standard behaviour.
//!
//! ## Global Config Access
//!
//! ```rust
//! use lib_form::config::form_config;
//!
//! let config = form_config();
//! assert_eq!(config.min_password_length, 6);
//! assert_eq!(config.classes.error, "input-error");
//! ```
//!
//! A page that wants different markup initialises the config once, before any
//! validator runs:
//!
//! ```rust,no_run
//! use lib_form::config::{init_config, ValidationConfig};
//!
//! let config = ValidationConfig::from_json(r#"{ "min_password_length": 8 }"#)?;
//! init_config(config)?;
//! # Ok::<(), lib_form::FormError>(())
//! ```

use std::sync::OnceLock;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Placeholder replaced by the minimum length in `Messages::password_too_short`.
pub const MIN_PLACEHOLDER: &str = "{min}";

/// Validator configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum password length used when the caller does not pass one.
    pub min_password_length: usize,

    pub classes: StyleClasses,

    pub messages: Messages,
}

/// CSS class names toggled on page elements.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleClasses {
    /// Marks an input whose value failed validation.
    pub error: String,
    /// Hides an error slot or an icon.
    pub hidden: String,
    /// Dims a disabled submit button.
    pub dimmed: String,
    /// Shows the not-allowed cursor over a disabled submit button.
    pub not_allowed: String,
}

/// Messages shown in error slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub invalid_email: String,
    /// Template, `{min}` is replaced by the minimum length.
    pub password_too_short: String,
    pub passwords_mismatch: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            classes: StyleClasses::default(),
            messages: Messages::default(),
        }
    }
}

impl Default for StyleClasses {
    fn default() -> Self {
        Self {
            error: "input-error".to_string(),
            hidden: "hidden".to_string(),
            dimmed: "opacity-50".to_string(),
            not_allowed: "cursor-not-allowed".to_string(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            invalid_email: "Must be a valid email address".to_string(),
            password_too_short: format!("Password must be at least {MIN_PLACEHOLDER} characters"),
            passwords_mismatch: "Passwords do not match".to_string(),
        }
    }
}

impl Messages {
    /// Render the too-short message for `min` characters.
    pub fn password_too_short_for(&self, min: usize) -> String {
        self.password_too_short
            .replace(MIN_PLACEHOLDER, &min.to_string())
    }
}

impl ValidationConfig {
    /// Parse a (possibly partial) JSON configuration. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.min_password_length == 0 {
            return Err(FormError::Config(
                "min_password_length must be at least 1".to_string(),
            ));
        }

        let classes = [
            ("classes.error", &self.classes.error),
            ("classes.hidden", &self.classes.hidden),
            ("classes.dimmed", &self.classes.dimmed),
            ("classes.not_allowed", &self.classes.not_allowed),
        ];
        for (name, class) in classes {
            // DOMTokenList.add throws on empty or whitespace-containing tokens
            if class.is_empty() || class.chars().any(char::is_whitespace) {
                return Err(FormError::Config(format!(
                    "{name} must be a single non-empty class name, got '{class}'"
                )));
            }
        }

        let messages = [
            ("messages.invalid_email", &self.messages.invalid_email),
            ("messages.password_too_short", &self.messages.password_too_short),
            ("messages.passwords_mismatch", &self.messages.passwords_mismatch),
        ];
        for (name, message) in messages {
            if message.trim().is_empty() {
                return Err(FormError::Config(format!("{name} must not be empty")));
            }
        }

        Ok(())
    }
}

static CONFIG: OnceLock<ValidationConfig> = OnceLock::new();
static DEFAULT_CONFIG: Lazy<ValidationConfig> = Lazy::new(ValidationConfig::default);

/// Install the global configuration.
///
/// # Errors
///
/// Fails if the configuration is invalid or one was already installed.
pub fn init_config(config: ValidationConfig) -> Result<()> {
    config.validate()?;
    CONFIG.set(config).map_err(|_| FormError::AlreadyInitialized)?;
    log::debug!("form validation config initialized");
    Ok(())
}

/// The global configuration, or the defaults if [`init_config()`] was never called.
pub fn form_config() -> &'static ValidationConfig {
    CONFIG.get().unwrap_or_else(|| &*DEFAULT_CONFIG)
}
