//! Configuration management for `maskpii-core`.
//!
//! A `MaskConfig` says which detectors run and which character replaces
//! masked bytes. Configs can be built in code, parsed from YAML, or loaded
//! from a file and merged over a default.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::MaskPiiError;
use maskpii_scan::DEFAULT_MASK_CHAR;

/// Which detectors are enabled and how masked bytes are rendered.
///
/// ```yaml
/// email: true
/// phone: true
/// mask_char: "#"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct MaskConfig {
    /// Mask the local part of email addresses.
    pub email: bool,
    /// Mask all but the last four digits of phone numbers.
    pub phone: bool,
    /// Replacement character. NUL is treated as the default `'*'`.
    pub mask_char: char,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            email: false,
            phone: false,
            mask_char: DEFAULT_MASK_CHAR,
        }
    }
}

/// A config file layered over a base config. Absent fields keep the base value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PartialMaskConfig {
    pub email: Option<bool>,
    pub phone: Option<bool>,
    pub mask_char: Option<char>,
}

impl MaskConfig {
    /// Both detectors enabled, default mask character.
    pub fn all() -> Self {
        Self {
            email: true,
            phone: true,
            mask_char: DEFAULT_MASK_CHAR,
        }
    }

    pub fn is_noop(&self) -> bool {
        !self.email && !self.phone
    }

    /// Returns a copy with the NUL mask character replaced by the default.
    pub fn normalized(mut self) -> Self {
        if self.mask_char == '\0' {
            warn!("NUL mask character configured; falling back to '{}'.", DEFAULT_MASK_CHAR);
            self.mask_char = DEFAULT_MASK_CHAR;
        }
        self
    }

    /// Rejects configurations that would make detectors interfere with each other.
    pub fn validate(&self) -> Result<(), MaskPiiError> {
        if self.mask_char.is_ascii_digit() {
            return Err(MaskPiiError::InvalidMaskChar(self.mask_char));
        }
        Ok(())
    }

    /// Parses a YAML document into a normalized, validated config.
    pub fn from_yaml_str(text: &str) -> Result<Self, MaskPiiError> {
        let config: MaskConfig =
            serde_yml::from_str(text).map_err(|e| MaskPiiError::ConfigParse(e.to_string()))?;
        let config = config.normalized();
        config.validate()?;
        debug!("Parsed mask config: {:?}", config);
        Ok(config)
    }

    /// Loads a config from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading mask config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        info!(
            "Loaded mask config from {} (email: {}, phone: {}).",
            path.display(),
            config.email,
            config.phone
        );
        Ok(config)
    }
}

impl PartialMaskConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, MaskPiiError> {
        let partial: PartialMaskConfig =
            serde_yml::from_str(text).map_err(|e| MaskPiiError::ConfigParse(e.to_string()))?;
        if let Some(mask_char) = partial.mask_char.filter(char::is_ascii_digit) {
            return Err(MaskPiiError::InvalidMaskChar(mask_char));
        }
        Ok(partial)
    }

    /// Loads a partial config (an override file) from YAML.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading mask config overrides from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let partial = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(partial)
    }
}

/// Merges user overrides into a default config, field by field.
///
/// The merged config is normalized and validated, so overrides built in code
/// are held to the same rules as loaded files.
pub fn merge_config(
    default_config: MaskConfig,
    user_config: Option<PartialMaskConfig>,
) -> Result<MaskConfig, MaskPiiError> {
    let mut merged = default_config;

    if let Some(user) = user_config {
        if let Some(email) = user.email {
            debug!("Overriding email masking with user value: {}", email);
            merged.email = email;
        }
        if let Some(phone) = user.phone {
            debug!("Overriding phone masking with user value: {}", phone);
            merged.phone = phone;
        }
        if let Some(mask_char) = user.mask_char {
            debug!("Overriding mask character with user value: {:?}", mask_char);
            merged.mask_char = mask_char;
        }
    }

    let merged = merged.normalized();
    merged.validate()?;
    Ok(merged)
}
