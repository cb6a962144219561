// File: maskpii-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot masking without holding a `Masker`.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::MaskConfig;
use crate::masker::Masker;

/// Masks `content` according to `config` in a single call.
pub fn headless_mask_string(config: &MaskConfig, content: &str) -> String {
    Masker::from_config(config).process(content)
}

/// Loads a YAML config from `config_path` and masks `content` with it.
pub fn headless_mask_with_config_file<P: AsRef<Path>>(config_path: P, content: &str) -> Result<String> {
    let config_path = config_path.as_ref();
    let config = MaskConfig::load_from_file(config_path)
        .with_context(|| format!("Failed to prepare masker from {}", config_path.display()))?;
    Ok(headless_mask_string(&config, content))
}
