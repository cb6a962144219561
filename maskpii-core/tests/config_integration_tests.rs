// maskpii-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;
use test_log::test;

use maskpii_core::config::{self, MaskConfig, PartialMaskConfig};
use maskpii_core::{headless_mask_with_config_file, MaskPiiError, Masker};

fn write_config(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    Ok(file)
}

#[test]
fn test_default_config() {
    let config = MaskConfig::default();
    assert!(!config.email);
    assert!(!config.phone);
    assert_eq!(config.mask_char, '*');
    assert!(config.is_noop());
}

#[test]
fn test_load_from_file() -> Result<()> {
    let file = write_config(
        r##"
email: true
phone: true
mask_char: "#"
"##,
    )?;
    let config = MaskConfig::load_from_file(file.path())?;
    assert!(config.email);
    assert!(config.phone);
    assert_eq!(config.mask_char, '#');

    let masker = Masker::from_config(&config);
    assert_eq!(
        masker.process("alice@example.com 090-1234-5678"),
        "a####@example.com ###-####-5678"
    );
    Ok(())
}

#[test]
fn test_load_from_file_missing_fields_use_defaults() -> Result<()> {
    let file = write_config("phone: true\n")?;
    let config = MaskConfig::load_from_file(file.path())?;
    assert!(!config.email);
    assert!(config.phone);
    assert_eq!(config.mask_char, '*');
    Ok(())
}

#[test]
fn test_nul_mask_char_is_normalized() -> Result<()> {
    let config = MaskConfig::from_yaml_str("email: true\nmask_char: \"\\0\"\n")?;
    assert_eq!(config.mask_char, '*');
    Ok(())
}

#[test]
fn test_digit_mask_char_rejected() {
    let result = MaskConfig::from_yaml_str("phone: true\nmask_char: \"7\"\n");
    assert!(matches!(result, Err(MaskPiiError::InvalidMaskChar('7'))));
}

#[test]
fn test_malformed_yaml_rejected() {
    let result = MaskConfig::from_yaml_str("email: [not, a, bool]\n");
    assert!(matches!(result, Err(MaskPiiError::ConfigParse(_))));
}

#[test]
fn test_load_from_missing_file_has_context() {
    let err = MaskConfig::load_from_file("/no/such/dir/maskpii.yaml").unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read config file"));
}

#[test]
fn test_merge_config_no_user_config() -> Result<()> {
    let merged = config::merge_config(MaskConfig::all(), None)?;
    assert_eq!(merged, MaskConfig::all());
    Ok(())
}

#[test]
fn test_merge_config_override() -> Result<()> {
    let file = write_config("phone: false\nmask_char: \"x\"\n")?;
    let user = PartialMaskConfig::load_from_file(file.path())?;
    let merged = config::merge_config(MaskConfig::all(), Some(user))?;
    assert!(merged.email);
    assert!(!merged.phone);
    assert_eq!(merged.mask_char, 'x');
    Ok(())
}

#[test]
fn test_override_file_with_digit_mask_char_rejected() -> Result<()> {
    let file = write_config("mask_char: \"7\"\n")?;
    let err = PartialMaskConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MaskPiiError>(),
        Some(MaskPiiError::InvalidMaskChar('7'))
    ));
    Ok(())
}

#[test]
fn test_merge_config_rejects_digit_mask_char() {
    let user = PartialMaskConfig {
        mask_char: Some('7'),
        ..Default::default()
    };
    let result = config::merge_config(MaskConfig::all(), Some(user));
    assert!(matches!(result, Err(MaskPiiError::InvalidMaskChar('7'))));
}

#[test]
fn test_merge_config_normalizes_nul_override() -> Result<()> {
    let user = PartialMaskConfig {
        mask_char: Some('\0'),
        ..Default::default()
    };
    let merged = config::merge_config(MaskConfig::all(), Some(user))?;
    assert_eq!(merged.mask_char, '*');
    Ok(())
}

#[test]
fn test_headless_with_config_file() -> Result<()> {
    let file = write_config("email: true\n")?;
    let masked = headless_mask_with_config_file(file.path(), "ping ab@example.com at 090-1234-5678")?;
    assert_eq!(masked, "ping a*@example.com at 090-1234-5678");
    Ok(())
}

#[test]
fn test_masker_config_roundtrip() {
    let masker = Masker::new().mask_phones().with_mask_char('X');
    let config = masker.config();
    assert_eq!(Masker::from_config(&config), masker);
}
