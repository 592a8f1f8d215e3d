//! Checks applied to identifiers and free text typed at the command line.
//!
//! Job ids become file names under `.work/jobs/`, so they are held to the
//! same rules as every other id: no path separators, no reserved names.

use anyhow::{bail, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::invoice::validate_discount;

pub const MAX_ID_LENGTH: usize = 128;

/// Longest accepted issue note, vehicle or customer reference.
pub const MAX_TEXT_LENGTH: usize = 500;

const RESERVED_NAMES: &[&str] = &[
    ".", "..", "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7",
    "com8", "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Accept alphanumerics, dashes, and underscores, up to [`MAX_ID_LENGTH`].
///
/// ```
/// use bayflow::validation::validate_id;
///
/// assert!(validate_id("JC-1f0c9a2e").is_ok());
/// assert!(validate_id("oil_change").is_ok());
/// assert!(validate_id("").is_err());
/// assert!(validate_id("../jobs").is_err());
/// ```
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        bail!("ID cannot be empty");
    }

    if id.len() > MAX_ID_LENGTH {
        bail!("ID too long: {} characters (max {MAX_ID_LENGTH})", id.len());
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        bail!("ID '{id}' contains invalid characters. Use only alphanumeric characters, dashes (-), and underscores (_)");
    }

    if RESERVED_NAMES.contains(&id.to_lowercase().as_str()) {
        bail!("ID '{id}' uses a reserved name");
    }

    Ok(())
}

/// Non-blank text no longer than [`MAX_TEXT_LENGTH`].
pub fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        bail!("Value cannot be blank");
    }
    if text.len() > MAX_TEXT_LENGTH {
        bail!(
            "Value too long: {} characters (max {MAX_TEXT_LENGTH})",
            text.len()
        );
    }
    Ok(())
}

pub fn clap_id_validator(s: &str) -> Result<String, String> {
    validate_id(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}

pub fn clap_text_validator(s: &str) -> Result<String, String> {
    validate_text(s).map_err(|e| e.to_string())?;
    Ok(s.trim().to_string())
}

/// Parse a discount percent such as `10` or `12.5`.
pub fn clap_discount_validator(s: &str) -> Result<Decimal, String> {
    let percent =
        Decimal::from_str(s.trim()).map_err(|_| format!("'{s}' is not a number"))?;
    validate_discount(percent).map_err(|e| e.to_string())
}
