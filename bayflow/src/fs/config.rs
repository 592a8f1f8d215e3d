//! Shop configuration stored in `.work/config.toml`.
//!
//! ```toml
//! [shop]
//! name = "Bayflow Motors"
//!
//! [billing]
//! currency_symbol = "$"
//! invoice_prefix = "INV"
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every key is optional; a missing file yields the defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShopConfig {
    #[serde(default)]
    pub shop: ShopSection,
    #[serde(default)]
    pub billing: BillingSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShopSection {
    #[serde(default = "default_shop_name")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillingSection {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_invoice_prefix")]
    pub invoice_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoggingSection {
    /// `tracing` filter directive, e.g. `info` or `bayflow=debug`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

fn default_shop_name() -> String {
    "Bayflow Motors".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_invoice_prefix() -> String {
    "INV".to_string()
}

impl Default for ShopSection {
    fn default() -> Self {
        Self {
            name: default_shop_name(),
        }
    }
}

impl Default for BillingSection {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            invoice_prefix: default_invoice_prefix(),
        }
    }
}

impl ShopConfig {
    /// Load `path`, or the defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Invoice number shown for a job, e.g. `INV-JC-1f0c9a2e`.
    pub fn invoice_number(&self, job_id: &str) -> String {
        format!("{}-{job_id}", self.billing.invoice_prefix)
    }
}
