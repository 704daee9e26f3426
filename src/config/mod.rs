//! Configuration loading and management

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Length limits applied to user-entered fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldLimits {
    /// Maximum length of a UPI handle (after trim)
    pub handle: usize,

    /// Maximum length of the payee/item name (after trim)
    pub name: usize,

    /// Maximum length of the free-text description
    pub description: usize,

    /// Maximum length of the payment note shown to the payer
    pub note: usize,

    /// Length budget of any sanitized text embedded in a payload
    pub sanitized: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            handle: 50,
            name: 100,
            description: 200,
            note: 100,
            sanitized: 100,
        }
    }
}

/// Static configuration of the UPI payload pipeline
///
/// Built once (from defaults or YAML) and passed by reference to every
/// validation and encoding operation. Nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpiConfig {
    /// ISO currency code, always emitted as `cu`
    pub currency: String,

    /// Scheme and host the query string is appended to
    pub scheme: String,

    /// Smallest accepted non-zero amount (inclusive)
    pub min_amount: f64,

    /// Largest accepted amount (inclusive)
    pub max_amount: f64,

    /// Field length limits
    pub limits: FieldLimits,
}

impl Default for UpiConfig {
    fn default() -> Self {
        Self {
            currency: "INR".to_string(),
            scheme: "upi://pay".to_string(),
            min_amount: 1.0,
            max_amount: 100_000.0,
            limits: FieldLimits::default(),
        }
    }
}

impl UpiConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    ///
    /// Missing keys fall back to the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    /// Reject bounds that would make every amount invalid
    pub fn check(&self) -> Result<()> {
        if !self.min_amount.is_finite() || self.min_amount <= 0.0 {
            bail!("min_amount must be a positive number (got {})", self.min_amount);
        }
        if !self.max_amount.is_finite() || self.max_amount < self.min_amount {
            bail!(
                "max_amount ({}) must be finite and not below min_amount ({})",
                self.max_amount,
                self.min_amount
            );
        }
        if self.currency.trim().is_empty() {
            bail!("currency code must not be empty");
        }
        Ok(())
    }
}
