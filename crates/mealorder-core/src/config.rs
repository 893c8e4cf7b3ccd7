use crate::catalog::{Catalog, Pricing, DEFAULT_CURRENCY};
use crate::error::{MealOrderError, Result};
use crate::paths;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// ContactConfig
// ---------------------------------------------------------------------------

/// Who receives the order message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_contact_name")]
    pub name: String,
    pub phone: String,
}

fn default_contact_name() -> String {
    "Kitchen".to_string()
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            name: default_contact_name(),
            phone: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub contact: ContactConfig,
    /// Menu catalog file, relative to the project root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub pricing: Pricing,
}

fn default_version() -> u32 {
    1
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            contact: ContactConfig::default(),
            catalog: None,
            currency: default_currency(),
            pricing: Pricing::default(),
        }
    }
}

impl Config {
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            contact: ContactConfig {
                phone: phone.into(),
                ..ContactConfig::default()
            },
            ..Self::default()
        }
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(MealOrderError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        if cfg.has_negative_pricing() {
            return Err(MealOrderError::InvalidConfig(
                "pricing values must not be negative".to_string(),
            ));
        }
        Ok(cfg)
    }

    fn has_negative_pricing(&self) -> bool {
        self.pricing.base_price < Decimal::ZERO || self.pricing.low_carb_extra < Decimal::ZERO
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn catalog_path(&self, root: &Path) -> Option<PathBuf> {
        self.catalog.as_deref().map(|p| paths::resolve(root, p))
    }

    /// Load the configured catalog with this config's pricing and currency.
    /// Read failures degrade to an unconstrained catalog.
    pub fn load_catalog(&self, root: &Path) -> Catalog {
        let catalog = match self.catalog_path(root) {
            Some(path) => Catalog::load_or_default(&path),
            None => Catalog::empty(),
        };
        catalog
            .with_defaults(self.pricing)
            .with_currency(self.currency.clone())
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self, root: &Path) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        let digits = self
            .contact
            .phone
            .chars()
            .filter(char::is_ascii_digit)
            .count();
        if digits == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "contact.phone is empty: orders cannot be sent".to_string(),
            });
        } else if self
            .contact
            .phone
            .chars()
            .any(|c| !(c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')')))
        {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "contact.phone '{}' contains characters that will be dropped",
                    self.contact.phone
                ),
            });
        }

        if self.has_negative_pricing() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "pricing values must not be negative".to_string(),
            });
        }

        if self.currency.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "currency symbol is empty".to_string(),
            });
        }

        if let Some(path) = self.catalog_path(root) {
            if !path.exists() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "catalog file '{}' not found: all weeks will be orderable at default prices",
                        path.display()
                    ),
                });
            } else if let Err(e) = Catalog::load(&path) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("catalog file '{}' is unreadable: {e}", path.display()),
                });
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
