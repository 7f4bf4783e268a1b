//! # Checkout Configuration
//!
//! Where orders go, what the store is called, and how cakes are priced.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Where Settings Come From                                │
//! │                                                                         │
//! │  1. Environment (wins over everything below)                           │
//! │     DULCE_ENDPOINT_URL=https://shop.example/api/buy                    │
//! │     DULCE_STORE_NAME="Dulce Centro"                                    │
//! │     DULCE_MESSAGE_SURCHARGE=200        (cents)                         │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/dulce-storefront/checkout.toml (Linux)                   │
//! │     ~/Library/Application Support/com.dulce.storefront/checkout.toml   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://127.0.0.1:5000/api/buy, shipped price tables                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [endpoint]
//! url = "http://127.0.0.1:5000/api/buy"
//!
//! [store]
//! name = "Dulce"
//!
//! [pricing]
//! message_surcharge = 0      # cents
//!
//! [pricing.sizes]
//! "6\"" = 2000
//! "8\"" = 3000
//!
//! [pricing.flavors.Chocolate]
//! Mediano = 51000
//! ```
//!
//! A `[pricing]` section replaces the shipped tables field by field: a file
//! that only sets `message_surcharge` keeps the shipped sizes and flavors.

use dulce_core::validation::validate_amount;
use dulce_core::{Money, PriceTable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{CheckoutError, CheckoutResult};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "checkout.toml";

// =============================================================================
// Endpoint Settings
// =============================================================================

/// Where the order is POSTed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSettings {
    /// Full URL of the order endpoint.
    #[serde(default = "default_endpoint_url")]
    pub url: String,
}

fn default_endpoint_url() -> String {
    "http://127.0.0.1:5000/api/buy".to_string()
}

impl Default for EndpointSettings {
    fn default() -> Self {
        EndpointSettings {
            url: default_endpoint_url(),
        }
    }
}

// =============================================================================
// Store Settings
// =============================================================================

/// Store identity shown in the storefront header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_store_name")]
    pub name: String,
}

fn default_store_name() -> String {
    "Dulce".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
        }
    }
}

// =============================================================================
// Main Checkout Configuration
// =============================================================================

/// Complete checkout configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    #[serde(default)]
    pub endpoint: EndpointSettings,

    #[serde(default)]
    pub store: StoreSettings,

    /// Cake price tables.
    #[serde(default)]
    pub pricing: PriceTable,
}

impl CheckoutConfig {
    /// Builds the effective configuration.
    ///
    /// Built-in defaults, replaced by `checkout.toml` when the file exists,
    /// then `DULCE_*` variables, then validated.
    pub fn load(config_path: Option<PathBuf>) -> CheckoutResult<Self> {
        Self::load_with_env(config_path, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with `DULCE_*` values read through `lookup`
    /// instead of the process environment.
    pub fn load_with_env(
        config_path: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> CheckoutResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading checkout config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "No checkout config file, keeping built-in settings");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Like [`load`](Self::load), but a broken file only logs a warning.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load checkout config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Reads and parses one TOML file, without env overrides or validation.
    pub fn from_file(path: &Path) -> CheckoutResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses TOML text.
    pub fn from_toml_str(contents: &str) -> CheckoutResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Rejects a non-http(s) endpoint, a blank store name and negative prices.
    pub fn validate(&self) -> CheckoutResult<()> {
        let url = Url::parse(&self.endpoint.url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CheckoutError::InvalidUrl(format!(
                "Endpoint URL must start with http:// or https://, got: {}",
                self.endpoint.url
            )));
        }

        if self.store.name.trim().is_empty() {
            return Err(CheckoutError::InvalidConfig(
                "store.name must not be empty".into(),
            ));
        }

        for amount in self.pricing.amounts() {
            validate_amount("pricing", amount)
                .map_err(|e| CheckoutError::InvalidConfig(format!("{e} (got {amount})")))?;
        }

        Ok(())
    }

    /// The endpoint as a parsed URL.
    pub fn endpoint_url(&self) -> CheckoutResult<Url> {
        Ok(Url::parse(&self.endpoint.url)?)
    }

    /// Applies overrides from any key lookup (the process environment in
    /// production, a map in tests).
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("DULCE_ENDPOINT_URL") {
            debug!(url = %url, "Overriding endpoint URL from environment");
            self.endpoint.url = url;
        }

        if let Some(name) = lookup("DULCE_STORE_NAME") {
            self.store.name = name;
        }

        if let Some(surcharge) = lookup("DULCE_MESSAGE_SURCHARGE") {
            match surcharge.trim().parse::<i64>() {
                Ok(cents) => self.pricing.message_surcharge = Money::from_cents(cents),
                Err(_) => warn!(value = %surcharge, "Ignoring invalid DULCE_MESSAGE_SURCHARGE"),
            }
        }
    }

    /// `checkout.toml` in the platform config directory.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "dulce", "storefront")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
