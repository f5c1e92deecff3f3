//! Shop configuration as seen by the browser build.
//!
//! The configuration ships inside the bundle (`static/config/shop.json`) so the
//! booking page works without a network round trip.

use std::rc::Rc;
use thiserror::Error;
use ziller_core::{ConfigError, ConfigSource, EligibilityEngine, ShopConfig};

const SHOP_JSON: &str = include_str!("../static/config/shop.json");

#[derive(Debug, Error)]
pub enum WebConfigError {
    #[error("bundled shop configuration is invalid: {0}")]
    Invalid(#[from] ConfigError),
}

/// Reads the configuration embedded at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledConfig;

impl ConfigSource for BundledConfig {
    type Error = WebConfigError;

    fn load_shop_config(&self) -> Result<ShopConfig, Self::Error> {
        Ok(ShopConfig::from_json(SHOP_JSON)?)
    }
}

/// Configuration and the engine built from it, shared by every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shop {
    pub config: Rc<ShopConfig>,
    pub engine: Rc<EligibilityEngine>,
}

impl Shop {
    #[must_use]
    pub fn new(config: ShopConfig) -> Self {
        let engine = EligibilityEngine::from_config(&config);
        Self {
            config: Rc::new(config),
            engine: Rc::new(engine),
        }
    }

    /// Load from `source`, falling back to the built-in defaults on error.
    pub fn load(source: &impl ConfigSource) -> Self {
        let config = source.load_shop_config().unwrap_or_else(|err| {
            log::error!("{err}; using default shop configuration");
            ShopConfig::default()
        });
        Self::new(config)
    }
}

impl Default for Shop {
    fn default() -> Self {
        Self::new(ShopConfig::default())
    }
}
