//! Demo configuration, read from environment variables.

use std::path::PathBuf;

use anyhow::Context;

use catalog_core::DomainResult;
use catalog_products::{BitFieldMask, Field};

/// Path to a JSON array of products to seed instead of the built-in fixtures.
pub const FIXTURES_ENV: &str = "CATALOG_FIXTURES";
/// Comma-separated field list used when listing the catalog.
pub const FIELDS_ENV: &str = "CATALOG_FIELDS";
/// Product name looked up (and price-synced) by the demo.
pub const LOOKUP_NAME_ENV: &str = "CATALOG_LOOKUP_NAME";

const DEFAULT_LOOKUP_NAME: &str = "iPhone 17";

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub fixtures_path: Option<PathBuf>,
    pub listing_mask: BitFieldMask,
    pub lookup_name: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            fixtures_path: None,
            listing_mask: Field::Name | Field::Price,
            lookup_name: DEFAULT_LOOKUP_NAME.to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a closure over a map).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(FIXTURES_ENV).filter(|v| !v.trim().is_empty()) {
            config.fixtures_path = Some(PathBuf::from(path));
        }

        if let Some(fields) = lookup(FIELDS_ENV) {
            config.listing_mask = parse_fields(&fields)
                .with_context(|| format!("invalid {FIELDS_ENV}={fields:?}"))?;
        }

        if let Some(name) = lookup(LOOKUP_NAME_ENV) {
            config.lookup_name = name;
        }

        Ok(config)
    }
}

/// Parse `"name, price"` into a mask. Blank entries are skipped.
pub fn parse_fields(list: &str) -> DomainResult<BitFieldMask> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<Field>)
        .collect()
}
