//! Catalog providers.
//!
//! A provider supplies the ordered list of items shown in the home and
//! inventory views. The application only ever reads from a provider; the
//! loaded items are validated before they reach the store.

use super::{Item, builtin_items};
use crate::error::{Error, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::path::PathBuf;

/// Source of catalog items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Human-readable description of where the items come from.
    fn source(&self) -> String;

    /// Load all items, in display order.
    async fn load(&self) -> Result<Vec<Item>>;
}

/// The built-in catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog;

#[async_trait]
impl CatalogProvider for StaticCatalog {
    fn source(&self) -> String {
        "built-in catalog".to_string()
    }

    async fn load(&self) -> Result<Vec<Item>> {
        Ok(builtin_items())
    }
}

/// Catalog read from a JSON file containing an array of items.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    /// Create a provider for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse a JSON document into items.
    pub fn parse(content: &str) -> Result<Vec<Item>> {
        Ok(serde_json::from_str(content)?)
    }
}

#[async_trait]
impl CatalogProvider for JsonCatalog {
    fn source(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Vec<Item>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Self::parse(&content)
    }
}

/// Pick a provider for an optional catalog path.
pub fn provider_for(path: Option<PathBuf>) -> Box<dyn CatalogProvider> {
    match path {
        Some(path) => Box::new(JsonCatalog::new(path)),
        None => Box::new(StaticCatalog),
    }
}

/// Check catalog invariants: unique ids, named items, non-negative prices.
pub fn validate_items(items: &[Item]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        if !seen.insert(item.id) {
            return Err(Error::catalog(format!("duplicate item id {}", item.id)));
        }
        if item.name.trim().is_empty() {
            return Err(Error::catalog(format!("item {} has an empty name", item.id)));
        }
        if item.price < Decimal::ZERO {
            return Err(Error::catalog(format!(
                "item {} has a negative price ({})",
                item.id, item.price
            )));
        }
    }

    Ok(())
}

/// Load items from a provider and validate them.
pub async fn load_validated(provider: &dyn CatalogProvider) -> Result<Vec<Item>> {
    let items = provider.load().await?;
    validate_items(&items)?;
    tracing::info!(
        source = %provider.source(),
        count = items.len(),
        "catalog loaded"
    );
    Ok(items)
}
