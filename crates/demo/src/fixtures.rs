//! Seed data for the demo catalog.

use std::path::Path;

use anyhow::Context;

use catalog_products::{Category, Product, ProductId};

/// The four products the demo ships with. Two share the name "iPhone 17".
pub fn builtin() -> Vec<Product> {
    vec![
        Product::new(ProductId::new(1), "iPhone 17", 1299.00, Category::Premium, true),
        Product::new(ProductId::new(2), "MacBook Air", 1499.00, Category::Enterprise, true),
        Product::new(ProductId::new(3), "iPad 10", 579.00, Category::Standard, true),
        Product::new(ProductId::new(4), "iPhone 17", 1349.00, Category::Premium, false),
    ]
}

/// Load a JSON array of products from `path`.
pub fn load(path: &Path) -> anyhow::Result<Vec<Product>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read fixtures from {}", path.display()))?;
    let products: Vec<Product> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse fixtures in {}", path.display()))?;
    Ok(products)
}
