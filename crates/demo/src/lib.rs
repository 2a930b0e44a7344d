//! `catalog-demo` — wires fixtures, the product store and field masks together.
//!
//! [`run`] seeds a repository, looks up products by name, renders them through
//! bit and bool masks, and syncs a price between same-named products with a
//! masked copy. All record output goes to the supplied writer.

pub mod config;
pub mod fixtures;

use std::io::Write;

use anyhow::Context;

use catalog_core::DomainError;
use catalog_infra::read_model::ProductRepository;
use catalog_products::{BitFieldMask, BoolFieldMask, Field, write_rendered};

use crate::config::DemoConfig;

/// Run the demo scenario against `repo`, writing records to `out`.
pub fn run<R, W>(config: &DemoConfig, repo: &mut R, out: &mut W) -> anyhow::Result<()>
where
    R: ProductRepository + ?Sized,
    W: Write + ?Sized,
{
    let products = match &config.fixtures_path {
        Some(path) => fixtures::load(path)?,
        None => fixtures::builtin(),
    };
    let seeded = products.len();
    for product in products {
        repo.create(product);
    }
    tracing::info!(seeded, "catalog seeded");

    // Lookup by one field.
    let matches = repo.find_by_name(&config.lookup_name);
    writeln!(
        out,
        "find_by_name({:?}) -> {} items",
        config.lookup_name,
        matches.len()
    )?;

    // Listing through the bit mask.
    let all_products = repo.list_all();
    for product in &all_products {
        write_rendered(out, product, &config.listing_mask)?;
    }

    let first = all_products
        .first()
        .ok_or_else(DomainError::not_found)
        .context("catalog is empty")?;

    // Same selection through the bool encoding.
    let flags = BoolFieldMask::from(config.listing_mask);
    writeln!(out, "bool mask ({}):", describe(config.listing_mask))?;
    write_rendered(out, first, &flags)?;

    writeln!(out, "all but id:")?;
    write_rendered(out, first, &(BitFieldMask::all() - Field::Id))?;

    // Price sync between same-named products. Lookups hand back snapshots, so
    // the copy lands on a local product and the stored one keeps its price.
    if let [dst, src, ..] = matches.as_slice() {
        let mut dst = dst.clone();
        dst.copy_from(src, &Field::Price);
        tracing::debug!(from = %src.id_typed(), to = %dst.id_typed(), "price copied");
        writeln!(out, "after price copy:")?;
        write_rendered(out, &dst, &(Field::Name | Field::Price))?;
    }

    writeln!(out, "Done.")?;
    Ok(())
}

/// `name+price(€)` style summary of a mask.
fn describe(mask: BitFieldMask) -> String {
    if mask.is_empty() {
        return "none".to_string();
    }
    mask.fields()
        .map(Field::label)
        .collect::<Vec<_>>()
        .join("+")
}
