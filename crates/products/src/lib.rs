//! Products catalog module.
//!
//! This crate contains the product record and the field-mask machinery used to
//! project (render) and partially copy products. Everything here is pure,
//! deterministic domain logic (no IO beyond the caller-supplied writer in
//! [`projection::write_rendered`], no storage).

pub mod field;
pub mod mask;
pub mod product;
pub mod projection;

pub use field::{Field, FieldValue};
pub use mask::{BitFieldMask, BoolFieldMask, FieldSelector};
pub use product::{Category, Product, ProductId};
pub use projection::{copy, render, write_rendered};
