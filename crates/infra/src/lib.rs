//! Infrastructure adapters for the catalog.
//!
//! Only an in-process store lives here today; nothing is persisted.

pub mod read_model;
