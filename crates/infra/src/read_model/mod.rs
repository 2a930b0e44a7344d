//! Product storage abstractions.

pub mod product_repository;

pub use product_repository::{InMemoryProductRepository, ProductRepository};
