//! Entity trait: a record with an identifier and independently mutable fields.

/// Entity marker + minimal interface.
///
/// The identifier is informational only: stores are free to hold several
/// entities with the same id, and two entities with equal field values are
/// interchangeable.
pub trait Entity {
    /// Identifier type carried by the entity.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
