//! Field masks: which product fields an operation should touch.
//!
//! Two encodings are provided:
//!
//! - [`BitFieldMask`]: one bit per field packed into a `u8`, with set algebra
//!   (union / intersect / minus).
//! - [`BoolFieldMask`]: one public `bool` per field, no algebra.
//!
//! Both implement [`FieldSelector`], which is all that rendering and copying
//! depend on, so either can be passed wherever a mask is expected.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign};

use catalog_core::{DomainError, DomainResult};

use crate::field::Field;

/// Capability: "is this field selected?".
pub trait FieldSelector {
    fn selected(&self, field: Field) -> bool;
}

impl<S: FieldSelector + ?Sized> FieldSelector for &S {
    fn selected(&self, field: Field) -> bool {
        (**self).selected(field)
    }
}

/// A single field selects only itself.
impl FieldSelector for Field {
    fn selected(&self, field: Field) -> bool {
        *self == field
    }
}

/// Packed set of fields: bit `i` marks `Field::ALL[i]`.
///
/// Only the low five bits can ever be set. Every constructor preserves that,
/// and [`BitFieldMask::try_from_bits`] refuses raw integers with anything above.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct BitFieldMask(u8);

impl BitFieldMask {
    const UNIVERSE: u8 = 0b1_1111;

    pub const ID: Self = Self(Field::Id.bit());
    pub const NAME: Self = Self(Field::Name.bit());
    pub const PRICE: Self = Self(Field::Price.bit());
    pub const CATEGORY: Self = Self(Field::Category.bit());
    pub const IN_STOCK: Self = Self(Field::InStock.bit());

    /// Every field selected (`31`).
    pub const fn all() -> Self {
        Self(Self::UNIVERSE)
    }

    /// No field selected (`0`).
    pub const fn none() -> Self {
        Self(0)
    }

    /// Wrap a raw integer, failing if any bit outside the five-field universe is set.
    pub fn try_from_bits(bits: u8) -> DomainResult<Self> {
        if bits & !Self::UNIVERSE != 0 {
            return Err(DomainError::invariant(format!(
                "mask bits {bits:#010b} outside field universe {:#010b}",
                Self::UNIVERSE
            )));
        }
        Ok(Self(bits))
    }

    /// Raw integer in `0..=31`.
    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn intersect(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Fields in `self` that are not in `other`.
    pub const fn minus(self, other: Self) -> Self {
        Self(self.0 & !other.0 & Self::UNIVERSE)
    }

    pub const fn contains(self, field: Field) -> bool {
        self.0 & field.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of selected fields.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Selected fields in canonical order.
    pub fn fields(self) -> impl Iterator<Item = Field> {
        Field::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

impl FieldSelector for BitFieldMask {
    fn selected(&self, field: Field) -> bool {
        self.contains(field)
    }
}

impl From<Field> for BitFieldMask {
    fn from(field: Field) -> Self {
        Self(field.bit())
    }
}

impl FromIterator<Field> for BitFieldMask {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), |mask, field| mask.union(field.into()))
    }
}

impl TryFrom<u8> for BitFieldMask {
    type Error = DomainError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::try_from_bits(bits)
    }
}

impl From<BitFieldMask> for u8 {
    fn from(mask: BitFieldMask) -> Self {
        mask.0
    }
}

impl BitOr for BitFieldMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for BitFieldMask {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for BitFieldMask {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        self.intersect(rhs)
    }
}

impl BitAndAssign for BitFieldMask {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersect(rhs);
    }
}

impl Sub for BitFieldMask {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.minus(rhs)
    }
}

impl SubAssign for BitFieldMask {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.minus(rhs);
    }
}

impl BitOr<Field> for BitFieldMask {
    type Output = Self;
    fn bitor(self, rhs: Field) -> Self {
        self.union(rhs.into())
    }
}

impl Sub<Field> for BitFieldMask {
    type Output = Self;
    fn sub(self, rhs: Field) -> Self {
        self.minus(rhs.into())
    }
}

impl BitOr for Field {
    type Output = BitFieldMask;
    fn bitor(self, rhs: Field) -> BitFieldMask {
        BitFieldMask::from(self).union(rhs.into())
    }
}

/// One independent flag per field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct BoolFieldMask {
    pub id: bool,
    pub name: bool,
    pub price: bool,
    pub category: bool,
    pub in_stock: bool,
}

impl BoolFieldMask {
    pub fn all() -> Self {
        Self {
            id: true,
            name: true,
            price: true,
            category: true,
            in_stock: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

impl FieldSelector for BoolFieldMask {
    fn selected(&self, field: Field) -> bool {
        match field {
            Field::Id => self.id,
            Field::Name => self.name,
            Field::Price => self.price,
            Field::Category => self.category,
            Field::InStock => self.in_stock,
        }
    }
}

impl From<BitFieldMask> for BoolFieldMask {
    fn from(mask: BitFieldMask) -> Self {
        Self {
            id: mask.contains(Field::Id),
            name: mask.contains(Field::Name),
            price: mask.contains(Field::Price),
            category: mask.contains(Field::Category),
            in_stock: mask.contains(Field::InStock),
        }
    }
}

impl From<BoolFieldMask> for BitFieldMask {
    fn from(mask: BoolFieldMask) -> Self {
        Field::ALL.into_iter().filter(|f| mask.selected(*f)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_and_none_are_the_universe_bounds() {
        assert_eq!(BitFieldMask::all().bits(), 31);
        assert_eq!(BitFieldMask::none().bits(), 0);
        assert_eq!(BitFieldMask::default(), BitFieldMask::none());
        assert_eq!(BitFieldMask::all().len(), 5);
        assert!(BitFieldMask::none().is_empty());
    }

    #[test]
    fn field_constants_match_field_bits() {
        assert_eq!(BitFieldMask::ID.bits(), 1);
        assert_eq!(BitFieldMask::NAME.bits(), 2);
        assert_eq!(BitFieldMask::PRICE.bits(), 4);
        assert_eq!(BitFieldMask::CATEGORY.bits(), 8);
        assert_eq!(BitFieldMask::IN_STOCK.bits(), 16);
        for field in Field::ALL {
            assert_eq!(BitFieldMask::from(field).bits(), field.bit());
        }
    }

    #[test]
    fn try_from_bits_rejects_out_of_universe_bits() {
        assert_eq!(BitFieldMask::try_from_bits(31).unwrap(), BitFieldMask::all());
        for bits in [32u8, 33, 64, 0xFF] {
            match BitFieldMask::try_from(bits).unwrap_err() {
                DomainError::InvariantViolation(_) => {}
                _ => panic!("Expected InvariantViolation for bits {bits}"),
            }
        }
    }

    #[test]
    fn minus_removes_only_named_fields() {
        let all_but_id = BitFieldMask::all().minus(BitFieldMask::ID);
        assert_eq!(all_but_id.bits(), 0b1_1110);
        assert!(!all_but_id.contains(Field::Id));
        assert_eq!(BitFieldMask::all() - Field::Id, all_but_id);
        assert_eq!(BitFieldMask::ID.minus(BitFieldMask::NAME), BitFieldMask::ID);
    }

    #[test]
    fn operators_agree_with_named_methods() {
        let a = Field::Name | Field::Price;
        let b = BitFieldMask::PRICE | BitFieldMask::CATEGORY;
        assert_eq!(a | b, a.union(b));
        assert_eq!(a & b, a.intersect(b));
        assert_eq!(a - b, a.minus(b));

        let mut m = a;
        m |= b;
        m &= BitFieldMask::all() - Field::Name;
        m -= BitFieldMask::CATEGORY;
        assert_eq!(m, BitFieldMask::PRICE);
    }

    #[test]
    fn fields_iterates_in_canonical_order() {
        let mask = Field::InStock | Field::Id;
        let mask = mask | Field::Category;
        assert_eq!(
            mask.fields().collect::<Vec<_>>(),
            vec![Field::Id, Field::Category, Field::InStock]
        );
    }

    #[test]
    fn from_iterator_collects_fields() {
        let mask: BitFieldMask = [Field::Price, Field::Name, Field::Price].into_iter().collect();
        assert_eq!(mask, BitFieldMask::NAME | BitFieldMask::PRICE);
    }

    #[test]
    fn bool_mask_all_and_none() {
        let all = BoolFieldMask::all();
        let none = BoolFieldMask::none();
        for field in Field::ALL {
            assert!(all.selected(field));
            assert!(!none.selected(field));
        }
        assert_eq!(none, BoolFieldMask::default());
    }

    #[test]
    fn bool_mask_flags_are_independent() {
        let mut mask = BoolFieldMask::none();
        mask.name = true;
        mask.price = true;
        assert!(mask.selected(Field::Name));
        assert!(mask.selected(Field::Price));
        assert!(!mask.selected(Field::Id));
        assert_eq!(BitFieldMask::from(mask), Field::Name | Field::Price);
    }

    #[test]
    fn single_field_selects_only_itself() {
        assert!(Field::Price.selected(Field::Price));
        assert!(!Field::Price.selected(Field::Name));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_mask() -> impl Strategy<Value = BitFieldMask> {
            (0u8..=31).prop_map(|bits| BitFieldMask::try_from_bits(bits).unwrap())
        }

        proptest! {
            /// Property: union is commutative, idempotent, with identity `none()`.
            #[test]
            fn union_laws(a in any_mask(), b in any_mask(), c in any_mask()) {
                prop_assert_eq!(a.union(b), b.union(a));
                prop_assert_eq!(a.union(a), a);
                prop_assert_eq!(a.union(BitFieldMask::none()), a);
                prop_assert_eq!(a.union(b).union(c), a.union(b.union(c)));
            }

            /// Property: intersect is commutative, idempotent, identity `all()`, absorbs `none()`.
            #[test]
            fn intersect_laws(a in any_mask(), b in any_mask(), c in any_mask()) {
                prop_assert_eq!(a.intersect(b), b.intersect(a));
                prop_assert_eq!(a.intersect(a), a);
                prop_assert_eq!(a.intersect(BitFieldMask::all()), a);
                prop_assert_eq!(a.intersect(BitFieldMask::none()), BitFieldMask::none());
                prop_assert_eq!(a.intersect(b).intersect(c), a.intersect(b.intersect(c)));
            }

            /// Property: minus is set difference.
            #[test]
            fn minus_laws(a in any_mask(), b in any_mask()) {
                prop_assert_eq!(a.minus(a), BitFieldMask::none());
                prop_assert_eq!(a.minus(BitFieldMask::none()), a);
                let diff = a.minus(b);
                for field in Field::ALL {
                    prop_assert_eq!(diff.contains(field), a.contains(field) && !b.contains(field));
                }
            }

            /// Property: no operation ever leaves the five-bit universe.
            #[test]
            fn results_stay_in_universe(a in any_mask(), b in any_mask()) {
                for m in [a.union(b), a.intersect(b), a.minus(b), BitFieldMask::all().minus(a)] {
                    prop_assert!(m.bits() <= 31);
                    prop_assert!(BitFieldMask::try_from_bits(m.bits()).is_ok());
                }
            }

            /// Property: bit and bool encodings convert losslessly.
            #[test]
            fn bool_conversion_is_lossless(a in any_mask()) {
                let flags = BoolFieldMask::from(a);
                prop_assert_eq!(BitFieldMask::from(flags), a);
                for field in Field::ALL {
                    prop_assert_eq!(flags.selected(field), a.selected(field));
                }
            }
        }
    }
}
