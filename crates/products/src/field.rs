//! The closed universe of product fields and their typed values.

use core::fmt;
use core::str::FromStr;

use catalog_core::DomainError;

use crate::product::{Category, ProductId};

/// A selectable product field.
///
/// Declaration order is the canonical order: rendering always walks
/// [`Field::ALL`] front to back, and [`Field::bit`] is derived from the
/// position in it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Id,
    Name,
    Price,
    Category,
    InStock,
}

impl Field {
    /// Every field, in canonical order.
    pub const ALL: [Field; 5] = [
        Field::Id,
        Field::Name,
        Field::Price,
        Field::Category,
        Field::InStock,
    ];

    /// Zero-based position in the canonical order.
    pub const fn index(self) -> u32 {
        match self {
            Field::Id => 0,
            Field::Name => 1,
            Field::Price => 2,
            Field::Category => 3,
            Field::InStock => 4,
        }
    }

    /// Single-bit encoding of this field inside a `BitFieldMask`.
    pub const fn bit(self) -> u8 {
        1 << self.index()
    }

    /// Label used in rendered output.
    pub const fn label(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Price => "price(€)",
            Field::Category => "category",
            Field::InStock => "inStock",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Field {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Field::Id),
            "name" => Ok(Field::Name),
            "price" | "price(€)" => Ok(Field::Price),
            "category" => Ok(Field::Category),
            "instock" | "in_stock" => Ok(Field::InStock),
            other => Err(DomainError::validation(format!("unknown product field: {other:?}"))),
        }
    }
}

/// The value of one product field, tagged with the field it belongs to.
///
/// `Display` produces exactly the value text used in rendered output:
/// names are double-quoted (no escaping), prices are written out positionally
/// (never in exponent form) with a fractional part always present (`1299.0`),
/// categories print their symbol.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Id(ProductId),
    Name(String),
    Price(f64),
    Category(Category),
    InStock(bool),
}

impl FieldValue {
    /// The field this value belongs to.
    pub fn field(&self) -> Field {
        match self {
            FieldValue::Id(_) => Field::Id,
            FieldValue::Name(_) => Field::Name,
            FieldValue::Price(_) => Field::Price,
            FieldValue::Category(_) => Field::Category,
            FieldValue::InStock(_) => Field::InStock,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Id(id) => write!(f, "{id}"),
            FieldValue::Name(name) => write!(f, "\"{name}\""),
            FieldValue::Price(price) => write_price(f, *price),
            FieldValue::Category(category) => write!(f, "{category}"),
            FieldValue::InStock(in_stock) => write!(f, "{in_stock}"),
        }
    }
}

/// Positional decimal text; whole finite values get a `.0` suffix.
fn write_price(f: &mut fmt::Formatter<'_>, price: f64) -> fmt::Result {
    let text = price.to_string();
    if price.is_finite() && !text.contains('.') {
        write!(f, "{text}.0")
    } else {
        f.write_str(&text)
    }
}
