use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, Entity};

use crate::field::{Field, FieldValue};
use crate::mask::FieldSelector;
use crate::projection;

/// Product identifier. Not required to be unique within a store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Product tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Standard,
    Premium,
    Enterprise,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Standard => "STANDARD",
            Category::Premium => "PREMIUM",
            Category::Enterprise => "ENTERPRISE",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STANDARD" => Ok(Category::Standard),
            "PREMIUM" => Ok(Category::Premium),
            "ENTERPRISE" => Ok(Category::Enterprise),
            other => Err(DomainError::validation(format!("unknown category: {other:?}"))),
        }
    }
}

/// Catalog entry.
///
/// All five fields are supplied up front and can be changed independently
/// afterwards. Equality is field-wise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64, // euros, non-negative by convention
    category: Category,
    in_stock: bool,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        category: Category,
        in_stock: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category,
            in_stock,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    pub fn set_id(&mut self, id: ProductId) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn set_in_stock(&mut self, in_stock: bool) {
        self.in_stock = in_stock;
    }

    /// Read one field as a tagged value.
    pub fn field_value(&self, field: Field) -> FieldValue {
        match field {
            Field::Id => FieldValue::Id(self.id),
            Field::Name => FieldValue::Name(self.name.clone()),
            Field::Price => FieldValue::Price(self.price),
            Field::Category => FieldValue::Category(self.category),
            Field::InStock => FieldValue::InStock(self.in_stock),
        }
    }

    /// Overwrite the field named by `value`.
    pub fn set_field_value(&mut self, value: FieldValue) {
        match value {
            FieldValue::Id(id) => self.id = id,
            FieldValue::Name(name) => self.name = name,
            FieldValue::Price(price) => self.price = price,
            FieldValue::Category(category) => self.category = category,
            FieldValue::InStock(in_stock) => self.in_stock = in_stock,
        }
    }

    /// Whether the field named by `value` currently holds exactly `value`.
    pub fn matches(&self, value: &FieldValue) -> bool {
        match value {
            FieldValue::Id(id) => self.id == *id,
            FieldValue::Name(name) => self.name == *name,
            FieldValue::Price(price) => self.price == *price,
            FieldValue::Category(category) => self.category == *category,
            FieldValue::InStock(in_stock) => self.in_stock == *in_stock,
        }
    }

    /// See [`projection::render`].
    pub fn render<S: FieldSelector + ?Sized>(&self, mask: &S) -> String {
        projection::render(self, mask)
    }

    /// See [`projection::copy`].
    pub fn copy_from<S: FieldSelector + ?Sized>(&mut self, source: &Product, mask: &S) {
        projection::copy(source, self, mask)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
