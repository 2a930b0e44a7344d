//! Mask-driven operations on products: selective rendering and selective copy.
//!
//! Both functions are generic over [`FieldSelector`], so bit masks, bool masks
//! and single fields are interchangeable.

use std::io;

use crate::field::Field;
use crate::mask::FieldSelector;
use crate::product::Product;

/// Render the selected fields of `product` as `{label: value, ...}`.
///
/// Entries always follow the canonical field order (id, name, price, category,
/// inStock), independent of how the mask was built. An empty selection renders
/// as `{}`. No trailing newline; see [`write_rendered`] for emitting.
pub fn render<S: FieldSelector + ?Sized>(product: &Product, mask: &S) -> String {
    let entries: Vec<String> = Field::ALL
        .into_iter()
        .filter(|field| mask.selected(*field))
        .map(|field| format!("{}: {}", field.label(), product.field_value(field)))
        .collect();

    format!("{{{}}}", entries.join(", "))
}

/// Write the rendered record followed by a newline.
pub fn write_rendered<W, S>(out: &mut W, product: &Product, mask: &S) -> io::Result<()>
where
    W: io::Write + ?Sized,
    S: FieldSelector + ?Sized,
{
    writeln!(out, "{}", render(product, mask))
}

/// Overwrite every selected field of `target` with the value from `source`.
///
/// Fields are independent, so the visiting order does not matter. Unselected
/// fields are left untouched.
pub fn copy<S: FieldSelector + ?Sized>(source: &Product, target: &mut Product, mask: &S) {
    for field in Field::ALL {
        if mask.selected(field) {
            target.set_field_value(source.field_value(field));
        }
    }
}
