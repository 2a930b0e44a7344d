use catalog_products::{Field, FieldValue, Product};

/// Product store contract: append, list, exact lookup by one field.
///
/// Implementations keep insertion order. Lookups return owned snapshots, so a
/// caller mutating a returned product does not touch the stored one.
pub trait ProductRepository {
    fn create(&mut self, product: Product);

    /// Every stored product, in insertion order.
    fn list_all(&self) -> Vec<Product>;

    /// Every stored product whose field named by `value` equals it exactly.
    fn find_by_field(&self, value: &FieldValue) -> Vec<Product>;

    fn find_by_name(&self, name: &str) -> Vec<Product> {
        self.find_by_field(&FieldValue::Name(name.to_string()))
    }
}

impl<R> ProductRepository for Box<R>
where
    R: ProductRepository + ?Sized,
{
    fn create(&mut self, product: Product) {
        (**self).create(product)
    }

    fn list_all(&self) -> Vec<Product> {
        (**self).list_all()
    }

    fn find_by_field(&self, value: &FieldValue) -> Vec<Product> {
        (**self).find_by_field(value)
    }
}

/// In-memory product store for tests/dev.
///
/// Owned by whoever constructs it. There is no internal locking; share it
/// across threads only behind an external lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    data: Vec<Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl FromIterator<Product> for InMemoryProductRepository {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut repo = Self::new();
        for product in iter {
            repo.create(product);
        }
        repo
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn create(&mut self, product: Product) {
        tracing::debug!(product_id = %product.id_typed(), name = product.name(), "product stored");
        self.data.push(product);
    }

    fn list_all(&self) -> Vec<Product> {
        self.data.clone()
    }

    fn find_by_field(&self, value: &FieldValue) -> Vec<Product> {
        let found: Vec<Product> = self
            .data
            .iter()
            .filter(|p| p.matches(value))
            .cloned()
            .collect();

        let field: Field = value.field();
        tracing::debug!(%field, %value, matches = found.len(), "product lookup");
        found
    }
}
