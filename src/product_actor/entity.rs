use crate::actor_framework::Entity;
use crate::domain::{NewProduct, Product, ProductFilter, ProductPatch};
use crate::error::ValidationError;

impl Entity for Product {
    type Id = String;
    type CreateParams = NewProduct;
    type Patch = ProductPatch;
    type Filter = ProductFilter;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Product from the caller's fields.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] naming the first missing or empty required field.
    fn from_create_params(id: String, params: NewProduct) -> Result<Self, ValidationError> {
        Product::from_fields(id, params)
    }

    /// Overwrites the patched fields and re-validates the result.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), ValidationError> {
        self.apply(patch)
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        filter.tag.as_deref().map_or(true, |tag| self.has_tag(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::fixtures::new_product;

    #[test]
    fn test_tag_filter_is_exact() {
        let product = Product::from_create_params("p1".into(), new_product(1, &["Nature"])).unwrap();

        assert!(product.matches(&ProductFilter::default()));
        assert!(product.matches(&ProductFilter { tag: Some("Nature".into()) }));
        assert!(!product.matches(&ProductFilter { tag: Some("nature".into()) }));
        assert!(!product.matches(&ProductFilter { tag: Some("Nat".into()) }));
    }
}
