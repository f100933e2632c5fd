use tracing::{debug, info, instrument};

use super::DEFAULT_LIMIT;
use crate::actor_framework::{FindQuery, ResourceClient, Sort};
use crate::domain::{NewProduct, Product, ProductFilter, ProductPatch};
use crate::product_actor::ProductError;

/// Paging and filtering for [`ProductClient::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListProductsOptions {
    pub offset: usize,
    pub limit: usize,
    /// Keep only products carrying a tag with exactly this title
    pub tag: Option<String>,
}

impl Default for ListProductsOptions {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
            tag: None,
        }
    }
}

impl ListProductsOptions {
    pub fn tagged(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }
}

/// Client for the product collection.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError);

impl ProductClient {
    /// Validates and stores a new product, returning it with its generated id.
    #[instrument(skip(self, fields), fields(likes = ?fields.likes, tags = fields.tags.len()))]
    pub async fn create(&self, fields: NewProduct) -> Result<Product, ProductError> {
        debug!("Sending request");
        let product = self.inner.create(fields).await?;
        info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    /// Lists products sorted by id so that offset/limit pages are stable.
    #[instrument(skip(self))]
    pub async fn list(&self, options: ListProductsOptions) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        // an empty tag means no tag filter
        let tag = options.tag.filter(|tag| !tag.is_empty());
        let query = FindQuery::new(ProductFilter { tag })
            .sort(Sort::IdAscending)
            .skip(options.offset)
            .limit(options.limit);
        let products = self.inner.find(query).await?;
        debug!(product_count = products.len(), "Listed products");
        Ok(products)
    }

    /// Overwrites the fields present in `change`.
    ///
    /// # Errors
    /// `NotFound` when no product has this id, `Validation` when the patched
    /// record breaks a constraint (the stored record is left as it was).
    #[instrument(skip(self, change))]
    pub async fn edit(&self, id: String, change: ProductPatch) -> Result<Product, ProductError> {
        debug!("Sending request");
        let product = self.inner.update(id, change).await?;
        info!(likes = product.likes, "Product updated");
        Ok(product)
    }

    /// Fetches several products at once, in the order requested. Unknown ids are skipped.
    #[instrument(skip(self, ids), fields(requested = ids.len()))]
    pub async fn get_many(&self, ids: Vec<String>) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        Ok(self.inner.get_many(ids).await?)
    }
}
