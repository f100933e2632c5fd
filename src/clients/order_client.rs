use tracing::{debug, info, instrument};

use super::{ProductClient, DEFAULT_LIMIT};
use crate::actor_framework::{FindQuery, ResourceClient};
use crate::domain::{NewOrder, Order, OrderFilter, OrderPatch, OrderStatus, PopulatedOrder};
use crate::order_actor::OrderError;

/// Paging and filtering for [`OrderClient::list`]. Present filters combine with AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOrdersOptions {
    pub offset: usize,
    pub limit: usize,
    pub product_id: Option<String>,
    pub status: Option<OrderStatus>,
}

impl Default for ListOrdersOptions {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
            product_id: None,
            status: None,
        }
    }
}

/// Client for the order collection.
///
/// Product references are expanded through the product client after the
/// primary query; `list_raw` and `get` skip that step.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    product_client: ProductClient,
}

impl_client_methods!(OrderClient, Order, OrderError);

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, product_client: ProductClient) -> Self {
        Self { inner, product_client }
    }

    /// Stores a new order and returns it with its products expanded.
    #[instrument(skip(self, fields), fields(buyer_email = ?fields.buyer_email))]
    pub async fn create(&self, fields: NewOrder) -> Result<PopulatedOrder, OrderError> {
        debug!("Sending request");
        let order = self.inner.create(fields).await?;
        info!(order_id = %order.id, product_count = order.products.len(), "Order created");
        self.populate(order).await
    }

    /// Lists orders in insertion order with their products expanded.
    #[instrument(skip(self))]
    pub async fn list(&self, options: ListOrdersOptions) -> Result<Vec<PopulatedOrder>, OrderError> {
        let orders = self.list_raw(options).await?;

        let mut ids: Vec<String> = orders.iter().flat_map(|order| order.products.iter().cloned()).collect();
        ids.sort();
        ids.dedup();
        let products = self.product_client.get_many(ids).await?;

        Ok(orders.into_iter().map(|order| order.with_products(&products)).collect())
    }

    /// Same query as [`OrderClient::list`], without expanding product references.
    #[instrument(skip(self))]
    pub async fn list_raw(&self, options: ListOrdersOptions) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let filter = OrderFilter {
            // an empty product id means no product filter
            product_id: options.product_id.filter(|product_id| !product_id.is_empty()),
            status: options.status,
        };
        let query = FindQuery::new(filter).skip(options.offset).limit(options.limit);
        let orders = self.inner.find(query).await?;
        debug!(order_count = orders.len(), "Listed orders");
        Ok(orders)
    }

    /// Replaces the order's product ids with the product records that exist.
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn populate(&self, order: Order) -> Result<PopulatedOrder, OrderError> {
        let products = self.product_client.get_many(order.products.clone()).await?;
        if products.len() < order.products.len() {
            debug!(
                referenced = order.products.len(),
                found = products.len(),
                "Dropping dangling product references"
            );
        }
        Ok(order.with_products(&products))
    }

    /// Overwrites the fields present in `change`. The returned order is not expanded.
    #[instrument(skip(self, change))]
    pub async fn edit(&self, id: String, change: OrderPatch) -> Result<Order, OrderError> {
        debug!("Sending request");
        let order = self.inner.update(id, change).await?;
        info!(status = %order.status, "Order updated");
        Ok(order)
    }
}
