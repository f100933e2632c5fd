use tracing::{error, info, instrument};

use super::CatalogConfig;
use crate::actor_framework::ResourceActor;
use crate::clients::{OrderClient, ProductClient};
use crate::domain::{Order, Product};

/// Collision-resistant, time-ordered document id.
pub fn generate_id() -> String {
    uuid::Uuid::now_v7().simple().to_string()
}

/// Owns the product and order collections.
///
/// Responsible for starting the collection actors, wiring the clients
/// together, and handling shutdown.
pub struct CatalogSystem {
    pub order_client: OrderClient,
    pub product_client: ProductClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    /// Must be called from within a tokio runtime.
    #[instrument(name = "catalog_system", skip(config), fields(channel_buffer = config.channel_buffer))]
    pub fn new(config: &CatalogConfig) -> Self {
        info!("Starting catalog system");

        // 1. Products first: orders expand their references through this client
        let (product_actor, product_resource_client) =
            ResourceActor::<Product>::new(config.channel_buffer, generate_id);
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        // 2. Orders
        let (order_actor, order_resource_client) = ResourceActor::<Order>::new(config.channel_buffer, generate_id);
        let order_client = OrderClient::new(order_resource_client, product_client.clone());
        let order_handle = tokio::spawn(order_actor.run());

        info!("Catalog system started");

        Self {
            order_client,
            product_client,
            handles: vec![product_handle, order_handle],
        }
    }

    /// Drops the clients held here and waits for the collections to stop.
    ///
    /// A collection stops once every clone of its client is gone, so clients
    /// cloned out of the system must be dropped before this can complete.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog system");

        drop(self.order_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Collection task failed");
                return Err(format!("Collection task failed: {:?}", e));
            }
        }

        info!("Catalog system shutdown complete");
        Ok(())
    }
}
