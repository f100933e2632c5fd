use tracing::{error, info, Instrument};

use catalog_store::app_system::{setup_tracing, CatalogConfig, CatalogSystem};
use catalog_store::clients::{ListOrdersOptions, ListProductsOptions};
use catalog_store::domain::{NewOrder, NewProduct, OrderPatch, OrderStatus, ProductLinks, ProductUrls, ProductUser, Tag};

fn sample_product(slug: &str, likes: i64, tags: &[&str]) -> NewProduct {
    NewProduct {
        description: Some(format!("Sample photo {slug}")),
        alt_description: None,
        likes: Some(likes),
        urls: Some(ProductUrls {
            regular: format!("https://images.example.com/{slug}?w=1080"),
            small: format!("https://images.example.com/{slug}?w=400"),
            thumb: format!("https://images.example.com/{slug}?w=200"),
        }),
        links: Some(ProductLinks {
            self_link: format!("https://api.example.com/photos/{slug}"),
            html: format!("https://example.com/photos/{slug}"),
        }),
        user: Some(ProductUser {
            id: "demo-user".to_string(),
            first_name: "Demo".to_string(),
            last_name: None,
            portfolio_url: None,
            username: "demo".to_string(),
        }),
        tags: tags.iter().map(|title| Tag::new(*title)).collect(),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = CatalogConfig::from_env().map_err(|e| e.to_string())?;
    setup_tracing(&config);

    info!("Starting catalog demo");

    let system = CatalogSystem::new(&config);

    let span = tracing::info_span!("seed_products");
    let (lake, dunes) = async {
        let lake = system.product_client.create(sample_product("lake", 42, &["water", "nature"])).await?;
        let dunes = system.product_client.create(sample_product("dunes", 7, &["desert"])).await?;
        Ok::<_, catalog_store::product_actor::ProductError>((lake, dunes))
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let water = system
        .product_client
        .list(ListProductsOptions::tagged("water"))
        .await
        .map_err(|e| e.to_string())?;
    info!(count = water.len(), "Products tagged water");

    let span = tracing::info_span!("order_processing");
    let order_result = async {
        let order = system
            .order_client
            .create(NewOrder::new("buyer@example.com", [lake.id.clone(), dunes.id.clone()]))
            .await?;
        system
            .order_client
            .edit(order.id.clone(), OrderPatch { status: Some(OrderStatus::Pending), ..Default::default() })
            .await?;
        Ok::<_, catalog_store::order_actor::OrderError>(order.id)
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(order_id) => info!(order_id = %order_id, "Order placed"),
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    let pending = system
        .order_client
        .list(ListOrdersOptions { status: Some(OrderStatus::Pending), ..Default::default() })
        .await
        .map_err(|e| e.to_string())?;
    let rendered = serde_json::to_string_pretty(&pending).map_err(|e| e.to_string())?;
    info!(orders = %rendered, "Pending orders");

    system.shutdown().await?;

    info!("Catalog demo completed");
    Ok(())
}
