//! # catalog-store
//!
//! Product and order repositories over in-process document collections.
//!
//! Each collection is a [`actor_framework::ResourceActor`] task that owns its
//! documents; [`clients::ProductClient`] and [`clients::OrderClient`] are the
//! typed repositories callers use. [`app_system::CatalogSystem`] starts both
//! collections and wires the order client to the product client, which it
//! uses to expand order product references.
//!
//! ```no_run
//! use catalog_store::app_system::{CatalogConfig, CatalogSystem};
//! use catalog_store::clients::ListProductsOptions;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = CatalogSystem::new(&CatalogConfig::from_env()?);
//! let water = system.product_client.list(ListProductsOptions::tagged("water")).await?;
//! assert!(water.len() <= 25);
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod error;
pub mod order_actor;
pub mod product_actor;

#[cfg(test)]
mod mock_framework;
