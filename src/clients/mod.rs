//! Repository clients for the product and order collections.

#[macro_use]
mod macros;

pub mod order_client;
pub mod product_client;

pub use order_client::*;
pub use product_client::*;

/// Page size used when the caller does not set one.
pub const DEFAULT_LIMIT: usize = 25;
