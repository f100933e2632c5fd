//! Order collection: entity hooks and repository errors.

pub mod entity;
pub mod error;

pub use error::*;
