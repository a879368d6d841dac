//! Infrastructure layer.

pub mod catalog;

pub use self::catalog::{Catalog, InMemory};
#[cfg(feature = "json")]
pub use self::catalog::JsonFile;
