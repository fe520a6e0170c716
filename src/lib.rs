pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::catalog::{Catalog, ImportOutcome, RemoveOutcome};
pub use crate::domain::model::Book;
pub use crate::utils::error::{CatalogError, Result};
