pub mod catalog;

pub use crate::domain::model::Book;
pub use crate::utils::error::Result;
