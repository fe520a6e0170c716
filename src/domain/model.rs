use serde::{Deserialize, Serialize};

/// A single book record. Title is the de-facto lookup key but is not unique;
/// no field is validated.
///
/// The JSON field names (`titulo`, `autor`, `genero`, `anio`) are the
/// on-disk compatibility surface and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "genero")]
    pub genre: String,
    #[serde(rename = "anio")]
    pub year: i32,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            year,
        }
    }
}
