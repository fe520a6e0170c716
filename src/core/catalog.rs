use crate::core::{Book, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Outcome of [`Catalog::remove_by_title`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// Outcome of [`Catalog::import_from_file`]. A missing file is a normal
/// outcome, not an error; anything else surfaces through the error enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    Loaded,
    FileNotFound,
}

/// An in-memory collection of books, insertion order preserved.
///
/// All lookups are case-insensitive. Title matching is exact (after case
/// folding); author matching is substring. Duplicate titles are allowed and
/// removal drops every match.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Appends a book. Never fails and performs no validation.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
    ) {
        let book = Book::new(title, author, genre, year);
        tracing::debug!("Adding book: {}", book.title);
        self.books.push(book);
    }

    /// Returns every book whose title matches the query exactly,
    /// ignoring case. May return more than one for duplicate titles.
    pub fn find_by_title(&self, title: &str) -> Vec<&Book> {
        let query = title.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.title.to_lowercase() == query)
            .collect()
    }

    /// Returns every book whose author contains the query as a
    /// case-insensitive substring.
    pub fn find_by_author(&self, author: &str) -> Vec<&Book> {
        let query = author.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.author.to_lowercase().contains(&query))
            .collect()
    }

    /// Removes every book whose title matches the query exactly, ignoring
    /// case. All matches are dropped, not just the first.
    pub fn remove_by_title(&mut self, title: &str) -> RemoveOutcome {
        let query = title.to_lowercase();
        let before = self.books.len();
        self.books.retain(|book| book.title.to_lowercase() != query);

        if self.books.len() < before {
            tracing::debug!(
                "Removed {} book(s) titled {:?}",
                before - self.books.len(),
                title
            );
            RemoveOutcome::Removed
        } else {
            RemoveOutcome::NotFound
        }
    }

    /// Writes the whole catalog to `path` as a JSON array, overwriting any
    /// existing file. Filesystem errors propagate.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string(&self.books)?;
        fs::write(path, json)?;
        tracing::info!("Saved {} books to {}", self.books.len(), path.display());
        Ok(())
    }

    /// Replaces the in-memory catalog with the contents of the JSON file at
    /// `path`. A missing file returns `FileNotFound` and leaves the catalog
    /// untouched; malformed or schema-mismatched JSON is a hard error, also
    /// leaving the catalog untouched.
    pub fn import_from_file(&mut self, path: impl AsRef<Path>) -> Result<ImportOutcome> {
        let path = path.as_ref();
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("Catalog file not found: {}", path.display());
                return Ok(ImportOutcome::FileNotFound);
            }
            Err(e) => return Err(e.into()),
        };

        let books: Vec<Book> = serde_json::from_str(&json)?;
        tracing::info!("Loaded {} books from {}", books.len(), path.display());
        self.books = books;
        Ok(ImportOutcome::Loaded)
    }
}
