//! Library trait: defines the operations a book store supports.
//!
//! Stores are pluggable backends selected by type name at startup.  Every
//! store implements the core shelf operations; optional capabilities are
//! exposed through query methods whose default returns `None`, so a store
//! only opts into what it actually provides.

use std::iter::FusedIterator;
use std::slice;

use super::book::Book;

/// Lazy iterator over a store's books in insertion order.
///
/// Cloning yields an independent cursor; calling [`Library::books`] again
/// restarts from the first book.
#[derive(Debug, Clone)]
pub struct Books<'a> {
    inner: slice::Iter<'a, Book>,
}

impl<'a> Books<'a> {
    pub fn new(books: &'a [Book]) -> Self {
        Self { inner: books.iter() }
    }
}

impl<'a> Iterator for Books<'a> {
    type Item = &'a Book;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Books<'_> {}

impl FusedIterator for Books<'_> {}

/// Pluggable in-memory book store.
pub trait Library {
    /// Unique type name for this store (e.g. `"catalog"`).
    fn store_type(&self) -> &str;

    /// Append a book to the end of the shelf.
    fn add(&mut self, book: Book);

    /// Remove every book whose title equals `title` exactly.
    /// Returns how many were removed; zero is a normal outcome.
    fn remove(&mut self, title: &str) -> usize;

    fn books(&self) -> Books<'_>;

    fn len(&self) -> usize {
        self.books().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ── Capabilities ──────────────────────────────────────────────────

    /// Search-by-author capability, if this store provides it.
    fn as_author_search(&self) -> Option<&dyn AuthorSearch> {
        None
    }
}

/// Optional capability: look books up by author.
pub trait AuthorSearch {
    /// Books whose author equals `author` exactly, in insertion order.
    fn search_by_author(&self, author: &str) -> Vec<&Book>;
}
