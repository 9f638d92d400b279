//! `basic` store: a plain ordered shelf without any optional capability.
//!
//! Books are kept in a `Vec` in insertion order; there is no secondary
//! index.  Asking this store for search yields `None`.

use crate::library::book::Book;
use crate::library::store::{Books, Library};

#[derive(Debug, Default)]
pub struct BasicStore {
    books: Vec<Book>,
}

impl BasicStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn as_slice(&self) -> &[Book] {
        &self.books
    }
}

impl Library for BasicStore {
    fn store_type(&self) -> &str {
        "basic"
    }

    fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    fn remove(&mut self, title: &str) -> usize {
        let before = self.books.len();
        self.books.retain(|book| book.title() != title);
        before - self.books.len()
    }

    fn books(&self) -> Books<'_> {
        Books::new(&self.books)
    }
}
