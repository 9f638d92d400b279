//! `catalog` store: the basic shelf plus search by author.
//!
//! Registered as the default store type.  Storage is delegated to an inner
//! [`BasicStore`]; search is a linear scan so results keep insertion order.

use crate::library::book::Book;
use crate::library::store::{AuthorSearch, Books, Library};

use super::basic::BasicStore;

#[derive(Debug, Default)]
pub struct CatalogStore {
    shelf: BasicStore,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Library for CatalogStore {
    fn store_type(&self) -> &str {
        "catalog"
    }

    fn add(&mut self, book: Book) {
        self.shelf.add(book);
    }

    fn remove(&mut self, title: &str) -> usize {
        self.shelf.remove(title)
    }

    fn books(&self) -> Books<'_> {
        self.shelf.books()
    }

    fn as_author_search(&self) -> Option<&dyn AuthorSearch> {
        Some(self)
    }
}

impl AuthorSearch for CatalogStore {
    fn search_by_author(&self, author: &str) -> Vec<&Book> {
        self.shelf
            .as_slice()
            .iter()
            .filter(|book| book.author() == author)
            .collect()
    }
}
