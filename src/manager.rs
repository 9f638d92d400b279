//! Library manager: façade between command dispatch and the store.
//!
//! Owns exactly one [`Library`], fixed at construction.  Every outcome is
//! reported to the [`NoticeSink`]; the return values carry the same outcome
//! for callers that need it programmatically.

use std::sync::Arc;

use tracing::debug;

use crate::error::AppError;
use crate::library::{Book, Library};
use crate::notice::{Notice, NoticeSink};

pub const SEARCH_PROMPT: &str = "Enter author name to search: ";

/// Source of follow-up answers (author name, book fields).
///
/// Implementations return the raw line; the manager trims it.
/// [`AppError::InputClosed`] signals that no more input will arrive.
pub trait Prompter {
    fn ask(&mut self, prompt: &str) -> Result<String, AppError>;
}

/// Result of [`LibraryManager::search_by_author`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The store lacks the capability; no prompt was issued.
    Unsupported,
    /// Matches in insertion order, possibly none.
    Found(Vec<Book>),
}

pub struct LibraryManager {
    library: Box<dyn Library>,
    sink: Arc<dyn NoticeSink>,
}

impl LibraryManager {
    pub fn new(library: Box<dyn Library>, sink: Arc<dyn NoticeSink>) -> Self {
        Self { library, sink }
    }

    pub fn library(&self) -> &dyn Library {
        self.library.as_ref()
    }

    pub fn supports_search(&self) -> bool {
        self.library.as_author_search().is_some()
    }

    /// Forward a notice that did not come from a store operation.
    pub fn report(&self, notice: Notice) {
        self.sink.notify(notice);
    }

    pub fn add_book(&mut self, title: &str, author: &str, year: &str) {
        let book = Book::new(title, author, year);
        self.library.add(book);
        self.sink.notify(Notice::Added { title: title.to_string() });
    }

    /// Returns the number of books removed.
    pub fn remove_book(&mut self, title: &str) -> usize {
        let removed = self.library.remove(title);
        debug!(title, removed, "remove");
        let notice = if removed > 0 {
            Notice::Removed { title: title.to_string() }
        } else {
            Notice::NotFound { title: title.to_string() }
        };
        self.sink.notify(notice);
        removed
    }

    /// Report every book in insertion order. Returns the number listed.
    pub fn show_books(&self) -> usize {
        if self.library.is_empty() {
            self.sink.notify(Notice::Empty);
            return 0;
        }
        self.sink.notify(Notice::ListingHeader);
        let mut listed = 0;
        for book in self.library.books() {
            self.sink.notify(Notice::Entry(book.clone()));
            listed += 1;
        }
        listed
    }

    /// Search by author if the store supports it, asking `prompter` for the
    /// author name. Stores without the capability are never prompted for.
    pub fn search_by_author(
        &self,
        prompter: &mut dyn Prompter,
    ) -> Result<SearchOutcome, AppError> {
        let Some(search) = self.library.as_author_search() else {
            debug!(store_type = self.library.store_type(), "search not supported");
            self.sink.notify(Notice::SearchUnsupported);
            return Ok(SearchOutcome::Unsupported);
        };

        let answer = prompter.ask(SEARCH_PROMPT)?;
        let author = answer.trim();
        let found: Vec<Book> = search
            .search_by_author(author)
            .into_iter()
            .cloned()
            .collect();

        if found.is_empty() {
            self.sink.notify(Notice::NoBooksBy { author: author.to_string() });
        } else {
            self.sink.notify(Notice::SearchHeader { author: author.to_string() });
            for book in &found {
                self.sink.notify(Notice::Entry(book.clone()));
            }
        }
        Ok(SearchOutcome::Found(found))
    }
}
