//! Notices: every informational message the shelf reports.
//!
//! Outcomes such as "not found" or "invalid command" are not errors; they are
//! reported as [`Notice`]s to a [`NoticeSink`] handed to the manager at
//! construction.  The binary wires in [`TracingSink`]; tests use
//! [`CollectingSink`] to assert on what was reported.

use std::fmt;
use std::sync::Mutex;

use tracing::info;

use crate::library::Book;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Added { title: String },
    Removed { title: String },
    NotFound { title: String },
    Empty,
    ListingHeader,
    /// One book line in a listing or search result.
    Entry(Book),
    SearchHeader { author: String },
    NoBooksBy { author: String },
    SearchUnsupported,
    InvalidCommand,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { title } => write!(f, "Book '{title}' added to the library."),
            Self::Removed { title } => write!(f, "Book '{title}' removed from the library."),
            Self::NotFound { title } => write!(f, "Book '{title}' not found in the library."),
            Self::Empty => f.write_str("Library is empty."),
            Self::ListingHeader => f.write_str("Library books:"),
            Self::Entry(book) => write!(f, "{book}"),
            Self::SearchHeader { author } => write!(f, "Books by {author}:"),
            Self::NoBooksBy { author } => write!(f, "No books found by {author}."),
            Self::SearchUnsupported => {
                f.write_str("This library does not support search by author.")
            }
            Self::InvalidCommand => f.write_str("Invalid command. Please try again."),
        }
    }
}

/// Receiver for notices.
pub trait NoticeSink: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Emits each notice as an `INFO` tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NoticeSink for TracingSink {
    fn notify(&self, notice: Notice) {
        info!("{notice}");
    }
}

/// Keeps every notice in memory, in the order received.
#[derive(Debug, Default)]
pub struct CollectingSink {
    notices: Mutex<Vec<Notice>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything received so far.
    pub fn notices(&self) -> Vec<Notice> {
        match self.notices.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Rendered text of everything received so far.
    pub fn lines(&self) -> Vec<String> {
        self.notices().iter().map(ToString::to_string).collect()
    }

    /// Drain and return everything received so far.
    pub fn take(&self) -> Vec<Notice> {
        match self.notices.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl NoticeSink for CollectingSink {
    fn notify(&self, notice: Notice) {
        match self.notices.lock() {
            Ok(mut guard) => guard.push(notice),
            Err(poisoned) => poisoned.into_inner().push(notice),
        }
    }
}
