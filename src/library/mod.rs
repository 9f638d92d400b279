//! Library subsystem: book records and pluggable in-memory stores.
//!
//! ```text
//! Library (trait)            AuthorSearch (capability)
//!   ├── BasicStore  "basic"     ✗
//!   └── CatalogStore "catalog"  ✓
//! ```
//!
//! All data lives in process memory and is discarded when the process exits.

pub mod book;
pub mod store;
pub mod stores;

pub use book::Book;
pub use store::{AuthorSearch, Books, Library};
