// Library root: exposes the shelf for the binary and integration tests.
// The binary entry point is src/main.rs.

pub mod config;
pub mod error;
pub mod library;
pub mod logger;
pub mod manager;
pub mod notice;
pub mod shell;

pub use error::AppError;
pub use library::{AuthorSearch, Book, Books, Library};
pub use manager::{LibraryManager, Prompter, SearchOutcome};
pub use notice::{CollectingSink, Notice, NoticeSink, TracingSink};
pub use shell::{Command, SessionEnd, Shell};
