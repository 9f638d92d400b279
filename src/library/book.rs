use std::fmt;

/// A single book record. Immutable once constructed.
///
/// There is no identity beyond the three fields: two books with the same
/// title may sit on the same shelf.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    title: String,
    author: String,
    year: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Publication year exactly as entered; not validated as a number.
    pub fn year(&self) -> &str {
        &self.year
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Year: {}",
            self.title, self.author, self.year
        )
    }
}
