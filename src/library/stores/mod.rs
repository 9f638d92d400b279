//! Store implementations and the by-name registry.

pub mod basic;
pub mod catalog;

use tracing::debug;

use crate::error::AppError;
use super::store::Library;

/// Store type names accepted by [`build`].
pub const STORE_TYPES: &[&str] = &["basic", "catalog"];

/// Construct an empty store of the given type.
pub fn build(store_type: &str) -> Result<Box<dyn Library>, AppError> {
    let store: Box<dyn Library> = match store_type {
        "basic" => Box::new(basic::BasicStore::new()),
        "catalog" => Box::new(catalog::CatalogStore::new()),
        other => {
            return Err(AppError::Store(format!(
                "unknown store type '{other}' (expected one of: {})",
                STORE_TYPES.join(", ")
            )));
        }
    };
    debug!(store_type, searchable = store.as_author_search().is_some(), "store built");
    Ok(store)
}
