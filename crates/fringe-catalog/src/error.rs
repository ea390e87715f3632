//! Catalog error taxonomy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Target is not known to the identifier resolver. Fatal for that
    /// target; the survey drops it and carries on.
    #[error("target {0:?} not found in the identifier catalog")]
    NotFound(String),

    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed catalog response: {0}")]
    Malformed(String),
}
