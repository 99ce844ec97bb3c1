use thiserror::Error;

/// Integrity violations found while building a [`crate::catalog::Catalog`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate project id `{id}` at position {index}")]
    DuplicateId { id: String, index: usize },
    #[error("project at position {index} has an empty id")]
    EmptyId { index: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(pub String);
