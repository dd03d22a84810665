//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per entity.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must validate drafts before SQL mutations.
//! - Absence of a row is a normal outcome (`None`, `false`,
//!   [`DeleteOutcome::NotFound`]), never an error.
//! - Read paths must reject invalid persisted state instead of masking
//!   it.

use crate::db::DbError;
use crate::model::DraftValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod category_repo;
pub mod product_repo;

pub use category_repo::{CategoryRepository, SqliteCategoryRepository};
pub use product_repo::{ProductRepository, SqliteProductRepository};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for catalog persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(DraftValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted catalog data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DraftValidationError> for RepoError {
    fn from(value: DraftValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Outcome of a category delete.
///
/// Replaces a bare boolean so callers can map refusal reasons to
/// distinct responses (absent vs. still-referenced).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Row existed and was removed.
    Deleted,
    /// No row has this identity.
    NotFound,
    /// Row exists but products still reference it; nothing was removed.
    HasDependents,
}
