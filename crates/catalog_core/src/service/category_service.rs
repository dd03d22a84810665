//! Category use-case service.
//!
//! # Responsibility
//! - Provide category create/update/get/list/delete APIs with created
//!   records echoed back to the caller.
//!
//! # Invariants
//! - `update` uses full-replacement semantics; omitted optional fields
//!   overwrite, they are not preserved.
//! - Delete refusal reasons stay distinguishable via
//!   [`DeleteOutcome`].

use crate::model::{CategoryDraft, CategoryId, CategoryRecord, DraftValidationError};
use crate::repo::{CategoryRepository, DeleteOutcome, RepoError, RepoResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for category use-cases.
#[derive(Debug)]
pub enum CategoryServiceError {
    /// Draft failed validation before any write.
    InvalidDraft(DraftValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for CategoryServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDraft(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent category state: {details}")
            }
        }
    }
}

impl Error for CategoryServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDraft(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::InconsistentState(_) => None,
        }
    }
}

impl From<RepoError> for CategoryServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::InvalidDraft(err),
            other => Self::Repo(other),
        }
    }
}

/// Category service facade over repository implementations.
pub struct CategoryService<R: CategoryRepository> {
    repo: R,
}

impl<R: CategoryRepository> CategoryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one category and echoes back the stored record.
    pub fn create_category(
        &self,
        draft: CategoryDraft,
    ) -> Result<CategoryRecord, CategoryServiceError> {
        let id = self.repo.create_category(&draft)?;
        self.repo
            .get_category(id)?
            .ok_or(CategoryServiceError::InconsistentState(
                "created category not found in read-back",
            ))
    }

    /// Replaces all mutable fields of one category.
    ///
    /// The caller is responsible for any path-id vs body-id agreement
    /// check; this layer only reports whether the row existed.
    pub fn update_category(
        &self,
        id: CategoryId,
        draft: CategoryDraft,
    ) -> Result<bool, CategoryServiceError> {
        Ok(self.repo.update_category(id, &draft)?)
    }

    /// Gets one category by id.
    pub fn get_category(&self, id: CategoryId) -> RepoResult<Option<CategoryRecord>> {
        self.repo.get_category(id)
    }

    /// Lists all categories.
    pub fn list_categories(&self) -> RepoResult<Vec<CategoryRecord>> {
        self.repo.list_categories()
    }

    /// Deletes one category unless products still reference it.
    pub fn delete_category(&self, id: CategoryId) -> RepoResult<DeleteOutcome> {
        self.repo.delete_category(id)
    }
}
