//! Product use-case service.
//!
//! # Responsibility
//! - Provide product create/update/get/list/delete APIs with created
//!   records echoed back to the caller, including the joined category
//!   name.
//!
//! # Invariants
//! - `update` uses full-replacement semantics; omitted optional fields
//!   overwrite, they are not preserved.
//! - A dangling `category_id` surfaces as a repository error from the
//!   store's foreign-key constraint.

use crate::model::{DraftValidationError, ProductDraft, ProductId, ProductRecord};
use crate::repo::{ProductRepository, RepoError, RepoResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for product use-cases.
#[derive(Debug)]
pub enum ProductServiceError {
    /// Draft failed validation before any write.
    InvalidDraft(DraftValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for ProductServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDraft(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent product state: {details}"),
        }
    }
}

impl Error for ProductServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDraft(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::InconsistentState(_) => None,
        }
    }
}

impl From<RepoError> for ProductServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::InvalidDraft(err),
            other => Self::Repo(other),
        }
    }
}

/// Product service facade over repository implementations.
pub struct ProductService<R: ProductRepository> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one product and echoes back the stored record with its
    /// joined category name.
    pub fn create_product(
        &self,
        draft: ProductDraft,
    ) -> Result<ProductRecord, ProductServiceError> {
        let id = self.repo.create_product(&draft)?;
        self.repo
            .get_product(id)?
            .ok_or(ProductServiceError::InconsistentState(
                "created product not found in read-back",
            ))
    }

    /// Replaces all mutable fields of one product.
    ///
    /// The caller is responsible for any path-id vs body-id agreement
    /// check; this layer only reports whether the row existed.
    pub fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<bool, ProductServiceError> {
        Ok(self.repo.update_product(id, &draft)?)
    }

    /// Gets one product by id.
    pub fn get_product(&self, id: ProductId) -> RepoResult<Option<ProductRecord>> {
        self.repo.get_product(id)
    }

    /// Lists all products with their category names.
    pub fn list_products(&self) -> RepoResult<Vec<ProductRecord>> {
        self.repo.list_products()
    }

    /// Deletes one product; `false` when absent.
    pub fn delete_product(&self, id: ProductId) -> RepoResult<bool> {
        self.repo.delete_product(id)
    }
}
