//! Core domain logic for the product catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{
    CategoryDraft, CategoryId, CategoryRecord, DraftValidationError, ProductDraft, ProductId,
    ProductRecord,
};
pub use repo::{
    CategoryRepository, DeleteOutcome, ProductRepository, RepoError, RepoResult,
    SqliteCategoryRepository, SqliteProductRepository,
};
pub use service::{CategoryService, CategoryServiceError, ProductService, ProductServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
