//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep boundary layers decoupled from storage details.

pub mod category_service;
pub mod product_service;

pub use category_service::{CategoryService, CategoryServiceError};
pub use product_service::{ProductService, ProductServiceError};
