//! Catalog domain model.
//!
//! # Responsibility
//! - Define the transfer shapes exchanged with boundary callers.
//! - Keep draft (write) shapes structurally separate from record (read)
//!   shapes so derived fields can never be persisted.
//!
//! # Invariants
//! - Identities are store-assigned integers; drafts never carry one.
//! - Draft validation must pass before any SQL write.

use rust_decimal::Decimal;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod category;
pub mod product;

pub use category::{CategoryDraft, CategoryId, CategoryRecord};
pub use product::{ProductDraft, ProductId, ProductRecord};

/// Rejection reasons produced by draft validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftValidationError {
    /// Name is empty or whitespace-only.
    BlankName,
    /// Price is below zero.
    NegativePrice(Decimal),
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "name must not be blank"),
            Self::NegativePrice(price) => write!(f, "price must not be negative, got {price}"),
        }
    }
}

impl Error for DraftValidationError {}
