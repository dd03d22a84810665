//! Product transfer shapes.
//!
//! # Invariants
//! - `price` is a non-negative fixed-point decimal; binary floating
//!   point never carries a monetary value.
//! - `category_name` on [`ProductRecord`] is a read-time join
//!   projection. It is absent from [`ProductDraft`], so a write can
//!   never persist it.

use super::category::CategoryId;
use super::DraftValidationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Store-assigned product identity.
pub type ProductId = i64;

/// Product as read back from the store, joined with its category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: CategoryId,
    /// Display name of the owning category, computed by join at query
    /// time.
    pub category_name: String,
}

/// Product write shape for create and full-replacement update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: CategoryId,
}

impl ProductDraft {
    /// Creates a draft without a description.
    pub fn new(name: impl Into<String>, price: Decimal, category_id: CategoryId) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            category_id,
        }
    }

    /// Checks draft invariants before persistence.
    ///
    /// The referenced category is not checked here; dangling
    /// `category_id` values are rejected by the store's foreign-key
    /// constraint at write time.
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.name.trim().is_empty() {
            return Err(DraftValidationError::BlankName);
        }
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(DraftValidationError::NegativePrice(self.price));
        }
        Ok(())
    }
}
