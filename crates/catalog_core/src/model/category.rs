//! Category transfer shapes.
//!
//! # Invariants
//! - `name` is required and non-blank.
//! - A category owns zero or more products by reference; ownership is
//!   tracked in the store, not on this shape.

use super::DraftValidationError;
use serde::{Deserialize, Serialize};

/// Store-assigned category identity.
pub type CategoryId = i64;

/// Category as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
}

/// Category write shape for create and full-replacement update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: Option<String>,
}

impl CategoryDraft {
    /// Creates a draft without a description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Checks draft invariants before persistence.
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.name.trim().is_empty() {
            return Err(DraftValidationError::BlankName);
        }
        Ok(())
    }
}
