//! Core Error Types
//!
//! The store itself never errors: mutations targeting unknown ids are
//! silent no-ops, and the core performs no validation of entity
//! contents. Errors exist only at the edges - seed verification and
//! JSON snapshot rendering.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RbacError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RbacError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RbacError>;
