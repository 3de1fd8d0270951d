//! # Error Types
//!
//! Domain-specific error types for split-core.
//!
//! ## Where Errors Live
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The bill arithmetic itself NEVER errors: malformed user input is the  │
//! │  normal transient state of a live form, and every such case degrades   │
//! │  to a defined zero/default value.                                       │
//! │                                                                         │
//! │  Errors exist only at two boundaries:                                   │
//! │  ├── ValidationError  - committed records that break business rules    │
//! │  └── FxError          - rate lookups for currencies a table lacks      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, bounds, offending code)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by [`crate::validation`] for committed records only; the
/// live-editing path never sees these.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID, invalid room code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Convenience alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// FX Error
// =============================================================================

/// Currency conversion errors.
///
/// A [`crate::fx::RateTable`] only knows the currencies its provider
/// published; asking for anything else is a caller error, not a silent
/// fallback, because a wrong rate would misprice the whole bill.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FxError {
    #[error("unsupported base currency: {code}")]
    UnsupportedBase { code: String },

    #[error("unsupported target currency: {code}")]
    UnsupportedTarget { code: String },
}

// =============================================================================
// Unit Tests
// =============================================================================
