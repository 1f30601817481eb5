//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  └── CoreError        - Catalog contract violations                    │
//! │                                                                         │
//! │  console errors (apps/console)                                         │
//! │  └── AppError         - Terminal I/O, config, closed input             │
//! │                                                                         │
//! │  Flow: CoreError → AppError → message printed by the menu loop         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing product is NOT an error: [`Inventory::find`] returns `None` and
//! [`Inventory::remove`] returns `false`.
//!
//! [`Inventory::find`]: crate::Inventory::find
//! [`Inventory::remove`]: crate::Inventory::remove

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Every id up to `u32::MAX` has been issued; ids are never reused.
    #[error("No product ids left to issue")]
    IdsExhausted,

    /// A price was negative, NaN or infinite.
    ///
    /// ## When This Occurs
    /// The console validates prices before they reach the core, so this
    /// only fires when a caller bypasses the input layer.
    #[error("Price must be a non-negative number, got {price}")]
    InvalidPrice { price: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::IdsExhausted.to_string(),
            "No product ids left to issue"
        );

        let err = CoreError::InvalidPrice { price: -1.5 };
        assert_eq!(
            err.to_string(),
            "Price must be a non-negative number, got -1.5"
        );
    }
}
