//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Stock, activation and order failures           │
//! │  └── ValidationError  - Bad arguments (names, prices, quantities)      │
//! │                                                                         │
//! │  storefront-cli errors (separate crate)                                │
//! │  └── ShellError       - Terminal I/O and configuration failures        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → shell prints "Order failed: ..."  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, amounts)
//! 3. Errors are enum variants, never String
//! 4. Errors are returned to the caller, never logged or swallowed here

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Every variant maps onto one logical [`ErrorKind`]; callers that only care
/// about the category should match on [`CoreError::kind`].
#[derive(Debug, Error)]
pub enum CoreError {
    /// A purchase was attempted on a product that is not active.
    ///
    /// ## When This Occurs
    /// - The product sold out (stock reached zero)
    /// - The product was deactivated by hand
    #[error("Cannot buy inactive product {name}")]
    InactiveProduct { name: String },

    /// Insufficient stock to complete the purchase.
    ///
    /// ## User Workflow
    /// ```text
    /// Order line (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Google Pixel 7", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// Shell shows: "Order failed: Not enough quantity available ..."
    /// ```
    #[error("Not enough quantity available for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A limited product was bought above its per-order cap.
    #[error("Cannot purchase more than {maximum} of {name} per order (requested {requested})")]
    LimitExceeded {
        name: String,
        maximum: i64,
        requested: i64,
    },

    /// An order line references a product that is not in the store or is
    /// currently inactive.
    #[error("Product {product} not available or inactive")]
    ProductUnavailable { product: String },

    /// A line cost or order total does not fit in [`Money`](crate::money::Money).
    ///
    /// Only reachable with absurd quantities, mostly on unlimited products
    /// where no stock check bounds the request.
    #[error("{what} is too large to compute")]
    AmountTooLarge { what: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Logical error categories, independent of the message payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidState,
    InsufficientStock,
    LimitExceeded,
    ProductUnavailable,
}

impl CoreError {
    /// Returns the logical category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::InactiveProduct { .. } => ErrorKind::InvalidState,
            CoreError::InsufficientStock { .. } => ErrorKind::InsufficientStock,
            CoreError::LimitExceeded { .. } => ErrorKind::LimitExceeded,
            CoreError::ProductUnavailable { .. } => ErrorKind::ProductUnavailable,
            CoreError::AmountTooLarge { .. } | CoreError::Validation(_) => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when an argument doesn't meet requirements: empty names,
/// negative prices or stock, non-positive purchase quantities.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    MustNotBeNegative { field: String },
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
        let err = CoreError::InsufficientStock {
            name: "Google Pixel 7".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Not enough quantity available for Google Pixel 7: available 3, requested 5"
        );

        let err = CoreError::LimitExceeded {
            name: "USB Drive".to_string(),
            maximum: 2,
            requested: 3,
        };
        assert_eq!(
            err.to_string(),
            "Cannot purchase more than 2 of USB Drive per order (requested 3)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price cannot be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_error_kinds() {
        let inactive = CoreError::InactiveProduct {
            name: "x".to_string(),
        };
        assert_eq!(inactive.kind(), ErrorKind::InvalidState);

        let missing = CoreError::ProductUnavailable {
            product: "x".to_string(),
        };
        assert_eq!(missing.kind(), ErrorKind::ProductUnavailable);

        let overflow = CoreError::AmountTooLarge {
            what: "Cost of Windows License".to_string(),
        };
        assert_eq!(overflow.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            overflow.to_string(),
            "Cost of Windows License is too large to compute"
        );
    }
}
