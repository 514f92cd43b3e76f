//! Unified error type for the engine
//!
//! Engine-level failures are plain return values, so a caller can distinguish
//! "no data" (valid, empty aggregates) from "bad input" (rejected request)
//! from "policy violation" (discount authorization failure). Degenerate
//! arithmetic (zero denominators) never reaches this type; it yields zero at
//! the computation site.

use thiserror::Error;

/// Standard error codes surfaced alongside messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppErrorCode {
    /// Caller-supplied data malformed (400)
    Validation,
    /// Discount exceeds the acting user's ceiling (403)
    DiscountLimit,
}

impl AppErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation => "E0002",
            Self::DiscountLimit => "E2101",
        }
    }

    /// Get the default message for this error
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Validation => "Validation failed",
            Self::DiscountLimit => "Discount exceeds maximum allowed",
        }
    }
}

impl std::fmt::Display for AppErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-supplied data is malformed
    #[error("{message}")]
    Validation { message: String },

    /// A line-item discount exceeds the acting user's ceiling
    #[error("Discount of {requested}% exceeds your maximum allowed discount of {max_allowed}%")]
    DiscountLimitExceeded { requested: f64, max_allowed: f64 },
}

impl AppError {
    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a DiscountLimitExceeded error
    pub fn discount_limit(requested: f64, max_allowed: f64) -> Self {
        Self::DiscountLimitExceeded {
            requested,
            max_allowed,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> AppErrorCode {
        match self {
            Self::Validation { .. } => AppErrorCode::Validation,
            Self::DiscountLimitExceeded { .. } => AppErrorCode::DiscountLimit,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Result type for engine operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_limit_message_carries_ceiling() {
        let err = AppError::discount_limit(25.0, 20.0);
        assert_eq!(err.error_code(), AppErrorCode::DiscountLimit);
        assert!(err.message().contains("20%"));
        assert!(err.message().contains("25%"));
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(AppErrorCode::Validation.code(), "E0002");
        assert_eq!(AppErrorCode::DiscountLimit.code(), "E2101");
        assert_eq!(AppErrorCode::Validation.to_string(), "E0002");
    }

    #[test]
    fn test_validation_message_passthrough() {
        let err = AppError::validation("Order must have at least one item");
        assert_eq!(err.message(), "Order must have at least one item");
    }
}
