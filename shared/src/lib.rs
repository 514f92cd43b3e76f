//! Shared types for the Wharf logistics backend
//!
//! Domain models, the unified error type, and small utilities used by the
//! order-financials and analytics engine.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult};
pub use serde::{Deserialize, Serialize};
