//! Generation error taxonomy.
//!
//! Every variant maps to a distinct user-facing message; the caller is
//! expected to adjust the configuration and retry, except for
//! [`GenerateError::RandomnessUnavailable`] which aborts the attempt outright.

use thiserror::Error;

/// Errors raised while building a password.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// No character category is enabled, so the pool is empty.
    #[error("Please select at least one character type")]
    NoCategorySelected,

    /// The requested length cannot fit one character per enabled category.
    #[error("Password length should be at least {min_required} to include all selected character types")]
    LengthTooShortForCategories { min_required: usize },

    /// The requested length is below the fixed security floor.
    #[error("Password length should be at least {min_required} characters for better security")]
    LengthBelowMinimumSecurity { min_required: usize },

    /// Duplicate exclusion is on and the pool does not hold enough distinct
    /// characters to fill the requested length.
    #[error("Only {available} distinct characters are available with duplicate exclusion enabled")]
    LengthExceedsUniquePool { available: usize },

    /// The OS secure random source failed. There is no fallback to a
    /// non-cryptographic generator.
    #[error("Secure random source unavailable: {0}")]
    RandomnessUnavailable(#[from] rand::Error),

    /// The caller cancelled the generation via its token.
    #[cfg(feature = "async")]
    #[error("Generation cancelled")]
    Cancelled,
}
