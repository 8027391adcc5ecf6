//! Entropy-based strength classification.
//!
//! The model is `bits = log2(pool_size) * length`, with the pool size taken
//! before duplicate exclusion. That overstates the search space slightly when
//! exclusion is on; it is a display heuristic, not a security proof.

use std::fmt;

/// Discrete strength bucket, ordered weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    /// User-facing label.
    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "Very Weak",
            StrengthTier::Weak => "Weak",
            StrengthTier::Moderate => "Moderate",
            StrengthTier::Strong => "Strong",
            StrengthTier::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Entropy estimate and the tier it falls into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthReport {
    pub bits: f64,
    pub tier: StrengthTier,
}

/// Classifies a generation by pool size and target length.
///
/// Thresholds in bits, half-open: `<28` very weak, `<36` weak, `<60`
/// moderate, `<128` strong, else very strong.
pub fn classify(pool_size: usize, length: usize) -> StrengthReport {
    let bits = (pool_size as f64).log2() * length as f64;
    let tier = if bits < 28.0 {
        StrengthTier::VeryWeak
    } else if bits < 36.0 {
        StrengthTier::Weak
    } else if bits < 60.0 {
        StrengthTier::Moderate
    } else if bits < 128.0 {
        StrengthTier::Strong
    } else {
        StrengthTier::VeryStrong
    };
    StrengthReport { bits, tier }
}
