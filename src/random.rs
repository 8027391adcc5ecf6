//! Cryptographically secure index source.
//!
//! All randomness in the crate flows through [`RandomSource`] so that the
//! engine can be tested with a scripted source. The production implementation
//! is [`OsRandom`], backed by the operating system CSPRNG; a failure of that
//! source surfaces as [`GenerateError::RandomnessUnavailable`] and is never
//! papered over with a non-cryptographic generator.

use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::GenerateError;

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Returns a uniform index in `[0, max)`.
    ///
    /// `max` must be at least 1.
    fn next_index(&mut self, max: usize) -> Result<usize, GenerateError>;
}

/// [`RandomSource`] backed by the operating system CSPRNG.
#[derive(Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_index(&mut self, max: usize) -> Result<usize, GenerateError> {
        assert!(max > 0, "next_index requires max >= 1");
        let bound = max as u64;
        // Modulo over the raw draw is biased; resample draws falling into the
        // truncated final group so every residue is equally likely.
        let tail = (u64::MAX % bound).wrapping_add(1) % bound;
        let mut buf = [0u8; 8];
        loop {
            OsRng.try_fill_bytes(&mut buf)?;
            let draw = u64::from_le_bytes(buf);
            if tail == 0 || draw <= u64::MAX - tail {
                return Ok((draw % bound) as usize);
            }
        }
    }
}

/// Deterministic source for tests: replays queued indices, reduced modulo
/// the requested bound, and falls back to 0 when the script runs out.
#[cfg(test)]
pub(crate) struct ScriptedSource(pub std::collections::VecDeque<usize>);

#[cfg(test)]
impl ScriptedSource {
    pub fn new(script: &[usize]) -> Self {
        Self(script.iter().copied().collect())
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_index(&mut self, max: usize) -> Result<usize, GenerateError> {
        assert!(max > 0, "next_index requires max >= 1");
        Ok(self.0.pop_front().unwrap_or(0) % max)
    }
}
