//! Password assembly - validation, fill loop and shuffle.

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::error::GenerateError;
use crate::pool::CharacterPool;
use crate::random::RandomSource;

/// Fixed security floor, enforced regardless of how many categories are
/// enabled.
pub const MIN_SECURE_LENGTH: usize = 8;

/// Builds a password of exactly `length` characters from the pool.
///
/// The output is seeded with the pool's mandatory picks, filled with uniform
/// draws and finished with a Fisher-Yates shuffle so the mandatory characters
/// are not clustered at the front. Under duplicate exclusion a draw that
/// repeats a non-space character already present is rejected and retried;
/// spaces are formatting characters and are always accepted.
///
/// # Arguments
/// * `pool` - The assembled pool and mandatory picks
/// * `length` - Target password length
/// * `exclude_duplicates` - Reject repeated non-space characters
/// * `rng` - Index source driving every draw and swap
/// * `token` - Optional cancellation token (async feature only)
///
/// # Errors
/// * [`GenerateError::LengthTooShortForCategories`] when `length` cannot fit
///   one character per enabled category
/// * [`GenerateError::LengthBelowMinimumSecurity`] when `length` is under
///   [`MIN_SECURE_LENGTH`]
/// * [`GenerateError::LengthExceedsUniquePool`] when exclusion is on and the
///   pool holds fewer distinct non-space characters than `length`; this
///   pre-check is what keeps the retry loop finite
/// * [`GenerateError::RandomnessUnavailable`] when the secure source fails
/// * [`GenerateError::Cancelled`] when the token fires (async feature only)
pub fn build_password(
    pool: &CharacterPool,
    length: usize,
    exclude_duplicates: bool,
    rng: &mut dyn RandomSource,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Result<String, GenerateError> {
    let mandatory = pool.mandatory();

    if length < mandatory.len() {
        #[cfg(feature = "tracing")]
        tracing::debug!(length, required = mandatory.len(), "length below category count");
        return Err(GenerateError::LengthTooShortForCategories {
            min_required: mandatory.len(),
        });
    }
    if length < MIN_SECURE_LENGTH {
        #[cfg(feature = "tracing")]
        tracing::debug!(length, "length below security floor");
        return Err(GenerateError::LengthBelowMinimumSecurity {
            min_required: MIN_SECURE_LENGTH,
        });
    }
    if exclude_duplicates {
        let available = pool.distinct_non_space_count();
        if length > available {
            #[cfg(feature = "tracing")]
            tracing::debug!(length, available, "duplicate exclusion cannot fill length");
            return Err(GenerateError::LengthExceedsUniquePool { available });
        }
    }

    let chars = pool.chars();
    let mut output: Vec<char> = mandatory.to_vec();

    while output.len() < length {
        // Check cancellation before each draw (async only)
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    return Err(GenerateError::Cancelled);
                }
            }
        }

        let candidate = chars[rng.next_index(chars.len())?];
        if exclude_duplicates && candidate != ' ' && output.contains(&candidate) {
            continue;
        }
        output.push(candidate);
    }

    shuffle(&mut output, rng)?;
    Ok(output.into_iter().collect())
}

/// Fisher-Yates pass driven by the secure source. An unbiased permutation,
/// unlike sorting with a random comparator.
fn shuffle(chars: &mut [char], rng: &mut dyn RandomSource) -> Result<(), GenerateError> {
    for i in (1..chars.len()).rev() {
        let j = rng.next_index(i + 1)?;
        chars.swap(i, j);
    }
    Ok(())
}
