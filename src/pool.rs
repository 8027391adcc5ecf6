//! Character pool assembly.

use std::collections::HashSet;

use crate::config::GenerationConfig;
use crate::error::GenerateError;
use crate::random::RandomSource;

/// The combined alphabet for one generation request, plus the per-category
/// mandatory picks that guarantee every enabled category shows up in the
/// output.
#[derive(Debug)]
pub struct CharacterPool {
    chars: Vec<char>,
    mandatory: Vec<char>,
}

impl CharacterPool {
    /// Assembles the pool from the enabled categories.
    ///
    /// One mandatory character is drawn per enabled category, in canonical
    /// category order. When `include_spaces` is set the pool becomes
    /// `pool + " " + pool + " "`: a space-padded copy of itself, so spaces
    /// are sampled roughly in proportion to the pool size rather than at a
    /// fixed weight. That weighting is deliberate behaviour, kept as is.
    ///
    /// # Errors
    ///
    /// [`GenerateError::NoCategorySelected`] if no category is enabled,
    /// [`GenerateError::RandomnessUnavailable`] if a mandatory draw fails.
    pub fn build(
        config: &GenerationConfig,
        rng: &mut dyn RandomSource,
    ) -> Result<Self, GenerateError> {
        let mut chars: Vec<char> = Vec::new();
        let mut mandatory: Vec<char> = Vec::new();

        for category in config.enabled_categories() {
            let alphabet: Vec<char> = category.alphabet().chars().collect();
            let pick = alphabet[rng.next_index(alphabet.len())?];
            chars.extend_from_slice(&alphabet);
            mandatory.push(pick);
        }

        if chars.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("pool build rejected: no category selected");
            return Err(GenerateError::NoCategorySelected);
        }

        if config.include_spaces {
            let base = chars.clone();
            chars.push(' ');
            chars.extend(base);
            chars.push(' ');
        }

        Ok(Self { chars, mandatory })
    }

    /// Characters available for random draws.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Pool size before duplicate exclusion, the figure the entropy model
    /// uses.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Mandatory picks, one per enabled category, in canonical order.
    pub fn mandatory(&self) -> &[char] {
        &self.mandatory
    }

    /// Distinct characters excluding spaces, the budget available when
    /// duplicate exclusion is enabled.
    pub fn distinct_non_space_count(&self) -> usize {
        self.chars
            .iter()
            .filter(|&&c| c != ' ')
            .collect::<HashSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::random::{OsRandom, ScriptedSource};

    fn config(categories: &[Category]) -> GenerationConfig {
        let mut config = GenerationConfig::default();
        for category in Category::ALL {
            config.set_enabled(category, categories.contains(&category));
        }
        config
    }

    #[test]
    fn test_build_concatenates_enabled_alphabets() {
        let mut rng = OsRandom;
        let pool =
            CharacterPool::build(&config(&[Category::Lowercase, Category::Numbers]), &mut rng)
                .unwrap();

        let expected: Vec<char> = "abcdefghijklmnopqrstuvwxyz0123456789".chars().collect();
        assert_eq!(pool.chars(), expected.as_slice());
        assert_eq!(pool.len(), 36);
    }

    #[test]
    fn test_mandatory_pick_per_category_in_order() {
        let mut rng = OsRandom;
        let pool = CharacterPool::build(&config(&Category::ALL), &mut rng).unwrap();

        assert_eq!(pool.mandatory().len(), 4);
        for (pick, category) in pool.mandatory().iter().zip(Category::ALL) {
            assert!(
                category.alphabet().contains(*pick),
                "{pick:?} not drawn from {}",
                category.id()
            );
        }
    }

    #[test]
    fn test_mandatory_pick_uses_the_scripted_index() {
        let mut rng = ScriptedSource::new(&[2]);
        let pool = CharacterPool::build(&config(&[Category::Lowercase]), &mut rng).unwrap();
        assert_eq!(pool.mandatory(), &['c']);
    }

    #[test]
    fn test_no_category_selected() {
        let mut rng = OsRandom;
        let result = CharacterPool::build(&config(&[]), &mut rng);
        assert!(matches!(result, Err(GenerateError::NoCategorySelected)));
    }

    #[test]
    fn test_no_category_selected_even_with_spaces() {
        let mut empty = config(&[]);
        empty.include_spaces = true;
        let mut rng = OsRandom;
        let result = CharacterPool::build(&empty, &mut rng);
        assert!(matches!(result, Err(GenerateError::NoCategorySelected)));
    }

    #[test]
    fn test_spaces_embed_a_padded_copy_of_the_pool() {
        let mut with_spaces = config(&[Category::Numbers]);
        with_spaces.include_spaces = true;
        let mut rng = OsRandom;
        let pool = CharacterPool::build(&with_spaces, &mut rng).unwrap();

        // 10 digits -> digits + ' ' + digits + ' '
        assert_eq!(pool.len(), 2 * 10 + 2);
        let as_string: String = pool.chars().iter().collect();
        assert_eq!(as_string, "0123456789 0123456789 ");
    }

    #[test]
    fn test_distinct_non_space_count_ignores_duplication() {
        let mut with_spaces = config(&[Category::Lowercase]);
        with_spaces.include_spaces = true;
        let mut rng = OsRandom;
        let pool = CharacterPool::build(&with_spaces, &mut rng).unwrap();

        assert_eq!(pool.len(), 54);
        assert_eq!(pool.distinct_non_space_count(), 26);
    }
}
