//! Generation configuration.

use crate::category::Category;

/// User-selected constraints for one generation request.
///
/// `exclude_duplicates` and `include_spaces` are formatting flags: they never
/// produce a mandatory character and do not count toward the category
/// minimum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Target password length.
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    /// Reject draws that repeat a non-space character already present.
    pub exclude_duplicates: bool,
    /// Augment the pool with spaces (see `CharacterPool::build`).
    pub include_spaces: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: true,
            exclude_duplicates: false,
            include_spaces: false,
        }
    }
}

impl GenerationConfig {
    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Lowercase => self.lowercase,
            Category::Uppercase => self.uppercase,
            Category::Numbers => self.numbers,
            Category::Symbols => self.symbols,
        }
    }

    pub fn set_enabled(&mut self, category: Category, enabled: bool) {
        match category {
            Category::Lowercase => self.lowercase = enabled,
            Category::Uppercase => self.uppercase = enabled,
            Category::Numbers => self.numbers = enabled,
            Category::Symbols => self.symbols = enabled,
        }
    }

    /// Enabled categories in canonical order.
    pub fn enabled_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }

    pub fn category_count(&self) -> usize {
        self.enabled_categories().len()
    }
}
