//! Fixed character categories.
//!
//! Categories are a closed set; each carries its alphabet as a given
//! constant. Duplicate exclusion and space padding are formatting options,
//! not categories, and live on [`crate::GenerationConfig`] instead.

/// A named class of characters that can be independently enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl Category {
    /// All categories, in the canonical order mandatory picks are drawn.
    pub const ALL: [Category; 4] = [
        Category::Lowercase,
        Category::Uppercase,
        Category::Numbers,
        Category::Symbols,
    ];

    /// The alphabet this category contributes to the pool.
    pub fn alphabet(self) -> &'static str {
        match self {
            Category::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            Category::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            Category::Numbers => "0123456789",
            Category::Symbols => "!$%&|[](){}:;.,*+-#@<>~",
        }
    }

    /// Stable identifier used in the persisted settings record.
    pub fn id(self) -> &'static str {
        match self {
            Category::Lowercase => "lowercase",
            Category::Uppercase => "uppercase",
            Category::Numbers => "numbers",
            Category::Symbols => "symbols",
        }
    }

    /// Looks a category up by its persisted identifier.
    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.id() == id)
    }
}
