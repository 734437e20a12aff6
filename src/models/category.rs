//! Category label for expenses
//!
//! Categories are free text. There is no fixed set to validate against; the
//! only rule is that a blank entry falls back to a default label.

use std::fmt;

/// Label used when the user leaves the category blank
pub const FALLBACK_CATEGORY: &str = "Other";

/// A non-empty, trimmed category label
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(String);

impl Category {
    /// Build a category from raw user input
    ///
    /// Surrounding whitespace is removed. Blank input becomes `fallback`.
    pub fn from_input(input: &str, fallback: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            Self(fallback.to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Build a category, using "Other" for blank input
    pub fn new(name: impl AsRef<str>) -> Self {
        Self::from_input(name.as_ref(), FALLBACK_CATEGORY)
    }

    /// Get the category label
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_becomes_other() {
        assert_eq!(Category::new("").name(), "Other");
        assert_eq!(Category::new("   ").name(), "Other");
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(Category::new("  Food  ").name(), "Food");
    }

    #[test]
    fn test_free_text_kept_verbatim() {
        assert_eq!(Category::new("coffee & snacks").name(), "coffee & snacks");
    }

    #[test]
    fn test_custom_fallback() {
        assert_eq!(Category::from_input("", "Misc").name(), "Misc");
    }
}
