//! Generated name values and casing rules.

use serde::{Deserialize, Serialize};

/// A generated name.
///
/// `first` is always populated. `last` is empty when no surname was requested
/// or when the culture has no surname concept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NameResult {
    /// Given name.
    pub first: String,
    /// Surname, possibly empty.
    pub last: String,
}

impl NameResult {
    /// Builds a result from its parts.
    #[must_use]
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }

    /// Returns `true` when the result carries a surname.
    #[must_use]
    pub fn has_last(&self) -> bool {
        !self.last.is_empty()
    }

    /// Formats the name for display.
    ///
    /// Prints `First` when the surname is empty, otherwise `First Last`, or
    /// `Last First` when `reverse` is set.
    ///
    /// # Example
    ///
    /// ```
    /// use namegen::NameResult;
    ///
    /// let name = NameResult::new("Astrid", "Lindberg");
    /// assert_eq!(name.display(false), "Astrid Lindberg");
    /// assert_eq!(name.display(true), "Lindberg Astrid");
    /// assert_eq!(NameResult::new("Kai", "").display(true), "Kai");
    /// ```
    #[must_use]
    pub fn display(&self, reverse: bool) -> String {
        if !self.has_last() {
            return self.first.clone();
        }
        if reverse {
            format!("{} {}", self.last, self.first)
        } else {
            format!("{} {}", self.first, self.last)
        }
    }
}

/// Title-cases a name: the first letter of every word is upper-cased and the
/// remaining letters lower-cased.
///
/// Words are separated by whitespace or hyphens.
///
/// # Example
///
/// ```
/// use namegen::title_case;
///
/// assert_eq!(title_case("haruto"), "Haruto");
/// assert_eq!(title_case("MARIE-claire"), "Marie-Claire");
/// assert_eq!(title_case("de la cruz"), "De La Cruz");
/// ```
#[must_use]
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if ch.is_whitespace() || ch == '-' {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", "")]
    #[case("a", "A")]
    #[case("kealoha", "Kealoha")]
    #[case("McCarthy", "Mccarthy")]
    #[case("anne-marie", "Anne-Marie")]
    #[case("van der berg", "Van Der Berg")]
    #[case("OBRIEN", "Obrien")]
    fn title_case_normalises_words(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(title_case(raw), expected);
    }

    #[test]
    fn title_case_is_idempotent() {
        let once = title_case("yamamoto");
        assert_eq!(title_case(&once), once);
    }

    #[rstest]
    #[case(false, "Keiko Tanaka")]
    #[case(true, "Tanaka Keiko")]
    fn display_respects_order(#[case] reverse: bool, #[case] expected: &str) {
        let name = NameResult::new("Keiko", "Tanaka");
        assert_eq!(name.display(reverse), expected);
    }

    #[test]
    fn display_omits_missing_surname() {
        let name = NameResult::new("Noa", "");
        assert!(!name.has_last());
        assert_eq!(name.display(false), "Noa");
    }
}
