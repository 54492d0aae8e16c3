//! Course key and description derivation from calendar titles
//!
//! Titles look like `COSC_O 111 (3) Computer Programming I`: subject,
//! number, credit marker, then the human-readable name.

use super::tokenizer::course_key;
use crate::core::error::{CourseGraphError, Result};

/// Key and description parsed from one course title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseTitle {
    /// Normalized course key (e.g. `cosc_111`)
    pub key: String,
    /// Title words after the credit marker
    pub description: String,
}

impl CourseTitle {
    /// Parse a course title
    ///
    /// The subject is the leading alphabetic run of the first word, so campus
    /// suffixes such as `COSC_O` normalize to the same key as body mentions.
    /// The number keeps its digits with trailing non-digits removed.
    ///
    /// # Errors
    /// Returns [`CourseGraphError::InvalidTitleFormat`] if the title has fewer
    /// than three words, or the subject or number normalizes to nothing.
    pub fn parse(title: &str) -> Result<Self> {
        let invalid = || CourseGraphError::InvalidTitleFormat {
            title: title.trim().to_string(),
        };

        let words: Vec<&str> = title.split_whitespace().collect();
        if words.len() < 3 {
            return Err(invalid());
        }

        let subject: String = words[0]
            .chars()
            .take_while(char::is_ascii_alphabetic)
            .collect();
        let key = course_key(&subject, words[1]).ok_or_else(invalid)?;

        Ok(Self {
            key,
            description: words[3..].join(" "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_campus_suffixed_title() {
        let title = CourseTitle::parse("COSC_O 111 (3) Computer Programming I").unwrap();
        assert_eq!(title.key, "cosc_111");
        assert_eq!(title.description, "Computer Programming I");
    }

    #[test]
    fn test_parse_plain_title() {
        let title = CourseTitle::parse("  MATH 100  (3)\n Differential   Calculus ").unwrap();
        assert_eq!(title.key, "math_100");
        assert_eq!(title.description, "Differential Calculus");
    }

    #[test]
    fn test_number_suffix_stripped() {
        let title = CourseTitle::parse("PHYS 112A (3) Mechanics").unwrap();
        assert_eq!(title.key, "phys_112");
    }

    #[test]
    fn test_three_words_gives_empty_description() {
        let title = CourseTitle::parse("ENGL 112 (3)").unwrap();
        assert_eq!(title.key, "engl_112");
        assert!(title.description.is_empty());
    }

    #[test]
    fn test_too_short_title_rejected() {
        for bad in ["", "COSC", "COSC 111"] {
            assert!(
                matches!(
                    CourseTitle::parse(bad),
                    Err(CourseGraphError::InvalidTitleFormat { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_number_without_digits_rejected() {
        assert!(CourseTitle::parse("COSC topics (3) Special Topics").is_err());
    }

    #[test]
    fn test_subject_without_letters_rejected() {
        assert!(CourseTitle::parse("_O 111 (3) Mystery").is_err());
    }
}
