//! Word-level tokenizer for course-description prose
//!
//! The text is lower-cased and split on whitespace once. A cursor then walks
//! the word list, trying each recognition rule in priority order and dropping
//! any word that matches nothing.

use crate::core::models::Token;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Subject prefixes recognized as the first half of a course code
static KNOWN_SUBJECTS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["cosc", "engl", "math", "phys"].into_iter().collect());

const PREREQUISITE_MARKER: &str = "prerequisite:";
// Spelling matches the calendar source.
const COREQUISITE_MARKER: &str = "correquisite:";

/// Returns true if `subject` (any case) is one of the known subject prefixes
#[must_use]
pub fn is_known_subject(subject: &str) -> bool {
    KNOWN_SUBJECTS.contains(subject.to_ascii_lowercase().as_str())
}

/// Strip trailing non-digit characters from a course number
///
/// # Returns
/// The remaining prefix, or `None` if nothing is left (the word had no digits
/// at its end, e.g. a bare mention of "course").
#[must_use]
pub fn strip_course_number(word: &str) -> Option<&str> {
    let number = word.trim_end_matches(|c: char| !c.is_ascii_digit());
    (!number.is_empty()).then_some(number)
}

/// Build a course key (`<subject>_<number>`) from a subject and a raw number word
#[must_use]
pub fn course_key(subject: &str, number_word: &str) -> Option<String> {
    if subject.is_empty() {
        return None;
    }
    strip_course_number(number_word).map(|number| format!("{}_{number}", subject.to_lowercase()))
}

/// Lazy, finite token stream over one text span
///
/// A tokenizer cannot be rewound; build a new one for every text span.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    words: Vec<String>,
    pos: usize,
}

impl Tokenizer {
    /// Create a tokenizer over `text`
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            words: text
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            pos: 0,
        }
    }

    /// Number of words not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.words.len() - self.pos
    }

    fn word(&self, offset: usize) -> Option<&str> {
        self.words.get(self.pos + offset).map(String::as_str)
    }

    fn parse_course_code(&mut self) -> Option<Token> {
        if self.remaining() < 2 {
            return None;
        }
        let subject = self.word(0)?;
        if !KNOWN_SUBJECTS.contains(subject) {
            return None;
        }
        let key = course_key(subject, self.word(1)?)?;
        self.pos += 2;
        Some(Token::CourseCode(key))
    }

    fn parse_marker(&mut self) -> Option<Token> {
        // Corequisite markers are tagged as prerequisites, so they never close the zone.
        match self.word(0)? {
            PREREQUISITE_MARKER | COREQUISITE_MARKER => {
                self.pos += 1;
                Some(Token::Prerequisite)
            }
            _ => None,
        }
    }

    fn parse_phrase(&mut self) -> Option<Token> {
        let token = match (self.word(0)?, self.word(1)?) {
            ("one", "of") => Token::AnyOf,
            ("all", "of") => Token::AllOf,
            _ => return None,
        };
        // Only one word is consumed; "of" is dropped as noise on the next pass.
        self.pos += 1;
        Some(token)
    }

    /// Return the next token, or `None` once the words are exhausted
    pub fn next_token(&mut self) -> Option<Token> {
        while self.pos < self.words.len() {
            if let Some(token) = self
                .parse_course_code()
                .or_else(|| self.parse_marker())
                .or_else(|| self.parse_phrase())
            {
                return Some(token);
            }
            self.pos += 1;
        }
        None
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Tokenizer {}

/// Tokenize `text` into a lazy token stream
#[must_use]
pub fn tokenize(text: &str) -> Tokenizer {
    Tokenizer::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<Token> {
        tokenize(text).collect()
    }

    fn code(key: &str) -> Token {
        Token::CourseCode(key.to_string())
    }

    #[test]
    fn test_strip_course_number() {
        assert_eq!(strip_course_number("111"), Some("111"));
        assert_eq!(strip_course_number("111,"), Some("111"));
        assert_eq!(strip_course_number("121)."), Some("121"));
        assert_eq!(strip_course_number("1a1b"), Some("1a1"));
        assert_eq!(strip_course_number("abcdef"), None);
        assert_eq!(strip_course_number(""), None);
    }

    #[test]
    fn test_known_subjects() {
        for subject in ["cosc", "ENGL", "Math", "phys"] {
            assert!(is_known_subject(subject), "{subject} should be known");
        }
        assert!(!is_known_subject("chem"));
        assert!(!is_known_subject("course"));
    }

    #[test]
    fn test_course_code_normalization() {
        for subject in ["cosc", "engl", "math", "phys"] {
            for suffix in ["", ",", ".", ");", "abc"] {
                let text = format!("{} 304{suffix}", subject.to_uppercase());
                assert_eq!(tokens(&text), vec![code(&format!("{subject}_304"))], "{text}");
            }
        }
    }

    #[test]
    fn test_no_digit_suffix_is_not_a_course() {
        assert!(tokens("cosc abcdef").is_empty());
        assert!(tokens("MATH course").is_empty());
    }

    #[test]
    fn test_guard_falls_through_to_next_word() {
        // "cosc" followed by a non-number is discarded, but the next pair is still seen
        assert_eq!(tokens("cosc cosc 111"), vec![code("cosc_111")]);
    }

    #[test]
    fn test_unknown_subject_is_discarded() {
        assert!(tokens("CHEM 111 BIOL 116").is_empty());
    }

    #[test]
    fn test_single_subject_word_at_end() {
        assert!(tokens("see cosc").is_empty());
    }

    #[test]
    fn test_markers() {
        assert_eq!(
            tokens("Prerequisite: One of COSC 111, COSC 121."),
            vec![Token::Prerequisite, Token::AnyOf, code("cosc_111"), code("cosc_121")]
        );
        assert_eq!(
            tokens("prerequisite: all of math 100 phys 112"),
            vec![Token::Prerequisite, Token::AllOf, code("math_100"), code("phys_112")]
        );
    }

    #[test]
    fn test_corequisite_is_tagged_as_prerequisite() {
        assert_eq!(
            tokens("Correquisite: COSC 111"),
            vec![Token::Prerequisite, code("cosc_111")]
        );
    }

    #[test]
    fn test_trailing_one_does_not_fault() {
        assert!(tokens("choose one").is_empty());
        assert!(tokens("one").is_empty());
        assert!(tokens("all").is_empty());
    }

    #[test]
    fn test_phrase_consumes_one_word() {
        let mut tokenizer = tokenize("one of cosc 111");
        assert_eq!(tokenizer.next_token(), Some(Token::AnyOf));
        assert_eq!(tokenizer.remaining(), 3);
        assert_eq!(tokenizer.next_token(), Some(code("cosc_111")));
        assert_eq!(tokenizer.remaining(), 0);
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let mut tokenizer = tokenize("cosc 111");
        assert_eq!(tokenizer.next_token(), Some(code("cosc_111")));
        assert_eq!(tokenizer.next_token(), None);
        assert_eq!(tokenizer.next_token(), None);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(tokens("").is_empty());
        assert!(tokens("   \n\t ").is_empty());
    }
}
