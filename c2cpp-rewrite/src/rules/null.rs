//! `NULL` becomes `nullptr` wherever it is a whole word.

use super::Rule;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static NULL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bNULL\b").unwrap());

pub struct NullRule;

impl Rule for NullRule {
    fn rewrite<'a>(&self, line: &'a str) -> Cow<'a, str> {
        NULL.replace_all(line, "nullptr")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison() {
        assert_eq!(NullRule.rewrite("if (p == NULL)"), "if (p == nullptr)");
    }

    #[test]
    fn test_every_occurrence() {
        assert_eq!(
            NullRule.rewrite("a = NULL; b = NULL;"),
            "a = nullptr; b = nullptr;"
        );
    }

    #[test]
    fn test_partial_words_untouched() {
        assert_eq!(NullRule.rewrite("NULLABLE"), "NULLABLE");
        assert_eq!(NullRule.rewrite("IS_NULL_PTR"), "IS_NULL_PTR");
    }

    #[test]
    fn test_output_is_stable() {
        let once = NullRule.rewrite("return NULL;").into_owned();
        assert!(matches!(NullRule.rewrite(&once), Cow::Borrowed(_)));
    }
}
