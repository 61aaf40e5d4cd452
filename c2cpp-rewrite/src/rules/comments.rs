//! Block comments that open and close on the same line become line comments.
//!
//! Only the first `/* ... */` span on a line is rewritten. Comments that span
//! several lines are never touched, since each line is seen on its own.

use super::Rule;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*(.*?)\*/").unwrap());

pub struct CommentRule;

impl Rule for CommentRule {
    fn rewrite<'a>(&self, line: &'a str) -> Cow<'a, str> {
        if !(line.contains("/*") && line.contains("*/")) {
            return Cow::Borrowed(line);
        }
        BLOCK_COMMENT.replace(line, |caps: &Captures| {
            let body = caps[1].trim();
            if body.is_empty() {
                "//".to_string()
            } else {
                format!("// {}", body)
            }
        })
    }
}
