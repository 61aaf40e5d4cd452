//! `extern "C"` linkage on function declarations
//!
//! Runs on the whole document rather than per line, so a declaration whose
//! parameter list wraps over several lines is still caught. Anything shaped
//! like `word word(...);` counts as a declaration: calls preceded by a keyword
//! (`return f(x);`) are wrapped as well. Not part of the default pipeline.

use super::{Rule, RuleScope};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+\s+\w+\s*\([^)]*\)\s*;)").unwrap());

pub struct ExternCRule;

impl Rule for ExternCRule {
    fn scope(&self) -> RuleScope {
        RuleScope::Document
    }

    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        DECLARATION.replace_all(text, "extern \"C\" ${1}")
    }
}
