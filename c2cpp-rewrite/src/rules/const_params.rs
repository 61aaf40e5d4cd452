//! `char *name` becomes `const char *name`.
//!
//! The pattern only sees the type and the name, not whether it sits in a
//! parameter list, so locals, struct fields and already-const declarations
//! are qualified as well.

use super::Rule;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static CHAR_POINTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(char\s*\*\s*)([a-zA-Z_][a-zA-Z0-9_]*)").unwrap());

pub struct ConstParamsRule;

impl Rule for ConstParamsRule {
    fn rewrite<'a>(&self, line: &'a str) -> Cow<'a, str> {
        CHAR_POINTER.replace_all(line, "const ${1}${2}")
    }
}
