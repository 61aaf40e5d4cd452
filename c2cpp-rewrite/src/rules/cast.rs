//! C-style cast rewrite
//!
//! `(T)expr` and `(T*)expr` become `static_cast<T>(expr)`. The expression is
//! everything up to the next `,`, `)` or `;`, so anything longer than a single
//! operand gets cut in the wrong place. Parenthesized identifiers that are not
//! casts at all (`(x) + 1`) are rewritten too; there is no symbol table to tell
//! them apart.
//!
//! On a line the allocation rule will rewrite (`T* p = (T*)malloc(...)` and
//! the `calloc` form), the cast on the allocation call is left untouched so
//! that rule still sees it. Every other cast on `malloc`/`calloc` is rewritten
//! like any other.

use super::allocation;
use super::Rule;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static CAST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([A-Za-z0-9_]+\s*\**)\)\s*([^,);]+)").unwrap());

static ALLOCATION_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:malloc|calloc)\s*\(").unwrap());

pub struct CastRule;

impl Rule for CastRule {
    fn rewrite<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let allocation_follows = allocation::rewrites_line(line);
        CAST.replace_all(line, |caps: &Captures| {
            let expr = &caps[2];
            if allocation_follows && ALLOCATION_CALL.is_match(expr) {
                caps[0].to_string()
            } else {
                format!("static_cast<{}>({})", &caps[1], expr)
            }
        })
    }
}
