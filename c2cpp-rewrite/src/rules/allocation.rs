//! Heap allocation rewrite
//!
//! Three independent substitutions, applied in this order:
//!
//! 1. `T* p = (T*)malloc(sizeof(U) * n)` becomes `T* p = new U[n]`
//! 2. `T* p = (T*)calloc(n, sizeof(U))` becomes `T* p = new U[n](); // Zero-initialized`
//! 3. `free(x)` becomes `delete[] x`
//!
//! Only the matched span is replaced. Whatever followed it on the line (the
//! closing `;` of the statement, say) is carried over verbatim, even when the
//! result no longer reads well.

use super::{replace_all_chained, Rule};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static MALLOC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([A-Za-z0-9_]+\s*\*\s*[A-Za-z0-9_]+)\s*=\s*\(\s*[A-Za-z0-9_]+\s*\*\s*\)\s*malloc\s*\(\s*sizeof\s*\(\s*([A-Za-z0-9_]+)\s*\)\s*\*\s*([^)]+)\)",
    )
    .unwrap()
});

static CALLOC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([A-Za-z0-9_]+\s*\*\s*[A-Za-z0-9_]+)\s*=\s*\(\s*[A-Za-z0-9_]+\s*\*\s*\)\s*calloc\s*\(\s*([^,]+),\s*sizeof\s*\(\s*([A-Za-z0-9_]+)\s*\)\s*\)",
    )
    .unwrap()
});

static FREE: Lazy<Regex> = Lazy::new(|| Regex::new(r"free\s*\(\s*([^)]+)\)").unwrap());

/// Whether the `malloc` or `calloc` substitution applies somewhere in `line`.
pub(super) fn rewrites_line(line: &str) -> bool {
    MALLOC.is_match(line) || CALLOC.is_match(line)
}

pub struct AllocationRule;

impl Rule for AllocationRule {
    fn rewrite<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let text = MALLOC.replace_all(line, |caps: &Captures| {
            format!("{} = new {}[{}]", &caps[1], &caps[2], caps[3].trim())
        });
        let text = replace_all_chained(text, &CALLOC, |caps: &Captures| {
            format!(
                "{} = new {}[{}](); // Zero-initialized",
                &caps[1],
                &caps[3],
                caps[2].trim()
            )
        });
        replace_all_chained(text, &FREE, |caps: &Captures| {
            format!("delete[] {}", caps[1].trim())
        })
    }
}
