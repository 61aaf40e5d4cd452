//! C standard library includes become their C++ counterparts.
//!
//! Only the exact `#include <name.h>` spelling is recognized.

use super::Rule;
use std::borrow::Cow;

/// C header to C++ header, checked in this order.
pub const HEADER_MAPPINGS: &[(&str, &str)] = &[
    ("stdio.h", "cstdio"),
    ("stdlib.h", "cstdlib"),
    ("string.h", "cstring"),
    ("math.h", "cmath"),
    ("assert.h", "cassert"),
    ("time.h", "ctime"),
    ("stdint.h", "cstdint"),
    ("stdbool.h", "cstdbool"),
];

pub struct HeaderRule;

impl Rule for HeaderRule {
    fn rewrite<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let mut text = Cow::Borrowed(line);
        for (c_header, cpp_header) in HEADER_MAPPINGS {
            let from = format!("#include <{}>", c_header);
            if text.contains(&from) {
                let to = format!("#include <{}>", cpp_header);
                text = Cow::Owned(text.replace(&from, &to));
            }
        }
        text
    }
}
