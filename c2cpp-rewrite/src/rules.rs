//! Rewrite rules
//!
//! Every rule is a stateless text substitution. Line-scoped rules see one line
//! at a time, document-scoped rules see the rejoined text. Rules never fail:
//! text that does not match a rule's pattern comes back borrowed and unchanged.
//!
//! [`RuleKind`] names each rule and fixes the canonical order the pipeline
//! applies them in (declaration order below).

pub mod allocation;
pub mod cast;
pub mod comments;
pub mod const_params;
pub mod extern_c;
pub mod headers;
pub mod null;

pub use allocation::AllocationRule;
pub use cast::CastRule;
pub use comments::CommentRule;
pub use const_params::ConstParamsRule;
pub use extern_c::ExternCRule;
pub use headers::{HeaderRule, HEADER_MAPPINGS};
pub use null::NullRule;

use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// What a rule is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Applied to each line independently
    Line,
    /// Applied once to the whole rejoined document
    Document,
}

impl fmt::Display for RuleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            RuleScope::Line => "line",
            RuleScope::Document => "document",
        })
    }
}

/// A single text rewrite.
///
/// Implementations return `Cow::Borrowed` when nothing matched so the
/// pipeline can skip the allocation.
pub trait Rule: Sync {
    fn scope(&self) -> RuleScope {
        RuleScope::Line
    }

    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// Names of the available rules, in the order the pipeline applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    Cast,
    Allocation,
    ConstParams,
    Comments,
    Null,
    Headers,
    ExternC,
}

impl RuleKind {
    /// Every rule in canonical order.
    pub const ALL: [RuleKind; 7] = [
        RuleKind::Cast,
        RuleKind::Allocation,
        RuleKind::ConstParams,
        RuleKind::Comments,
        RuleKind::Null,
        RuleKind::Headers,
        RuleKind::ExternC,
    ];

    /// Rules a pipeline runs unless told otherwise.
    pub const DEFAULTS: [RuleKind; 6] = [
        RuleKind::Cast,
        RuleKind::Allocation,
        RuleKind::ConstParams,
        RuleKind::Comments,
        RuleKind::Null,
        RuleKind::Headers,
    ];

    /// Stable name used by configuration files and the command line.
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::Cast => "cast",
            RuleKind::Allocation => "allocation",
            RuleKind::ConstParams => "const-params",
            RuleKind::Comments => "comments",
            RuleKind::Null => "null",
            RuleKind::Headers => "headers",
            RuleKind::ExternC => "extern-c",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RuleKind::Cast => "C-style casts to static_cast<T>(expr)",
            RuleKind::Allocation => "malloc/calloc/free to new[]/delete[]",
            RuleKind::ConstParams => "prefix char* names with const",
            RuleKind::Comments => "single-line /* */ comments to //",
            RuleKind::Null => "NULL to nullptr",
            RuleKind::Headers => "C standard headers to their <cxxx> names",
            RuleKind::ExternC => "extern \"C\" on function declarations",
        }
    }

    pub fn enabled_by_default(self) -> bool {
        Self::DEFAULTS.contains(&self)
    }

    pub fn scope(self) -> RuleScope {
        self.rule().scope()
    }

    /// The rule implementation behind this name.
    pub fn rule(self) -> &'static dyn Rule {
        match self {
            RuleKind::Cast => &CastRule,
            RuleKind::Allocation => &AllocationRule,
            RuleKind::ConstParams => &ConstParamsRule,
            RuleKind::Comments => &CommentRule,
            RuleKind::Null => &NullRule,
            RuleKind::Headers => &HeaderRule,
            RuleKind::ExternC => &ExternCRule,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run `regex.replace_all` on text that may already have been rewritten,
/// keeping it borrowed for as long as nothing matches.
pub(crate) fn replace_all_chained<'a, R: regex::Replacer>(
    text: Cow<'a, str>,
    regex: &regex::Regex,
    replacer: R,
) -> Cow<'a, str> {
    match text {
        Cow::Borrowed(s) => regex.replace_all(s, replacer),
        Cow::Owned(s) => {
            let replaced = match regex.replace_all(&s, replacer) {
                Cow::Owned(next) => Some(next),
                Cow::Borrowed(_) => None,
            };
            Cow::Owned(replaced.unwrap_or(s))
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown rule '{0}'")]
pub struct UnknownRule(pub String);

impl FromStr for RuleKind {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}
