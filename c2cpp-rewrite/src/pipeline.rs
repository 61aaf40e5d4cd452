//! Rewrite pipeline
//!
//! A [`Pipeline`] is the set of enabled rules. Whatever order rules are
//! enabled in, they always run in [`RuleKind`] order: line-scoped rules first,
//! each feeding the next on every line, then document-scoped rules over the
//! rejoined text. [`Pipeline::convert`] prepends [`PREAMBLE`].

use crate::rules::{RuleKind, RuleScope};
use std::borrow::Cow;
use tracing::debug;

/// Banner written at the top of every converted file.
pub const PREAMBLE: &str = "\
// Converted from C to C++ using automatic conversion script
// Manual review and adjustments may be needed

#include <memory>
#include <vector>
#include <string>
#include <algorithm>

";

/// Result of running the pipeline over a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Rewritten text, without the preamble
    pub text: String,
    /// Number of lines that at least one line-scoped rule changed
    pub changed_lines: usize,
}

/// An ordered, toggleable set of rewrite rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    rules: Vec<RuleKind>,
}

impl Pipeline {
    /// Pipeline with the default rules (everything except `extern-c`).
    pub fn new() -> Self {
        Self::with_rules(RuleKind::DEFAULTS)
    }

    /// Pipeline running exactly `rules`, in canonical order.
    pub fn with_rules(rules: impl IntoIterator<Item = RuleKind>) -> Self {
        let mut rules: Vec<RuleKind> = rules.into_iter().collect();
        rules.sort();
        rules.dedup();
        Pipeline { rules }
    }

    /// Pipeline with no rules; output equals input plus the preamble.
    pub fn empty() -> Self {
        Pipeline { rules: Vec::new() }
    }

    pub fn enable(&mut self, kind: RuleKind) {
        if let Err(pos) = self.rules.binary_search(&kind) {
            self.rules.insert(pos, kind);
        }
    }

    pub fn disable(&mut self, kind: RuleKind) {
        self.rules.retain(|k| *k != kind);
    }

    pub fn is_enabled(&self, kind: RuleKind) -> bool {
        self.rules.contains(&kind)
    }

    /// Enabled rules in the order they are applied.
    pub fn rules(&self) -> &[RuleKind] {
        &self.rules
    }

    fn scoped(&self, scope: RuleScope) -> impl Iterator<Item = RuleKind> + '_ {
        self.rules
            .iter()
            .copied()
            .filter(move |kind| kind.scope() == scope)
    }

    /// Apply every enabled line-scoped rule to a single line.
    pub fn rewrite_line<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let mut text = Cow::Borrowed(line);
        for kind in self.scoped(RuleScope::Line) {
            let next = match kind.rule().rewrite(&text) {
                Cow::Owned(next) => Some(next),
                Cow::Borrowed(_) => None,
            };
            if let Some(next) = next {
                text = Cow::Owned(next);
            }
        }
        text
    }

    /// Rewrite a document: every line through the line rules, lines rejoined
    /// with `\n`, then the document rules over the result.
    pub fn run(&self, source: &str) -> Rewrite {
        let mut changed_lines = 0;
        let lines: Vec<Cow<'_, str>> = source
            .split('\n')
            .map(|line| {
                let rewritten = self.rewrite_line(line);
                if rewritten != line {
                    changed_lines += 1;
                }
                rewritten
            })
            .collect();

        let mut text = lines.join("\n");
        for kind in self.scoped(RuleScope::Document) {
            let next = match kind.rule().rewrite(&text) {
                Cow::Owned(next) => Some(next),
                Cow::Borrowed(_) => None,
            };
            if let Some(next) = next {
                debug!(rule = %kind, "document rule rewrote text");
                text = next;
            }
        }

        debug!(lines = lines.len(), changed_lines, "rewrote document");
        Rewrite {
            text,
            changed_lines,
        }
    }

    /// Rewritten text without the preamble.
    pub fn rewrite_body(&self, source: &str) -> String {
        self.run(source).text
    }

    /// Full conversion: [`PREAMBLE`] followed by the rewritten text.
    pub fn convert(&self, source: &str) -> String {
        let mut output = String::from(PREAMBLE);
        output.push_str(&self.rewrite_body(source));
        output
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert C source text with the default pipeline.
pub fn convert_source(source: &str) -> String {
    Pipeline::new().convert(source)
}
