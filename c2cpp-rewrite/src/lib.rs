//! # c2cpp-rewrite
//!
//! Heuristic rewriting of C source text into C++ source text.
//!
//! The library is a pipeline of independent regex substitutions. Most of them
//! run line by line; one optional rule runs over the whole document. Nothing
//! here parses C: the output is a starting point for manual porting, not
//! compilable code.
//!
//! - [`rules`]: the individual rewrite rules and the [`Rule`] trait
//! - [`pipeline`]: ordering, toggling and the output preamble
//! - [`walker`]: file and directory conversion on top of the pipeline

pub mod error;
pub mod pipeline;
pub mod rules;
pub mod walker;

pub use error::{ConvertError, Result};
pub use pipeline::{convert_source, Pipeline, PREAMBLE};
pub use rules::{Rule, RuleKind, RuleScope};
pub use walker::{Conversion, Converter, Extensions, SourceKind};
