//! File and directory conversion
//!
//! A thin layer over [`Pipeline`]: read a file, convert it, write the result.
//! Directory mode looks at the immediate entries of the input directory only
//! and converts regular files ending in the source or header extension.
//! Sources get the converted extension, headers keep their name.

use crate::error::{ConvertError, Result};
use crate::pipeline::{Pipeline, PREAMBLE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File extensions the walker recognizes, without the leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extensions {
    pub source: String,
    pub header: String,
    pub converted: String,
}

impl Default for Extensions {
    fn default() -> Self {
        Extensions {
            source: "c".into(),
            header: "h".into(),
            converted: "cpp".into(),
        }
    }
}

/// What kind of convertible file a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Source,
    Header,
}

impl SourceKind {
    /// Classify a file name by its suffix; `None` if it should be skipped.
    pub fn classify(file_name: &str, extensions: &Extensions) -> Option<SourceKind> {
        if has_extension(file_name, &extensions.source) {
            Some(SourceKind::Source)
        } else if has_extension(file_name, &extensions.header) {
            Some(SourceKind::Header)
        } else {
            None
        }
    }
}

fn has_extension(file_name: &str, extension: &str) -> bool {
    file_name
        .strip_suffix(extension)
        .is_some_and(|stem| stem.ends_with('.'))
}

impl Extensions {
    /// Output name for a convertible file: `foo.c` becomes `foo.cpp`, `foo.h`
    /// stays `foo.h`. `None` for names that are not converted.
    pub fn output_file_name(&self, file_name: &str) -> Option<String> {
        match SourceKind::classify(file_name, self)? {
            SourceKind::Source => {
                let stem = &file_name[..file_name.len() - self.source.len()];
                Some(format!("{}{}", stem, self.converted))
            }
            SourceKind::Header => Some(file_name.to_string()),
        }
    }
}

/// One converted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Lines changed by the line rules
    pub changed_lines: usize,
}

/// Runs a [`Pipeline`] over files and directories.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    pipeline: Pipeline,
    extensions: Extensions,
}

impl Converter {
    pub fn new(pipeline: Pipeline, extensions: Extensions) -> Self {
        Converter {
            pipeline,
            extensions,
        }
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn pipeline_mut(&mut self) -> &mut Pipeline {
        &mut self.pipeline
    }

    /// Convert `input` to `output`, choosing directory mode when `input` is a
    /// directory.
    pub fn convert_path(&self, input: &Path, output: &Path) -> Result<Vec<Conversion>> {
        if input.is_dir() {
            self.convert_dir(input, output)
        } else {
            Ok(vec![self.convert_file(input, output)?])
        }
    }

    /// Convert a single file. The output's parent directory must exist.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<Conversion> {
        let source = fs::read_to_string(input).map_err(|source| ConvertError::Read {
            path: input.to_path_buf(),
            source,
        })?;

        let rewrite = self.pipeline.run(&source);
        let mut converted = String::with_capacity(PREAMBLE.len() + rewrite.text.len());
        converted.push_str(PREAMBLE);
        converted.push_str(&rewrite.text);

        fs::write(output, converted).map_err(|source| ConvertError::Write {
            path: output.to_path_buf(),
            source,
        })?;

        info!(
            input = %input.display(),
            output = %output.display(),
            changed_lines = rewrite.changed_lines,
            "converted file"
        );
        Ok(Conversion {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            changed_lines: rewrite.changed_lines,
        })
    }

    /// Convert every recognized file directly inside `input_dir` into
    /// `output_dir`, creating it if needed. Subdirectories are not visited.
    ///
    /// The returned conversions are sorted by input path.
    pub fn convert_dir(&self, input_dir: &Path, output_dir: &Path) -> Result<Vec<Conversion>> {
        fs::create_dir_all(output_dir).map_err(|source| ConvertError::CreateDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let list_err = |source| ConvertError::ListDir {
            path: input_dir.to_path_buf(),
            source,
        };

        let mut conversions = Vec::new();
        for entry in fs::read_dir(input_dir).map_err(list_err)? {
            let entry = entry.map_err(list_err)?;
            let input = entry.path();
            if !input.is_file() {
                continue;
            }

            let Some(output_name) = entry
                .file_name()
                .to_str()
                .and_then(|name| self.extensions.output_file_name(name))
            else {
                debug!(path = %input.display(), "skipping unrecognized file");
                continue;
            };

            conversions.push(self.convert_file(&input, &output_dir.join(output_name))?);
        }

        conversions.sort_by(|a, b| a.input.cmp(&b.input));
        Ok(conversions)
    }
}
