//! Command-line interface for c2cpp
//! Converts a C file, or every C source and header in a directory, into C++.
//!
//! Usage:
//!   c2cpp `<input_file.c>` `<output_file.cpp>`       - Convert a single file
//!   c2cpp `<input_directory>` `<output_directory>`   - Convert every .c and .h file
//!   c2cpp --list-rules                               - List the rewrite rules

mod logging;

use anyhow::Context;
use c2cpp_config::Loader;
use c2cpp_rewrite::rules::UnknownRule;
use c2cpp_rewrite::{Converter, Pipeline, RuleKind};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};
use std::process;

/// Picked up from the working directory when present.
const LOCAL_CONFIG: &str = "c2cpp.toml";

const USAGE: &str = "\
Usage: c2cpp input_file.c output_file.cpp
   or: c2cpp input_directory output_directory";

fn parse_rule(name: &str) -> Result<RuleKind, UnknownRule> {
    name.parse()
}

fn command() -> Command {
    Command::new("c2cpp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Heuristic C to C++ source conversion (review the output by hand)")
        .override_usage(USAGE.trim_start_matches("Usage: "))
        .arg(
            Arg::new("input")
                .help("C file or directory to convert")
                .value_parser(clap::value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Output file, or output directory when the input is a directory")
                .value_parser(clap::value_parser!(PathBuf))
                .index(2),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the defaults and ./c2cpp.toml")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("enable")
                .long("enable")
                .value_name("RULE")
                .help("Enable a rule (e.g., 'extern-c'); may be repeated")
                .value_parser(parse_rule)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("disable")
                .long("disable")
                .value_name("RULE")
                .help("Disable a rule (e.g., 'const-params'); may be repeated")
                .value_parser(parse_rule)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("list-rules")
                .long("list-rules")
                .help("List the rewrite rules and whether they are enabled")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more detail to stderr (-v, -vv)")
                .action(ArgAction::Count),
        )
}

fn main() -> anyhow::Result<()> {
    let matches = command().get_matches();
    logging::init(matches.get_count("verbose"));

    let converter = build_converter(&matches)?;

    if matches.get_flag("list-rules") {
        handle_list_rules_command(converter.pipeline());
        return Ok(());
    }

    let (Some(input), Some(output)) = (
        matches.get_one::<PathBuf>("input"),
        matches.get_one::<PathBuf>("output"),
    ) else {
        println!("{}", USAGE);
        process::exit(1);
    };

    handle_convert_command(&converter, input, output)
}

/// Layer `./c2cpp.toml`, the `--config` file and the rule toggles over the
/// defaults.
fn build_converter(matches: &ArgMatches) -> anyhow::Result<Converter> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    let config = loader.build().context("failed to load configuration")?;

    let mut converter = config.converter();
    let pipeline = converter.pipeline_mut();
    for kind in matches.get_many::<RuleKind>("enable").into_iter().flatten() {
        pipeline.enable(*kind);
    }
    for kind in matches.get_many::<RuleKind>("disable").into_iter().flatten() {
        pipeline.disable(*kind);
    }
    tracing::debug!(rules = ?pipeline.rules(), "pipeline configured");

    Ok(converter)
}

/// Handle a file or directory conversion
fn handle_convert_command(
    converter: &Converter,
    input: &Path,
    output: &Path,
) -> anyhow::Result<()> {
    let directory_mode = input.is_dir();
    let conversions = converter
        .convert_path(input, output)
        .with_context(|| format!("failed to convert {}", input.display()))?;

    for conversion in &conversions {
        if directory_mode {
            println!(
                "Converting {} to {}",
                conversion.input.display(),
                conversion.output.display()
            );
        }
        println!(
            "Conversion complete. Output written to {}",
            conversion.output.display()
        );
    }
    Ok(())
}

/// Handle the --list-rules flag
fn handle_list_rules_command(pipeline: &Pipeline) {
    println!("Available rewrite rules (applied in this order):\n");

    for kind in RuleKind::ALL {
        let state = if pipeline.is_enabled(kind) { "on" } else { "off" };
        println!(
            "  {:<14}{:<10}{:<5}{}",
            kind.name(),
            kind.scope(),
            state,
            kind.description()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn test_rule_toggles() {
        let matches = command().get_matches_from([
            "c2cpp",
            "--enable",
            "extern-c",
            "--disable",
            "cast",
            "in.c",
            "out.cpp",
        ]);
        let converter = build_converter(&matches).unwrap();
        assert!(converter.pipeline().is_enabled(RuleKind::ExternC));
        assert!(!converter.pipeline().is_enabled(RuleKind::Cast));
        assert!(converter.pipeline().is_enabled(RuleKind::Null));
    }

    #[test]
    fn test_unknown_rule_is_rejected() {
        let result = command().try_get_matches_from(["c2cpp", "--enable", "tabs"]);
        assert!(result.is_err());
    }
}
