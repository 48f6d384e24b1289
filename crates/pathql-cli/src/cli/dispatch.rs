//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use pathql_lib::{Marking, OutputFormat};

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::dot::DotArgs;
use crate::commands::generate::TwoCyclesArgs;
use crate::commands::info::InfoArgs;
use crate::commands::run::RunArgs;

pub struct RunParams {
    pub program_path: Option<PathBuf>,
    pub program_text: Option<String>,
    pub graph_dirs: Vec<PathBuf>,
    pub format: OutputFormat,
    pub marking: Marking,
    pub max_states: Option<usize>,
    pub color: ColorChoice,
}

impl RunParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            program_path: m.get_one::<PathBuf>("program_path").cloned(),
            program_text: m.get_one::<String>("program_text").cloned(),
            graph_dirs: parse_graph_dirs(m),
            format: parse_format(m),
            marking: parse_marking(m),
            max_states: m.get_one::<usize>("max_states").copied(),
            color: parse_color(m),
        }
    }
}

impl From<RunParams> for RunArgs {
    fn from(p: RunParams) -> Self {
        Self {
            program_path: p.program_path,
            program_text: p.program_text,
            graph_dirs: p.graph_dirs,
            format: p.format,
            marking: p.marking,
            max_states: p.max_states,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub program_path: Option<PathBuf>,
    pub program_text: Option<String>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            program_path: m.get_one::<PathBuf>("program_path").cloned(),
            program_text: m.get_one::<String>("program_text").cloned(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            program_path: p.program_path,
            program_text: p.program_text,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub program_path: Option<PathBuf>,
    pub program_text: Option<String>,
    pub raw: bool,
    pub trivia: bool,
    pub spans: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            program_path: m.get_one::<PathBuf>("program_path").cloned(),
            program_text: m.get_one::<String>("program_text").cloned(),
            raw: m.get_flag("raw"),
            trivia: m.get_flag("trivia"),
            spans: m.get_flag("spans"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            program_path: p.program_path,
            program_text: p.program_text,
            raw: p.raw,
            trivia: p.trivia,
            spans: p.spans,
            color: p.color.should_colorize(),
        }
    }
}

pub struct InfoParams {
    pub graph: String,
    pub graph_dirs: Vec<PathBuf>,
    pub json: bool,
    pub dump: bool,
}

impl InfoParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph: parse_graph(m),
            graph_dirs: parse_graph_dirs(m),
            json: m.get_flag("json"),
            dump: m.get_flag("dump"),
        }
    }
}

impl From<InfoParams> for InfoArgs {
    fn from(p: InfoParams) -> Self {
        Self {
            graph: p.graph,
            graph_dirs: p.graph_dirs,
            json: p.json,
            dump: p.dump,
        }
    }
}

pub struct DotParams {
    pub graph: String,
    pub graph_dirs: Vec<PathBuf>,
    pub marking: Marking,
    pub output: Option<PathBuf>,
}

impl DotParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph: parse_graph(m),
            graph_dirs: parse_graph_dirs(m),
            marking: parse_marking(m),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<DotParams> for DotArgs {
    fn from(p: DotParams) -> Self {
        Self {
            graph: p.graph,
            graph_dirs: p.graph_dirs,
            marking: p.marking,
            output: p.output,
        }
    }
}

pub struct TwoCyclesParams {
    pub first: u64,
    pub second: u64,
    pub labels: (String, String),
    pub output: Option<PathBuf>,
}

impl TwoCyclesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let mut labels = m
            .get_many::<String>("labels")
            .into_iter()
            .flatten()
            .cloned();
        let first_label = labels.next().unwrap_or_else(|| "a".to_string());
        let second_label = labels.next().unwrap_or_else(|| "b".to_string());

        Self {
            // Both are required; clap rejects the command before we get here.
            first: m.get_one::<u64>("first").copied().unwrap_or(1),
            second: m.get_one::<u64>("second").copied().unwrap_or(1),
            labels: (first_label, second_label),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<TwoCyclesParams> for TwoCyclesArgs {
    fn from(p: TwoCyclesParams) -> Self {
        Self {
            first: p.first,
            second: p.second,
            labels: p.labels,
            output: p.output,
        }
    }
}

/// Verbosity count from `-v`; global, so readable from any subcommand.
pub fn parse_verbosity(m: &ArgMatches) -> u8 {
    m.get_count("verbose")
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

fn parse_marking(m: &ArgMatches) -> Marking {
    match m.get_one::<String>("marking").map(|s| s.as_str()) {
        Some("empty") => Marking::Empty,
        _ => Marking::AllVertices,
    }
}

fn parse_graph(m: &ArgMatches) -> String {
    m.get_one::<String>("graph").cloned().unwrap_or_default()
}

fn parse_graph_dirs(m: &ArgMatches) -> Vec<PathBuf> {
    m.get_many::<PathBuf>("graph_dir")
        .map(|dirs| dirs.cloned().collect())
        .unwrap_or_default()
}
