//! Synthetic graph generators.

use std::path::PathBuf;

use pathql_core::generate;
use pathql_lib::loader::write_edge_list;

use super::output::write_output_or_exit;

pub struct TwoCyclesArgs {
    pub first: u64,
    pub second: u64,
    pub labels: (String, String),
    pub output: Option<PathBuf>,
}

pub fn two_cycles(args: TwoCyclesArgs) {
    let labels = (args.labels.0.as_str(), args.labels.1.as_str());
    let text = generate::two_cycles(args.first, args.second, labels)
        .map_err(|e| e.to_string())
        .and_then(|graph| write_edge_list(&graph).map_err(|e| e.to_string()));

    match text {
        Ok(text) => write_output_or_exit(args.output.as_deref(), &text),
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    }
}
