mod cli;
mod commands;

use tracing_subscriber::EnvFilter;

use cli::{
    AstParams, CheckParams, DotParams, InfoParams, RunParams, TwoCyclesParams, build_cli,
    parse_verbosity,
};

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(parse_verbosity(&matches));

    match matches.subcommand() {
        Some(("run", m)) => {
            let params = RunParams::from_matches(m);
            commands::run::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("info", m)) => {
            let params = InfoParams::from_matches(m);
            commands::info::run(params.into());
        }
        Some(("dot", m)) => {
            let params = DotParams::from_matches(m);
            commands::dot::run(params.into());
        }
        Some(("gen", m)) => match m.subcommand() {
            Some(("two-cycles", m)) => {
                let params = TwoCyclesParams::from_matches(m);
                commands::generate::two_cycles(params.into());
            }
            _ => unreachable!("clap should have caught this"),
        },
        _ => unreachable!("clap should have caught this"),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbosity {
            0 => "warn",
            1 => "warn,pathql_lib=debug,pathql_core=debug",
            _ => "warn,pathql_lib=trace,pathql_core=trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(verbosity > 1)
        .init();
}
