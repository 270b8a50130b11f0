use std::{env, io::Write, path::Path, process};

use env_logger::Env;
use flatopt::{
    config::Settings,
    runner::{self, Outcome, Problem, RunError},
};
use log::info;

const USAGE: &str = "flatopt [-v] <knapsack|coloring> <path to problem file>";

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let verbose = matches!(args.first().map(String::as_str), Some("-v" | "--verbose"));
    if verbose {
        args.remove(0);
    }

    env_logger::Builder::from_env(Env::default().default_filter_or(if verbose { "debug" } else { "info" }))
        .format(|buf, record| writeln!(buf, "{} - {}", buf.timestamp_seconds(), record.args()))
        .init();

    if let Err(err) = run(&args) {
        eprintln!("{}", err);
        eprintln!("execution failed");
        process::exit(err.exit_code());
    }
}

fn run(args: &[String]) -> Result<(), RunError> {
    let (problem, input) = match args {
        [problem, input] => (problem.parse::<Problem>()?, Path::new(input)),
        _ => return Err(RunError::Usage(USAGE.to_string())),
    };
    let settings = Settings::from_env()?;

    match runner::run(problem, input, &settings)? {
        Outcome::Solved { output, .. } => info!("wrote {}", output.display()),
        Outcome::Graph(graph) => info!("built graph with {} nodes", graph.node_count()),
    }
    Ok(())
}
