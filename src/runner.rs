use std::{
    fmt, io,
    path::{Path, PathBuf},
    str::FromStr,
    time::Instant,
};

use log::{debug, info};
use thiserror::Error;

use crate::{
    config::{ConfigError, Settings},
    engine::{Solution, SolverEngine},
    flat::{self, ParseError},
    graph::{self, Graph, GraphError},
    knapsack, output,
};

#[derive(Error, Debug)]
pub enum RunError {
    #[error("usage: {0}")]
    Usage(String),
    #[error("unknown problem {0:?} (expected one of: knapsack, coloring)")]
    UnknownProblem(String),
    #[error("failed to parse input: {0}")]
    Parse(#[from] ParseError),
    #[error("invalid graph: {0}")]
    Graph(#[from] GraphError),
    #[error("failed to write {}: {source}", .path.display())]
    Output { path: PathBuf, source: io::Error },
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
}

impl RunError {
    /// Process exit code for this kind of failure (sysexits conventions).
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Usage(_) => 64,
            RunError::Parse(_) => 65,
            RunError::Graph(_) => 66,
            RunError::UnknownProblem(_) => 67,
            RunError::Output { .. } => 74,
            RunError::Config(_) => 78,
        }
    }
}

type Result<T> = std::result::Result<T, RunError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Problem {
    Knapsack,
    Coloring,
}

impl FromStr for Problem {
    type Err = RunError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "knapsack" => Ok(Problem::Knapsack),
            "coloring" => Ok(Problem::Coloring),
            other => Err(RunError::UnknownProblem(other.to_string())),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Problem::Knapsack => write!(f, "knapsack"),
            Problem::Coloring => write!(f, "coloring"),
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    /// The knapsack was solved and the result written to `output`.
    Solved { solution: Solution, output: PathBuf },
    /// The coloring graph was built; nothing is written.
    Graph(Graph),
}

pub fn run(problem: Problem, input: &Path, settings: &Settings) -> Result<Outcome> {
    info!("start {} solver on {}", problem, input.display());
    match problem {
        Problem::Knapsack => {
            let engine = settings.engine.engine();
            let target = output::output_path(input, &settings.output_name);
            let solution = run_knapsack(input, &target, &engine)?;
            Ok(Outcome::Solved {
                solution,
                output: target,
            })
        }
        Problem::Coloring => Ok(Outcome::Graph(run_coloring(input)?)),
    }
}

/// parse, build, solve, then replace `target` with the formatted result
pub fn run_knapsack<E: SolverEngine + ?Sized>(input: &Path, target: &Path, engine: &E) -> Result<Solution> {
    let instance = flat::read_knapsack(input)?;
    let model = knapsack::build_model(&instance);

    info!("start solving with {} engine", engine.name());
    let start = Instant::now();
    let solution = engine.solve(&model);
    info!("solver finished in {:?}", start.elapsed());
    info!("solution status: {}", solution.status());

    if solution.is_optimal() {
        info!("solution objective: {}", solution.objective());
        debug!("solution variables: {:?}", solution.assignment());
    } else {
        info!("the problem does not have an optimal solution");
    }

    output::write_solution(target, &solution).map_err(|source| RunError::Output {
        path: target.to_path_buf(),
        source,
    })?;
    Ok(solution)
}

pub fn run_coloring(input: &Path) -> Result<Graph> {
    let instance = flat::read_coloring(input)?;
    let graph = graph::build_graph(&instance)?;
    info!(
        "graph: {} nodes, {} edges, max degree {}",
        graph.node_count(),
        graph.edge_count(),
        graph.max_degree()
    );
    Ok(graph)
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::*;
    use crate::config::EngineKind;
    use crate::engine::{FixedEngine, SolveStatus};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_problem_dispatch_is_closed() {
        assert_eq!("knapsack".parse::<Problem>().unwrap(), Problem::Knapsack);
        assert_eq!("coloring".parse::<Problem>().unwrap(), Problem::Coloring);
        let err = "tsp".parse::<Problem>().unwrap_err();
        assert!(matches!(err, RunError::UnknownProblem(ref name) if name == "tsp"));
        assert_eq!(err.exit_code(), 67);
    }

    #[test]
    fn test_knapsack_end_to_end() {
        init();
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("ks_3_0");
        fs::write(&input, "3 50\n60 10\n100 20\n120 30\n").unwrap();

        for engine in [EngineKind::Mip, EngineKind::Dp] {
            let settings = Settings {
                engine,
                ..Settings::default()
            };
            match run(Problem::Knapsack, &input, &settings).unwrap() {
                Outcome::Solved { solution, output } => {
                    assert_eq!(output, dir.path().join("output.txt"));
                    assert_eq!(solution.assignment(), &[false, true, true]);
                    assert_eq!(fs::read_to_string(&output).unwrap(), "220 1\n0 1 1\n");
                }
                other => panic!("unexpected outcome {:?}", other),
            }
        }
    }

    #[test]
    fn test_non_optimal_engine_writes_empty_solution() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("ks");
        let output = dir.path().join("output.txt");
        fs::write(&input, "1 5\n3 2\n").unwrap();
        fs::write(&output, "42 1\n1\n").unwrap();

        for fixed in [Solution::infeasible(), Solution::other()] {
            let solution = run_knapsack(&input, &output, &FixedEngine(fixed)).unwrap();
            assert_ne!(solution.status(), SolveStatus::Optimal);
            assert_eq!(fs::read_to_string(&output).unwrap(), "0 0\n\n");
        }
    }

    #[test]
    fn test_parse_failure_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("ks");
        let output = dir.path().join("output.txt");
        fs::write(&input, "3 5\n1 1\n").unwrap();
        fs::write(&output, "stale\n").unwrap();

        let err = run_knapsack(&input, &output, &FixedEngine(Solution::other())).unwrap_err();
        assert!(matches!(err, RunError::Parse(ParseError::Truncated { .. })));
        assert_eq!(err.exit_code(), 65);
        assert_eq!(fs::read_to_string(&output).unwrap(), "stale\n");
    }

    #[test]
    fn test_coloring_builds_graph_without_output() {
        init();
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("gc_3_1");
        fs::write(&input, "3 3\n1 2\n2 3\n1 3\n").unwrap();

        match run(Problem::Coloring, &input, &Settings::default()).unwrap() {
            Outcome::Graph(graph) => {
                assert_eq!(graph.node_count(), 3);
                assert_eq!(graph.edge_count(), 3);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(!dir.path().join("output.txt").exists());
    }

    #[test]
    fn test_coloring_self_loop() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("gc");
        fs::write(&input, "1 1\n4 4\n").unwrap();
        let err = run_coloring(&input).unwrap_err();
        assert!(matches!(err, RunError::Graph(GraphError::SelfLoop(_))));
        assert_eq!(err.exit_code(), 66);
    }
}
