use std::{
    fs, io,
    path::{Path, PathBuf},
};

use itertools::Itertools;
use log::debug;

use crate::engine::Solution;

pub const DEFAULT_OUTPUT_NAME: &str = "output.txt";

/// Objective values this close to an integer are written as that integer.
const INTEGRALITY_TOLERANCE: f64 = 1e-6;

/// Renders the two-line result: `<objective> <status>` where status is 1 for
/// optimal and 0 otherwise, then the space separated 0/1 assignment (empty
/// unless optimal).
pub fn format_solution(solution: &Solution) -> String {
    let (objective, flag, assignment) = if solution.is_optimal() {
        let assignment = solution
            .assignment()
            .iter()
            .map(|&selected| if selected { "1" } else { "0" })
            .join(" ");
        (format_objective(solution.objective()), 1, assignment)
    } else {
        ("0".to_string(), 0, String::new())
    };
    format!("{} {}\n{}\n", objective, flag, assignment)
}

fn format_objective(value: f64) -> String {
    let rounded = value.round();
    let value = if (value - rounded).abs() < INTEGRALITY_TOLERANCE {
        rounded
    } else {
        value
    };
    // turns -0 into 0
    format!("{}", value + 0.0)
}

/// The output artifact lives next to the input file.
pub fn output_path(input: &Path, file_name: &str) -> PathBuf {
    match input.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Replaces whatever is at `path` with the formatted solution.
pub fn write_solution(path: &Path, solution: &Solution) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => debug!("removed previous {}", path.display()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    fs::write(path, format_solution(solution))
}
