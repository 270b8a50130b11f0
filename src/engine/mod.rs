//! The boundary between built models and whatever solves them.
mod dynamic;
mod mip;

pub use crate::engine::dynamic::KnapsackDpEngine;
pub use crate::engine::mip::MipEngine;

use std::fmt;

use crate::instance::Model;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    Other,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            SolveStatus::Optimal => "OPTIMAL",
            SolveStatus::Infeasible => "INFEASIBLE",
            SolveStatus::Other => "OTHER",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of a solver run. Only an optimal solution carries an assignment;
/// otherwise the objective is 0 and the assignment is empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    status: SolveStatus,
    objective: f64,
    assignment: Vec<bool>,
}

impl Solution {
    pub fn optimal(objective: f64, assignment: Vec<bool>) -> Solution {
        Solution {
            status: SolveStatus::Optimal,
            objective,
            assignment,
        }
    }

    pub fn infeasible() -> Solution {
        Self::without_assignment(SolveStatus::Infeasible)
    }

    pub fn other() -> Solution {
        Self::without_assignment(SolveStatus::Other)
    }

    fn without_assignment(status: SolveStatus) -> Solution {
        Solution {
            status,
            objective: 0.0,
            assignment: vec![],
        }
    }

    pub fn status(&self) -> SolveStatus {
        self.status
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }

    pub fn objective(&self) -> f64 {
        self.objective
    }

    /// One entry per model variable, in variable order.
    pub fn assignment(&self) -> &[bool] {
        &self.assignment
    }
}

/// Something that can solve a 0/1 linear [`Model`].
///
/// Engines are called once per run and block until they are done. They must
/// not fail: anything short of a proven optimum is reported through the
/// returned status.
pub trait SolverEngine {
    fn name(&self) -> &'static str;

    fn solve(&self, model: &Model) -> Solution;
}

impl<E: SolverEngine + ?Sized> SolverEngine for Box<E> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(&self, model: &Model) -> Solution {
        (**self).solve(model)
    }
}

/// Filler engine for tests: reports a fixed outcome whatever the model.
#[cfg(test)]
pub(crate) struct FixedEngine(pub Solution);

#[cfg(test)]
impl SolverEngine for FixedEngine {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn solve(&self, _model: &Model) -> Solution {
        self.0.clone()
    }
}
