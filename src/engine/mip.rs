use log::{debug, warn};
use microlp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem};

use super::{Solution, SolverEngine};
use crate::instance::{Model, Sense};

/// Mixed-integer engine backed by `microlp` (LP relaxation and branch and bound).
#[derive(Clone, Copy, Debug, Default)]
pub struct MipEngine;

impl MipEngine {
    pub fn new() -> MipEngine {
        MipEngine
    }
}

impl SolverEngine for MipEngine {
    fn name(&self) -> &'static str {
        "mip"
    }

    fn solve(&self, model: &Model) -> Solution {
        if model.num_variables() == 0 {
            return solve_constant(model);
        }

        let direction = match model.objective().sense() {
            Sense::Maximize => OptimizationDirection::Maximize,
            Sense::Minimize => OptimizationDirection::Minimize,
        };
        let mut problem = Problem::new(direction);
        let vars: Vec<microlp::Variable> = model
            .objective()
            .coefficients()
            .iter()
            .map(|&coeff| problem.add_binary_var(coeff))
            .collect();

        for cons in model.constraints() {
            let expr: LinearExpr = vars.iter().copied().zip(cons.coefficients().iter().copied()).collect();
            if cons.lower() == cons.upper() {
                problem.add_constraint(expr, ComparisonOp::Eq, cons.upper());
                continue;
            }
            if cons.lower().is_finite() {
                problem.add_constraint(expr.clone(), ComparisonOp::Ge, cons.lower());
            }
            if cons.upper().is_finite() {
                problem.add_constraint(expr, ComparisonOp::Le, cons.upper());
            }
        }

        match problem.solve() {
            Ok(sol) => {
                let assignment = vars.iter().map(|&v| *sol.var_value(v) > 0.5).collect();
                Solution::optimal(sol.objective(), assignment)
            }
            Err(microlp::Error::Infeasible) => Solution::infeasible(),
            Err(microlp::Error::Unbounded) => {
                debug!("engine reported an unbounded objective");
                Solution::other()
            }
            Err(microlp::Error::InternalError(msg)) => {
                warn!("engine failure: {}", msg);
                Solution::other()
            }
        }
    }
}

// Without variables every row evaluates to 0.
fn solve_constant(model: &Model) -> Solution {
    if model
        .constraints()
        .iter()
        .all(|cons| cons.lower() <= 0.0 && 0.0 <= cons.upper())
    {
        Solution::optimal(0.0, vec![])
    } else {
        Solution::infeasible()
    }
}
