use log::trace;

use crate::instance::{Constraint, ConstraintId, Model, Objective, Sense, Variable};
use crate::variable_registry::VariableRegister;

/// Incrementally assembles a [`Model`]. Coefficients are bound one at a
/// time; binding the same coefficient twice keeps the last value.
#[derive(Clone, Debug)]
pub struct ModelBuilder {
    variables: VariableRegister,
    sense: Sense,
    objective: Vec<f64>,
    constraints: Vec<Constraint>,
}

impl ModelBuilder {
    pub fn new(sense: Sense) -> ModelBuilder {
        ModelBuilder {
            variables: VariableRegister::new(),
            sense,
            objective: vec![],
            constraints: vec![],
        }
    }

    pub fn maximize() -> ModelBuilder {
        Self::new(Sense::Maximize)
    }

    pub fn minimize() -> ModelBuilder {
        Self::new(Sense::Minimize)
    }

    pub fn bool_var(&mut self, name: &str) -> Variable {
        let var = self.variables.create(name);
        self.objective.push(0.0);
        var
    }

    /// Creates `n` variables named `x0..x{n-1}` (offset by any variable
    /// created before), in order.
    pub fn bool_vars(&mut self, n: usize) -> Vec<Variable> {
        if self.variables.len() == 0 {
            self.variables = VariableRegister::with_capacity(n);
        }
        self.objective.reserve(n);
        (0..n)
            .map(|_| {
                self.objective.push(0.0);
                self.variables.create_anonymous()
            })
            .collect()
    }

    pub fn variable(&self, name: &str) -> Option<Variable> {
        self.variables.get_by_name(name)
    }

    pub fn set_objective_coefficient(&mut self, var: Variable, coeff: f64) {
        self.require_known(var);
        trace!("objective: {:?} <- {}", var, coeff);
        self.objective[var.index()] = coeff;
    }

    /// Adds the constraint `lower <= 0 <= upper`; terms are bound afterwards
    /// with [`ModelBuilder::set_coefficient`]. An empty range (`lower > upper`)
    /// is accepted and makes the model infeasible.
    pub fn constraint(&mut self, lower: f64, upper: f64) -> ConstraintId {
        let id = ConstraintId(self.constraints.len());
        self.constraints.push(Constraint {
            lower,
            upper,
            coefficients: Vec::with_capacity(self.variables.len()),
        });
        id
    }

    pub fn set_coefficient(&mut self, cons: ConstraintId, var: Variable, coeff: f64) {
        self.require_known(var);
        trace!("constraint {}: {:?} <- {}", cons.0, var, coeff);
        let row = &mut self.constraints[cons.0].coefficients;
        if row.len() <= var.index() {
            row.resize(var.index() + 1, 0.0);
        }
        row[var.index()] = coeff;
    }

    pub fn build(self) -> Model {
        let n = self.variables.len();
        let constraints = self
            .constraints
            .into_iter()
            .map(|mut cons| {
                cons.coefficients.resize(n, 0.0);
                cons
            })
            .collect();
        Model {
            variables: self.variables,
            objective: Objective {
                sense: self.sense,
                coefficients: self.objective,
            },
            constraints,
        }
    }

    fn require_known(&self, var: Variable) {
        if var.index() >= self.variables.len() {
            panic!("{:?} was not created by this builder", var);
        }
    }
}
