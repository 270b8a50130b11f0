use core::fmt;

use super::Variable;
use crate::variable_registry::VariableRegister;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sense {
    Maximize,
    Minimize,
}

/// Handle to a constraint, as returned by the model builder.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct ConstraintId(pub(crate) usize);

/// A linear function over the model's variables. `coefficients[i]` is the
/// coefficient of `Variable(i)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Objective {
    pub(crate) sense: Sense,
    pub(crate) coefficients: Vec<f64>,
}

impl Objective {
    pub fn sense(&self) -> Sense {
        self.sense
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn coefficient(&self, var: Variable) -> f64 {
        self.coefficients.get(var.index()).copied().unwrap_or(0.0)
    }
}

/// `lower <= sum(coefficients[i] * x_i) <= upper`
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    pub(crate) lower: f64,
    pub(crate) upper: f64,
    pub(crate) coefficients: Vec<f64>,
}

impl Constraint {
    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn coefficient(&self, var: Variable) -> f64 {
        self.coefficients.get(var.index()).copied().unwrap_or(0.0)
    }

    fn activity(&self, assignment: &[bool]) -> f64 {
        self.coefficients
            .iter()
            .zip(assignment)
            .filter(|&(_, &selected)| selected)
            .map(|(c, _)| c)
            .sum()
    }
}

/// A 0/1 linear program: boolean variables, one objective and a list of
/// bounded linear constraints. Immutable once built; every coefficient row
/// has exactly `num_variables()` entries.
#[derive(Clone)]
pub struct Model {
    pub(crate) variables: VariableRegister,
    pub(crate) objective: Objective,
    pub(crate) constraints: Vec<Constraint>,
}

impl Model {
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.variables.iter()
    }

    pub fn name(&self, var: Variable) -> Option<&str> {
        self.variables.get(var)
    }

    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn constraint(&self, id: ConstraintId) -> Option<&Constraint> {
        self.constraints.get(id.0)
    }

    /// Objective value of an assignment aligned to the variables.
    pub fn evaluate_objective(&self, assignment: &[bool]) -> f64 {
        self.objective
            .coefficients
            .iter()
            .zip(assignment)
            .filter(|&(_, &selected)| selected)
            .map(|(c, _)| c)
            .sum()
    }

    pub fn is_feasible(&self, assignment: &[bool]) -> bool {
        if assignment.len() != self.num_variables() {
            return false;
        }
        self.constraints.iter().all(|cons| {
            let activity = cons.activity(assignment);
            cons.lower <= activity && activity <= cons.upper
        })
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sense = match self.objective.sense {
            Sense::Maximize => "max",
            Sense::Minimize => "min",
        };
        write!(f, "{} ", sense)?;
        write_row(f, &self.variables, &self.objective.coefficients)?;
        for cons in &self.constraints {
            write!(f, "; {} <= ", cons.lower)?;
            write_row(f, &self.variables, &cons.coefficients)?;
            write!(f, " <= {}", cons.upper)?;
        }
        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter, vars: &VariableRegister, coefficients: &[f64]) -> fmt::Result {
    let mut fst = true;
    for (var, coeff) in vars.iter().zip(coefficients) {
        if *coeff == 0.0 {
            continue;
        }
        if !fst {
            write!(f, " + ")?;
        }
        fst = false;
        let name = vars.get(var).unwrap_or("?");
        write!(f, "{}*{}", coeff, name)?;
    }
    if fst {
        write!(f, "0")?;
    }
    Ok(())
}
