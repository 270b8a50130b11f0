// The `instance` module contains the data model for parsed instances and built models. These types are immutable.
mod variable;
pub use crate::instance::variable::Variable;

mod item;
pub use crate::instance::item::Item;

mod model;
pub use crate::instance::model::{Constraint, ConstraintId, Model, Objective, Sense};
