use log::debug;

pub use crate::flat::KnapsackInstance;
use crate::instance::{ConstraintId, Model};
use crate::model_builder::ModelBuilder;

/// The capacity constraint is always the first constraint of a knapsack model.
pub const CAPACITY: ConstraintId = ConstraintId(0);

/// Builds `max sum(value_i * x_i)` subject to `0 <= sum(weight_i * x_i) <= K`,
/// with one boolean variable per item, in item order.
///
/// A negative capacity leaves the constraint range empty, so the model is
/// infeasible as built.
pub fn build_model(instance: &KnapsackInstance) -> Model {
    let mut mb = ModelBuilder::maximize();
    let vars = mb.bool_vars(instance.items.len());
    let capacity = mb.constraint(0.0, instance.capacity as f64);
    debug_assert_eq!(capacity, CAPACITY);

    for (&x, item) in vars.iter().zip(&instance.items) {
        mb.set_objective_coefficient(x, item.value);
        mb.set_coefficient(capacity, x, item.weight);
    }

    let model = mb.build();
    debug!(
        "number of variables = {}; number of constraints = {}",
        model.num_variables(),
        model.num_constraints()
    );
    model
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::flat::parse_knapsack;
    use crate::instance::{Item, Sense};

    #[test]
    fn test_coefficients_follow_item_order() {
        let pb = parse_knapsack("4 11\n5 4\n4 3\n3 2\n2.5 1").unwrap();
        let model = build_model(&pb);

        assert_eq!(model.num_variables(), pb.items.len());
        assert_eq!(model.num_constraints(), 1);
        assert_eq!(model.objective().sense(), Sense::Maximize);

        let capacity = model.constraint(CAPACITY).unwrap();
        assert_eq!(capacity.lower(), 0.0);
        assert_eq!(capacity.upper(), 11.0);
        for (var, item) in model.variables().zip(&pb.items) {
            assert_eq!(model.objective().coefficient(var), item.value);
            assert_eq!(capacity.coefficient(var), item.weight);
        }
        assert_eq!(model.name(model.variables().last().unwrap()), Some("x3"));
    }

    #[test]
    fn test_feasibility_against_capacity() {
        let pb = KnapsackInstance {
            capacity: 50,
            items: vec![Item::new(60.0, 10.0), Item::new(100.0, 20.0), Item::new(120.0, 30.0)],
        };
        let model = build_model(&pb);
        assert!(model.is_feasible(&[false, true, true]));
        assert!(!model.is_feasible(&[true, true, true]));
        assert_eq!(model.evaluate_objective(&[false, true, true]), 220.0);
    }

    #[test]
    fn test_negative_capacity_is_infeasible_by_construction() {
        let pb = KnapsackInstance {
            capacity: -1,
            items: vec![Item::new(1.0, 1.0)],
        };
        let model = build_model(&pb);
        assert!(!model.is_feasible(&[false]));
        assert!(!model.is_feasible(&[true]));
    }

    #[test]
    fn test_empty_instance() {
        let model = build_model(&parse_knapsack("0 5\n").unwrap());
        assert_eq!(model.num_variables(), 0);
        assert_eq!(model.constraint(CAPACITY).unwrap().coefficients().len(), 0);
    }
}
