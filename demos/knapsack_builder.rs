extern crate flatopt;

use flatopt::engine::{KnapsackDpEngine, MipEngine, SolverEngine};
use flatopt::model_builder::ModelBuilder;
use itertools::Itertools;

fn main() {
    let mut mb = ModelBuilder::maximize();

    // (name, value, weight)
    let gear = vec![
        ("tent", 90.0, 11.0),
        ("stove", 30.0, 4.0),
        ("rope", 10.0, 2.0),
        ("camera", 40.0, 3.0),
        ("water", 150.0, 9.0),
        ("book", 5.0, 1.0),
    ];

    let capacity = mb.constraint(0.0, 20.0);
    let vars = gear
        .iter()
        .map(|&(name, value, weight)| {
            let var = mb.bool_var(name);
            mb.set_objective_coefficient(var, value);
            mb.set_coefficient(capacity, var, weight);
            var
        })
        .collect::<Vec<_>>();

    // the stove is useless without water
    let stove_needs_water = mb.constraint(f64::NEG_INFINITY, 0.0);
    mb.set_coefficient(stove_needs_water, vars[1], 1.0);
    mb.set_coefficient(stove_needs_water, vars[4], -1.0);

    let model = mb.build();
    println!("{:?}", model);

    let engines: Vec<Box<dyn SolverEngine>> = vec![Box::new(MipEngine::new()), Box::new(KnapsackDpEngine::new())];
    for engine in engines {
        let solution = engine.solve(&model);
        let packed = model
            .variables()
            .zip(solution.assignment())
            .filter(|&(_, &selected)| selected)
            .filter_map(|(var, _)| model.name(var))
            .join(", ");
        println!(
            "{}: {} value={} packed=[{}]",
            engine.name(),
            solution.status(),
            solution.objective(),
            packed
        );
    }
}
