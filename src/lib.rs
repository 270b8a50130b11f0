pub mod config;
pub mod engine;
pub mod flat;
pub mod graph;
pub mod instance;
pub mod knapsack;
pub mod model_builder;
pub mod output;
pub mod runner;
pub(crate) mod variable_registry;
