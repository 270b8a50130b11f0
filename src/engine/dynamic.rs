use log::{debug, warn};

use super::{Solution, SolverEngine};
use crate::instance::{Model, Sense};

/// Tables larger than this many cells are refused.
const MAX_TABLE_CELLS: usize = 50_000_000;

/// Exact dynamic programming over the remaining capacity, for models shaped
/// like a 0/1 knapsack: maximization, a single constraint whose lower bound
/// is at most 0, and non-negative integral weights. Anything else is
/// reported as [`super::SolveStatus::Other`].
#[derive(Clone, Copy, Debug, Default)]
pub struct KnapsackDpEngine;

impl KnapsackDpEngine {
    pub fn new() -> KnapsackDpEngine {
        KnapsackDpEngine
    }
}

impl SolverEngine for KnapsackDpEngine {
    fn name(&self) -> &'static str {
        "dp"
    }

    fn solve(&self, model: &Model) -> Solution {
        let (capacity, weights) = match knapsack_shape(model) {
            Some(shape) => shape,
            None => {
                debug!("model is not a 0/1 knapsack");
                return Solution::other();
            }
        };
        let capacity = match capacity {
            Some(c) => c,
            None => return Solution::infeasible(),
        };

        let n = weights.len();
        let width = capacity + 1;
        if n.saturating_mul(width) > MAX_TABLE_CELLS {
            warn!("capacity {} is too large for {} items", capacity, n);
            return Solution::other();
        }

        let values = model.objective().coefficients();
        // best[c]: best value using at most c capacity over the items seen so far
        let mut best = vec![0.0f64; width];
        let mut take = vec![false; n * width];
        for (i, (&w, &v)) in weights.iter().zip(values).enumerate() {
            for c in (w..width).rev() {
                let with = best[c - w] + v;
                if with > best[c] {
                    best[c] = with;
                    take[i * width + c] = true;
                }
            }
        }

        let mut assignment = vec![false; n];
        let mut c = capacity;
        for i in (0..n).rev() {
            if take[i * width + c] {
                assignment[i] = true;
                c -= weights[i];
            }
        }
        Solution::optimal(best[capacity], assignment)
    }
}

/// Returns the capacity (None if the range is empty) and the integral weights.
fn knapsack_shape(model: &Model) -> Option<(Option<usize>, Vec<usize>)> {
    if model.objective().sense() != Sense::Maximize || model.num_constraints() != 1 {
        return None;
    }
    let cons = &model.constraints()[0];
    if cons.lower() > 0.0 {
        return None;
    }
    let weights = cons
        .coefficients()
        .iter()
        .map(|&w| as_count(w))
        .collect::<Option<Vec<_>>>()?;

    let upper = cons.upper();
    if upper < 0.0 || cons.lower() > upper {
        return Some((None, weights));
    }
    if !upper.is_finite() {
        return None;
    }
    Some((Some(upper.floor() as usize), weights))
}

fn as_count(w: f64) -> Option<usize> {
    if w >= 0.0 && w.fract() == 0.0 && w <= usize::MAX as f64 {
        Some(w as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::engine::{MipEngine, SolveStatus};
    use crate::flat::parse_knapsack;
    use crate::knapsack::build_model;
    use crate::model_builder::ModelBuilder;

    fn solve_knapsack(input: &str) -> Solution {
        KnapsackDpEngine::new().solve(&build_model(&parse_knapsack(input).unwrap()))
    }

    #[test]
    fn test_three_items() {
        let sol = solve_knapsack("3 50\n60 10\n100 20\n120 30");
        assert_eq!(sol, Solution::optimal(220.0, vec![false, true, true]));
    }

    #[test]
    fn test_zero_weight_items_are_taken() {
        let sol = solve_knapsack("3 1\n5 0\n7 2\n1 1");
        assert_eq!(sol, Solution::optimal(6.0, vec![true, false, true]));
    }

    #[test]
    fn test_negative_capacity() {
        assert_eq!(solve_knapsack("1 -1\n1 1").status(), SolveStatus::Infeasible);
    }

    #[test]
    fn test_fractional_weights_are_not_supported() {
        assert_eq!(solve_knapsack("1 3\n1 1.5").status(), SolveStatus::Other);
    }

    #[test]
    fn test_oversized_table_is_refused() {
        // 100_000_001 cells is over the table limit
        assert_eq!(solve_knapsack("1 100000000\n3 2").status(), SolveStatus::Other);
        let sol = solve_knapsack("2 1000\n3 2\n4 5");
        assert_eq!(sol, Solution::optimal(7.0, vec![true, true]));
    }

    #[test]
    fn test_minimization_is_not_supported() {
        let mut mb = ModelBuilder::minimize();
        mb.bool_var("x");
        mb.constraint(0.0, 1.0);
        assert_eq!(KnapsackDpEngine::new().solve(&mb.build()).status(), SolveStatus::Other);
    }

    #[test]
    fn test_agrees_with_mip() {
        // values and weights from a classic 10 item instance
        let values = [55, 10, 47, 5, 4, 50, 8, 61, 85, 87];
        let weights = [95, 4, 60, 32, 23, 72, 80, 62, 65, 46];
        for capacity in [0, 50, 100, 269, 500] {
            let mut input = format!("{} {}\n", values.len(), capacity);
            for (v, w) in values.iter().zip(&weights) {
                input.push_str(&format!("{} {}\n", v, w));
            }
            let model = build_model(&parse_knapsack(&input).unwrap());
            let dp = KnapsackDpEngine::new().solve(&model);
            let mip = MipEngine::new().solve(&model);
            assert!(dp.is_optimal() && mip.is_optimal());
            assert!((dp.objective() - mip.objective()).abs() < 1e-6, "capacity {}", capacity);
            assert!(model.is_feasible(dp.assignment()));
            assert_eq!(model.evaluate_objective(dp.assignment()), dp.objective());
        }
    }
}
