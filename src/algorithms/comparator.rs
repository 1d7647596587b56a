// Side-by-side evaluation of every routing strategy on one graph

use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::algorithms::baselines::{AStarGreedy, DijkstraGreedy, NaiveSequential};
use crate::algorithms::{OptimizedRoute, RouteStrategy};
use crate::models::{BinGraph, FillLevel, RouteResult};

/// One strategy's outcome in a comparison run
#[derive(Debug, Clone)]
pub struct StrategyOutcome {
    pub strategy: &'static str,
    pub result: RouteResult,
    pub elapsed: Duration,
}

/// Runs the optimized pipeline and the three baselines against the same
/// graph and threshold, returning the outcomes in a fixed order
/// (optimized, Dijkstra-greedy, A*-greedy, naive).
///
/// The strategies are independent pure calls over a shared immutable graph
/// snapshot, so they are evaluated in parallel; each call owns its own
/// memoization state.
pub fn compare_strategies(graph: &BinGraph, threshold: FillLevel) -> Vec<StrategyOutcome> {
    let strategies: Vec<Box<dyn RouteStrategy + Send + Sync>> = vec![
        Box::new(OptimizedRoute::new()),
        Box::new(DijkstraGreedy),
        Box::new(AStarGreedy),
        Box::new(NaiveSequential),
    ];

    strategies
        .par_iter()
        .map(|strategy| {
            let started = Instant::now();
            let result = strategy.route(graph, threshold);
            StrategyOutcome {
                strategy: strategy.name(),
                result,
                elapsed: started.elapsed(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::generator::generate_synthetic_graph;

    #[test]
    fn test_outcomes_in_fixed_order() {
        let graph = generate_synthetic_graph(10, 0.5, 3, 3);

        let outcomes = compare_strategies(&graph, 0.7);
        let names: Vec<_> = outcomes.iter().map(|o| o.strategy).collect();
        assert_eq!(
            names,
            vec![
                "greedy+2opt",
                "dijkstra-greedy",
                "astar-greedy",
                "naive-sequential"
            ]
        );
    }

    #[test]
    fn test_all_strategies_see_the_same_targets() {
        let graph = generate_synthetic_graph(20, 0.3, 42, 7);
        let target_count = graph.targets(0.7).len();

        for outcome in compare_strategies(&graph, 0.7) {
            assert!(
                outcome.result.bins_covered <= target_count,
                "{} covered more bins than exist",
                outcome.strategy
            );
        }
    }

    #[test]
    fn test_empty_graph_comparison() {
        let graph = BinGraph::new();

        for outcome in compare_strategies(&graph, 0.7) {
            assert!(outcome.result.is_empty());
        }
    }
}
