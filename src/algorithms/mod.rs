pub mod baselines;
pub mod comparator;
pub mod greedy;
pub mod pathfinder;
pub mod two_opt;

use crate::models::{BinGraph, BinId, FillLevel, RouteResult};

use self::greedy::build_greedy_tour;
use self::pathfinder::Dijkstra;
use self::two_opt::{repair_tour, tour_length, TwoOptRefiner};

/// Default fill-level threshold above which a bin must be collected
pub const DEFAULT_THRESHOLD: FillLevel = 0.7;

/// Trait for routing strategies that can be compared side by side on one
/// graph and threshold
pub trait RouteStrategy {
    /// Human-readable strategy name for comparisons and reports
    fn name(&self) -> &'static str;

    /// Computes a collection tour over the bins meeting the threshold.
    ///
    /// Never fails: fewer than two targets yields the empty result, and
    /// unreachable targets are simply absent from the tour (the coverage
    /// count exposes the shortfall).
    fn route(&self, graph: &BinGraph, threshold: FillLevel) -> RouteResult;
}

/// Distinct target bins present in the tour
pub(crate) fn count_coverage(tour: &[BinId], targets: &[BinId]) -> usize {
    targets.iter().filter(|target| tour.contains(target)).count()
}

/// The full pipeline: greedy construction, 2-opt refinement, then a repair
/// pass that reinserts any target the first two stages dropped
pub struct OptimizedRoute {
    refiner: TwoOptRefiner,
}

impl OptimizedRoute {
    pub fn new() -> Self {
        Self {
            refiner: TwoOptRefiner::new(),
        }
    }

    /// Pipeline with custom refinement limits (pass cap, optional wall-clock
    /// cutoff)
    pub fn with_refiner(refiner: TwoOptRefiner) -> Self {
        Self { refiner }
    }
}

impl Default for OptimizedRoute {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteStrategy for OptimizedRoute {
    fn name(&self) -> &'static str {
        "greedy+2opt"
    }

    fn route(&self, graph: &BinGraph, threshold: FillLevel) -> RouteResult {
        let targets = graph.targets(threshold);
        if targets.len() < 2 {
            return RouteResult::empty();
        }

        let (mut tour, _) = build_greedy_tour(graph, threshold, &Dijkstra);
        self.refiner.refine(graph, &mut tour, &Dijkstra);
        repair_tour(graph, &targets, &mut tour, &Dijkstra);

        // repair may have spliced stops in, so the running totals from the
        // earlier stages are stale; sum the consecutive legs once more
        let total_distance = tour_length(graph, &tour, &Dijkstra);
        let bins_covered = count_coverage(&tour, &targets);
        RouteResult::new(tour, total_distance, bins_covered)
    }
}
