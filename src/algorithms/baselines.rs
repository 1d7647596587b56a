// Baseline strategies used for side-by-side comparison.
//
// All three share the path oracle with the optimized pipeline but skip the
// refiner and the repair pass, so they show what construction alone buys.

use crate::algorithms::count_coverage;
use crate::algorithms::greedy::build_greedy_tour;
use crate::algorithms::pathfinder::{AStar, Dijkstra, PathFinder};
use crate::models::{BinGraph, FillLevel, RouteResult};
use crate::RouteStrategy;

/// Greedy nearest-neighbor construction over Dijkstra distances, unrefined
pub struct DijkstraGreedy;

impl RouteStrategy for DijkstraGreedy {
    fn name(&self) -> &'static str {
        "dijkstra-greedy"
    }

    fn route(&self, graph: &BinGraph, threshold: FillLevel) -> RouteResult {
        greedy_route(graph, threshold, &Dijkstra)
    }
}

/// Same construction driven by the A* oracle; path lengths are identical to
/// Dijkstra's, only the search effort differs
pub struct AStarGreedy;

impl RouteStrategy for AStarGreedy {
    fn name(&self) -> &'static str {
        "astar-greedy"
    }

    fn route(&self, graph: &BinGraph, threshold: FillLevel) -> RouteResult {
        greedy_route(graph, threshold, &AStar)
    }
}

fn greedy_route<F: PathFinder>(graph: &BinGraph, threshold: FillLevel, finder: &F) -> RouteResult {
    let targets = graph.targets(threshold);
    if targets.len() < 2 {
        return RouteResult::empty();
    }

    let (tour, total_distance) = build_greedy_tour(graph, threshold, finder);
    let bins_covered = count_coverage(&tour, &targets);
    RouteResult::new(tour, total_distance, bins_covered)
}

/// Weakest baseline: visits targets in discovery order, pairing each with
/// the next and splicing the shortest path between them. Unreachable
/// consecutive pairs are silently skipped, so coverage is not guaranteed.
pub struct NaiveSequential;

impl RouteStrategy for NaiveSequential {
    fn name(&self) -> &'static str {
        "naive-sequential"
    }

    fn route(&self, graph: &BinGraph, threshold: FillLevel) -> RouteResult {
        let targets = graph.targets(threshold);
        if targets.len() < 2 {
            return RouteResult::empty();
        }

        let mut tour = vec![targets[0].clone()];
        let mut total_distance = 0.0;

        for pair in targets.windows(2) {
            match Dijkstra.shortest(graph, &pair[0], &pair[1]) {
                Ok((path, length)) => {
                    for node in path.into_iter().skip(1) {
                        if !tour.contains(&node) {
                            tour.push(node);
                        }
                    }
                    total_distance += length;
                }
                Err(_) => continue,
            }
        }

        let bins_covered = count_coverage(&tour, &targets);
        RouteResult::new(tour, total_distance, bins_covered)
    }
}
