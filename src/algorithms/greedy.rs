// Greedy nearest-neighbor tour construction

use std::collections::HashSet;

use crate::algorithms::pathfinder::PathFinder;
use crate::models::{BinGraph, BinId, Distance, FillLevel};

/// Builds an initial tour over the bins that meet the fill threshold.
///
/// Starting from the first target in graph order, repeatedly walks the
/// shortest path to the closest unvisited target, splicing every road bin on
/// that path into the tour. Ties on candidate distance go to the
/// first-encountered target (strict `<` over a fixed scan order), and a
/// target reached as an intermediate stop counts as visited. Returns the
/// tour and the accumulated leg distance; fewer than two targets yields an
/// empty tour, and when no unvisited target is reachable the partial tour is
/// returned as-is.
pub fn build_greedy_tour<F: PathFinder>(
    graph: &BinGraph,
    threshold: FillLevel,
    finder: &F,
) -> (Vec<BinId>, Distance) {
    let targets = graph.targets(threshold);
    if targets.len() < 2 {
        return (Vec::new(), 0.0);
    }
    let target_set: HashSet<&BinId> = targets.iter().collect();

    let mut tour = vec![targets[0].clone()];
    let mut visited: HashSet<BinId> = HashSet::new();
    visited.insert(targets[0].clone());
    let mut total_distance = 0.0;
    let mut current = targets[0].clone();

    while visited.len() < targets.len() {
        let mut nearest: Option<(BinId, Vec<BinId>, Distance)> = None;

        for candidate in &targets {
            if visited.contains(candidate) {
                continue;
            }

            match finder.shortest(graph, &current, candidate) {
                Ok((path, length)) => {
                    let is_closer = match &nearest {
                        Some((_, _, best)) => length < *best,
                        None => true,
                    };
                    if is_closer {
                        nearest = Some((candidate.clone(), path, length));
                    }
                }
                // Unreachable candidate: absorb and try the next one
                Err(_) => continue,
            }
        }

        let (next, path, length) = match nearest {
            Some(found) => found,
            // No unvisited target reachable from here; keep the partial tour
            None => break,
        };

        for node in path.into_iter().skip(1) {
            if !tour.contains(&node) {
                if target_set.contains(&node) {
                    visited.insert(node.clone());
                }
                tour.push(node);
            }
        }
        visited.insert(next.clone());

        total_distance += length;
        current = next;
    }

    (tour, total_distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::pathfinder::Dijkstra;
    use crate::models::BinGraph;

    fn line_graph() -> BinGraph {
        // bin_0 - bin_1 - bin_2 - bin_3 spaced 1 apart; only ends are full
        let mut graph = BinGraph::new();
        for i in 0..4 {
            let fill = if i == 0 || i == 3 { 0.9 } else { 0.1 };
            graph.add_bin(format!("bin_{}", i), i as f64, 0.0, fill);
        }
        for i in 0..3 {
            graph.add_road(&format!("bin_{}", i), &format!("bin_{}", i + 1));
        }
        graph
    }

    #[test]
    fn test_splices_intermediate_bins() {
        let graph = line_graph();

        let (tour, distance) = build_greedy_tour(&graph, 0.7, &Dijkstra);
        assert_eq!(tour, vec!["bin_0", "bin_1", "bin_2", "bin_3"]);
        assert!((distance - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_fewer_than_two_targets() {
        let graph = line_graph();

        let (tour, distance) = build_greedy_tour(&graph, 0.95, &Dijkstra);
        assert!(tour.is_empty());
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_equal_distance_tie_goes_to_first_target() {
        // bin_1 and bin_2 both sit 1.0 away from bin_0
        let mut graph = BinGraph::new();
        graph.add_bin("bin_0", 0.0, 0.0, 0.9);
        graph.add_bin("bin_1", 1.0, 0.0, 0.9);
        graph.add_bin("bin_2", -1.0, 0.0, 0.9);
        graph.add_road("bin_0", "bin_1");
        graph.add_road("bin_0", "bin_2");
        graph.add_road_weighted("bin_1", "bin_2", 2.0);

        let (tour, _) = build_greedy_tour(&graph, 0.7, &Dijkstra);
        assert_eq!(tour[0], "bin_0");
        assert_eq!(tour[1], "bin_1"); // first-encountered wins the tie
    }

    #[test]
    fn test_stops_at_component_boundary() {
        // two full pairs with no road between the pairs
        let mut graph = BinGraph::new();
        graph.add_bin("bin_0", 0.0, 0.0, 0.9);
        graph.add_bin("bin_1", 1.0, 0.0, 0.9);
        graph.add_bin("bin_2", 50.0, 50.0, 0.9);
        graph.add_bin("bin_3", 51.0, 50.0, 0.9);
        graph.add_road("bin_0", "bin_1");
        graph.add_road("bin_2", "bin_3");

        let (tour, distance) = build_greedy_tour(&graph, 0.7, &Dijkstra);
        assert_eq!(tour, vec!["bin_0", "bin_1"]);
        assert!((distance - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_intermediate_target_not_revisited() {
        // bin_1 is itself a target on the way from bin_0 to bin_2
        let mut graph = BinGraph::new();
        graph.add_bin("bin_0", 0.0, 0.0, 0.9);
        graph.add_bin("bin_1", 1.0, 0.0, 0.9);
        graph.add_bin("bin_2", 2.0, 0.0, 0.9);
        graph.add_road("bin_0", "bin_1");
        graph.add_road("bin_1", "bin_2");

        let (tour, distance) = build_greedy_tour(&graph, 0.7, &Dijkstra);
        assert_eq!(tour, vec!["bin_0", "bin_1", "bin_2"]);
        assert!((distance - 2.0).abs() < 1e-9);
    }
}
