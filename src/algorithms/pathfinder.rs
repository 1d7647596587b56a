// Shortest-path search over the road network: Dijkstra and A*

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::error::Error;
use std::fmt;

use crate::models::{BinGraph, BinId, Distance};

/// Error returned when source and target lie in different connected
/// components (or one of them is not in the graph at all)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoPathError {
    pub source: BinId,
    pub target: BinId,
}

impl fmt::Display for NoPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no path from {} to {}", self.source, self.target)
    }
}

impl Error for NoPathError {}

/// Shortest-path oracle: every implementation must return the true
/// minimum-weight path, so interchangeable strategies only differ in how
/// much of the graph they explore.
pub trait PathFinder {
    /// Returns the shortest path from source to target (inclusive of both
    /// endpoints) and its total weight
    fn shortest(
        &self,
        graph: &BinGraph,
        source: &str,
        target: &str,
    ) -> Result<(Vec<BinId>, Distance), NoPathError>;
}

// Custom wrapper to make f64 usable as a heap key
#[derive(PartialEq, Copy, Clone, Debug)]
struct F64Wrapper(f64);

impl Eq for F64Wrapper {}

impl PartialOrd for F64Wrapper {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Ord for F64Wrapper {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

/// Frontier entry for the search heap
#[derive(PartialEq, Eq, Debug)]
struct SearchState {
    priority: F64Wrapper,
    seq: usize,
    bin: BinId,
}

impl Ord for SearchState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed order, because we want a min-heap; the insertion counter
        // keeps equal-priority entries popping in a stable order, so repeated
        // queries within one run see consistent tie-breaks
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for SearchState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Label-correcting search shared by both oracle modes; `heuristic` biases
/// the pop order (zero for Dijkstra) and must never overestimate the true
/// remaining distance
fn guided_search<H>(
    graph: &BinGraph,
    source: &str,
    target: &str,
    heuristic: H,
) -> Result<(Vec<BinId>, Distance), NoPathError>
where
    H: Fn(&str) -> Distance,
{
    if graph.bin(source).is_none() || graph.bin(target).is_none() {
        return Err(NoPathError {
            source: source.to_string(),
            target: target.to_string(),
        });
    }
    if source == target {
        return Ok((vec![source.to_string()], 0.0));
    }

    let mut distances: HashMap<BinId, Distance> = HashMap::new();
    let mut predecessors: HashMap<BinId, BinId> = HashMap::new();
    let mut visited: HashSet<BinId> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0usize;

    distances.insert(source.to_string(), 0.0);
    frontier.push(SearchState {
        priority: F64Wrapper(heuristic(source)),
        seq,
        bin: source.to_string(),
    });

    while let Some(SearchState { bin, .. }) = frontier.pop() {
        if bin == target {
            let length = distances[&bin];
            return Ok((reconstruct_path(&predecessors, source, target), length));
        }

        if !visited.insert(bin.clone()) {
            continue;
        }

        for (neighbor, edge_weight) in graph.neighbors(&bin) {
            if visited.contains(neighbor) {
                continue;
            }

            let new_distance = distances[&bin] + edge_weight;
            let is_shorter = match distances.get(neighbor) {
                Some(&current) => new_distance < current,
                None => true,
            };

            if is_shorter {
                distances.insert(neighbor.clone(), new_distance);
                predecessors.insert(neighbor.clone(), bin.clone());
                seq += 1;
                frontier.push(SearchState {
                    priority: F64Wrapper(new_distance + heuristic(neighbor.as_str())),
                    seq,
                    bin: neighbor.clone(),
                });
            }
        }
    }

    Err(NoPathError {
        source: source.to_string(),
        target: target.to_string(),
    })
}

fn reconstruct_path(predecessors: &HashMap<BinId, BinId>, source: &str, target: &str) -> Vec<BinId> {
    let mut path = vec![target.to_string()];
    let mut current = target;

    while current != source {
        match predecessors.get(current) {
            Some(previous) => {
                path.push(previous.clone());
                current = previous;
            }
            None => break, // only reachable targets are reconstructed
        }
    }

    path.reverse();
    path
}

/// Classic Dijkstra: explores strictly by distance from the source
pub struct Dijkstra;

impl PathFinder for Dijkstra {
    fn shortest(
        &self,
        graph: &BinGraph,
        source: &str,
        target: &str,
    ) -> Result<(Vec<BinId>, Distance), NoPathError> {
        guided_search(graph, source, target, |_| 0.0)
    }
}

/// A* guided by straight-line Euclidean distance to the target.
///
/// All edge weights in this system are Euclidean distances, so the
/// straight-line estimate never exceeds any path's weight (triangle
/// inequality) — the heuristic is admissible and consistent, and A* returns
/// the same path lengths Dijkstra does.
pub struct AStar;

impl PathFinder for AStar {
    fn shortest(
        &self,
        graph: &BinGraph,
        source: &str,
        target: &str,
    ) -> Result<(Vec<BinId>, Distance), NoPathError> {
        let goal = match graph.bin(target) {
            Some(bin) => bin.location,
            None => {
                return Err(NoPathError {
                    source: source.to_string(),
                    target: target.to_string(),
                })
            }
        };

        guided_search(graph, source, target, |id| match graph.bin(id) {
            Some(bin) => bin.location.distance_to(&goal),
            None => 0.0,
        })
    }
}
