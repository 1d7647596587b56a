// Road network graph over waste bins

use std::collections::HashMap;

use crate::models::{Bin, BinId, Distance, FillLevel, Location};
use crate::utils::distance::euclidean_distance;

/// Weighted undirected graph of waste bins
///
/// Bins are stored in insertion order so that target discovery and nearest
/// neighbor tie-breaks are stable across runs (HashMap iteration order is
/// not). The adjacency lists keep neighbors in edge-insertion order for the
/// same reason.
pub struct BinGraph {
    bins: HashMap<BinId, Bin>,
    order: Vec<BinId>, // Bin IDs in insertion order
    adjacency: HashMap<BinId, Vec<(BinId, Distance)>>,
    edge_count: usize,
}

impl BinGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self {
            bins: HashMap::new(),
            order: Vec::new(),
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Adds a bin; returns false if a bin with the same ID already exists
    pub fn add_bin(&mut self, id: impl Into<BinId>, x: f64, y: f64, fill_level: FillLevel) -> bool {
        let id = id.into();
        if self.bins.contains_key(&id) {
            return false;
        }

        self.order.push(id.clone());
        self.bins
            .insert(id.clone(), Bin::new(id, Location::new(x, y), fill_level));
        true
    }

    /// Adds an undirected road between two bins, weighted by the Euclidean
    /// distance between their positions; returns false if either endpoint is
    /// missing or the edge would be invalid
    pub fn add_road(&mut self, a: &str, b: &str) -> bool {
        let weight = match (self.bins.get(a), self.bins.get(b)) {
            (Some(bin_a), Some(bin_b)) => euclidean_distance(&bin_a.location, &bin_b.location),
            _ => return false,
        };
        self.add_road_weighted(a, b, weight)
    }

    /// Adds an undirected road with an externally supplied weight.
    ///
    /// Self-loops, unknown endpoints, negative weights, and parallel edges
    /// are rejected (returns false) — non-negative weights on distinct
    /// existing bins are what Dijkstra and A* correctness relies on.
    pub fn add_road_weighted(&mut self, a: &str, b: &str, weight: Distance) -> bool {
        if a == b || weight < 0.0 || !weight.is_finite() {
            return false;
        }
        if !self.bins.contains_key(a) || !self.bins.contains_key(b) {
            return false;
        }
        if self.has_road(a, b) {
            return false;
        }

        self.adjacency
            .entry(a.to_string())
            .or_insert_with(Vec::new)
            .push((b.to_string(), weight));
        self.adjacency
            .entry(b.to_string())
            .or_insert_with(Vec::new)
            .push((a.to_string(), weight));
        self.edge_count += 1;
        true
    }

    /// Whether a road between the two bins already exists
    pub fn has_road(&self, a: &str, b: &str) -> bool {
        self.adjacency
            .get(a)
            .map(|neighbors| neighbors.iter().any(|(id, _)| id == b))
            .unwrap_or(false)
    }

    /// Looks up a bin by ID
    pub fn bin(&self, id: &str) -> Option<&Bin> {
        self.bins.get(id)
    }

    /// Bin IDs in insertion order
    pub fn bin_ids(&self) -> impl Iterator<Item = &BinId> {
        self.order.iter()
    }

    /// Neighbors of a bin with edge weights, in edge-insertion order
    pub fn neighbors(&self, id: &str) -> &[(BinId, Distance)] {
        self.adjacency
            .get(id)
            .map(|neighbors| neighbors.as_slice())
            .unwrap_or(&[])
    }

    /// Number of bins in the graph
    pub fn bin_count(&self) -> usize {
        self.order.len()
    }

    /// Number of roads in the graph
    pub fn road_count(&self) -> usize {
        self.edge_count
    }

    /// Bins whose fill level meets the threshold, in insertion order.
    ///
    /// Recomputed on every call — the target set is derived state, never
    /// stored, and stays stable as long as the graph is not mutated
    /// mid-routing-call.
    pub fn targets(&self, threshold: FillLevel) -> Vec<BinId> {
        self.order
            .iter()
            .filter(|id| self.bins[*id].needs_collection(threshold))
            .cloned()
            .collect()
    }
}

impl Default for BinGraph {
    fn default() -> Self {
        Self::new()
    }
}
