// Synthetic road-network generator for demos, tests, and benchmarks.
//
// Mirrors the layout of a real deployment: bins scattered uniformly over a
// 100 x 100 area, each pair connected with a fixed probability, road weights
// equal to the straight-line distance. Topology comes from one seed and fill
// levels from another, so the same street map can be replayed with fresh
// fill states.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::BinGraph;

/// Default number of bins in a generated network
pub const DEFAULT_NUM_BINS: usize = 20;

/// Default probability that any two bins are connected by a road
pub const DEFAULT_EDGE_PROBABILITY: f64 = 0.3;

/// Generates a random road network of waste bins.
///
/// `topology_seed` fixes positions and roads; `fill_seed` drives only the
/// fill levels. The routing core never depends on this module — it is a
/// stand-in for the external graph-construction collaborator.
pub fn generate_synthetic_graph(
    num_bins: usize,
    edge_probability: f64,
    topology_seed: u64,
    fill_seed: u64,
) -> BinGraph {
    let mut topology_rng = StdRng::seed_from_u64(topology_seed);
    let mut fill_rng = StdRng::seed_from_u64(fill_seed);

    let mut graph = BinGraph::new();

    for i in 0..num_bins {
        let x = topology_rng.gen_range(0.0..100.0);
        let y = topology_rng.gen_range(0.0..100.0);
        let fill_level = fill_rng.gen_range(0.0..1.0);
        graph.add_bin(format!("bin_{}", i), x, y, fill_level);
    }

    for i in 0..num_bins {
        for j in (i + 1)..num_bins {
            if topology_rng.gen::<f64>() < edge_probability {
                graph.add_road(&format!("bin_{}", i), &format!("bin_{}", j));
            }
        }
    }

    graph
}
