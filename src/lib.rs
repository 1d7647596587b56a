// Public modules
pub mod algorithms;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::baselines::{AStarGreedy, DijkstraGreedy, NaiveSequential};
pub use algorithms::comparator::{compare_strategies, StrategyOutcome};
pub use algorithms::pathfinder::{AStar, Dijkstra, NoPathError, PathFinder};
pub use algorithms::{OptimizedRoute, RouteStrategy, DEFAULT_THRESHOLD};
pub use models::{Bin, BinGraph, Location, RouteResult};
