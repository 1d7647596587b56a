// Models module - exports all model types

mod bin;
mod graph;
mod location;
mod route;

// Re-export model types
pub use self::bin::Bin;
pub use self::graph::BinGraph;
pub use self::location::Location;
pub use self::route::RouteResult;

// Common type aliases for improved code readability
pub type BinId = String;
pub type FillLevel = f64;
pub type Distance = f64;
