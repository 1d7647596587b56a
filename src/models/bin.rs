// Waste bin model

use serde::{Deserialize, Serialize};

use crate::models::{BinId, FillLevel, Location};

/// A waste bin placed on the road network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// Unique identifier within one graph
    pub id: BinId,

    /// Position of the bin in the plane
    pub location: Location,

    /// Fill level in [0, 1]; read-only input for the routing core
    pub fill_level: FillLevel,
}

impl Bin {
    /// Creates a new bin; the fill level is clamped into [0, 1]
    pub fn new(id: impl Into<BinId>, location: Location, fill_level: FillLevel) -> Self {
        Self {
            id: id.into(),
            location,
            fill_level: fill_level.clamp(0.0, 1.0),
        }
    }

    /// Whether this bin must be collected under the given threshold
    pub fn needs_collection(&self, threshold: FillLevel) -> bool {
        self.fill_level >= threshold
    }
}
