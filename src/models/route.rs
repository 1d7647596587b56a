// Route result model returned by every routing strategy

use serde::{Deserialize, Serialize};

use crate::models::{BinId, Distance};

/// Result of one routing call: the visiting order (including intermediate
/// road-network bins), the summed shortest-path distance between consecutive
/// stops, and how many target bins the tour covers.
///
/// Serializes to the wire shape external collaborators expect:
/// `{"optimized_route": [...], "total_distance": f, "bins_covered": n}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Ordered sequence of bin IDs to visit, no duplicates
    #[serde(rename = "optimized_route")]
    pub tour: Vec<BinId>,

    /// Sum of shortest-path lengths between consecutive tour entries
    pub total_distance: Distance,

    /// Distinct target bins present in the tour
    pub bins_covered: usize,
}

impl RouteResult {
    /// Creates a new route result
    pub fn new(tour: Vec<BinId>, total_distance: Distance, bins_covered: usize) -> Self {
        Self {
            tour,
            total_distance,
            bins_covered,
        }
    }

    /// The "nothing to do" result: fewer than two targets met the threshold
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0.0, 0)
    }

    /// Whether the tour visits anything at all
    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }
}
