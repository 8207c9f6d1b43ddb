use async_trait::async_trait;

use crate::entities::{Itinerary, RouteMetrics};
use crate::error::Error;

/// A directions provider able to reorder waypoints and measure a route.
#[async_trait]
pub trait DirectionsAPI {
    /// Plans a round trip from the itinerary origin back to itself through
    /// all waypoints, letting the provider pick the visiting order. Returns
    /// the chosen order as a permutation of waypoint indices.
    async fn optimize_waypoints(&self, itinerary: &Itinerary) -> Result<Vec<usize>, Error>;

    /// Measures the round trip with waypoints fixed in the given order, each
    /// treated as a pass-through point so the provider does not reorder them.
    async fn route_metrics(
        &self,
        itinerary: &Itinerary,
        order: &[usize],
    ) -> Result<RouteMetrics, Error>;
}
