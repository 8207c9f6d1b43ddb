use serde::{Deserialize, Serialize};

/// Everything the collector gathers before any network call is made.
/// Populated once, read-only afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Itinerary {
    pub origin: String,
    pub waypoints: Vec<String>,
    /// Departure time in epoch seconds.
    pub departure_time: i64,
    pub avoid_tolls: bool,
}
