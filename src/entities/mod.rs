mod itinerary;
mod summary;

pub use itinerary::Itinerary;
pub use summary::{RouteMetrics, TripSummary};
