use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Aggregate metrics for a measured route, as formatted by the provider.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteMetrics {
    pub distance: String,
    pub duration: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct TripSummary {
    pub origin: String,
    pub entered_waypoints: Vec<String>,
    pub ordered_waypoints: Vec<String>,
    pub distance: String,
    pub duration: String,
}

impl Display for TripSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Round trip from {} via {}:",
            self.origin,
            self.entered_waypoints.join(", ")
        )?;
        writeln!(f, "  order:    {}", self.ordered_waypoints.join(", "))?;
        writeln!(f, "  distance: {}", self.distance)?;
        write!(f, "  duration: {}", self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_order_distance_and_duration() {
        let summary = TripSummary {
            origin: "Tokyo Station".into(),
            entered_waypoints: vec!["Osaka Castle".into(), "Nagoya Station".into()],
            ordered_waypoints: vec!["Nagoya Station".into(), "Osaka Castle".into()],
            distance: "300 km".into(),
            duration: "4 hours".into(),
        };

        let text = summary.to_string();

        assert!(text.starts_with("Round trip from Tokyo Station via Osaka Castle, Nagoya Station:"));
        assert!(text.contains("order:    Nagoya Station, Osaka Castle"));
        assert!(text.contains("distance: 300 km"));
        assert!(text.ends_with("duration: 4 hours"));
    }
}
