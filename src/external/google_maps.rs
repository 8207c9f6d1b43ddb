use async_trait::async_trait;
use serde::Deserialize;
use std::env;

use crate::{
    api::DirectionsAPI,
    entities::{Itinerary, RouteMetrics},
    error::{invalid_input_error, unexpected_error, upstream_error, Error},
};

pub const API_KEY_VAR: &str = "MAPS_API_KEY";

const DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";
const AVOID_TOLLS_AND_HIGHWAYS: &str = "tolls|highways";

#[derive(Clone, Debug, Deserialize)]
struct Response {
    status: String,
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Clone, Debug, Deserialize)]
struct Route {
    #[serde(default)]
    waypoint_order: Vec<usize>,
    #[serde(default)]
    legs: Vec<Leg>,
}

#[derive(Clone, Debug, Deserialize)]
struct Leg {
    distance: TextValue,
    duration: TextValue,
}

#[derive(Clone, Debug, Deserialize)]
struct TextValue {
    text: String,
}

#[derive(Debug)]
pub struct GoogleMaps {
    client: reqwest::Client,
    api_key: String,
}

impl GoogleMaps {
    /// Reads the API credential from the environment. A missing key is only
    /// logged; the provider rejects the unauthenticated request later and the
    /// usual fatal path runs.
    pub fn from_env() -> Self {
        let api_key = match env::var(API_KEY_VAR) {
            Ok(key) => key,
            Err(err) => {
                tracing::warn!("{}: {}", API_KEY_VAR, err);
                String::new()
            }
        };

        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    async fn fetch_route(&self, itinerary: &Itinerary, waypoints: String) -> Result<Route, Error> {
        let mut request = self
            .client
            .get(DIRECTIONS_URL)
            .query(&[("origin", itinerary.origin.as_str())])
            .query(&[("destination", itinerary.origin.as_str())])
            .query(&[("waypoints", waypoints.as_str())])
            .query(&[("departure_time", itinerary.departure_time)])
            .query(&[("key", self.api_key.as_str())]);

        if itinerary.avoid_tolls {
            request = request.query(&[("avoid", AVOID_TOLLS_AND_HIGHWAYS)]);
        }

        let res = request.send().await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: Response = res.json().await?;

        first_route(data)
    }
}

fn first_route(data: Response) -> Result<Route, Error> {
    if data.status != "OK" {
        return Err(upstream_error());
    }

    data.routes
        .into_iter()
        .next()
        .ok_or_else(|| upstream_error())
}

/// `waypoints` value for the optimize call: `optimize:true|<wp>|<wp>|...`.
/// reqwest percent-encodes `:` and `|` into the `%3A`/`%7C` forms the
/// provider grammar expects.
fn optimize_param(waypoints: &[String]) -> String {
    format!("optimize:true|{}", waypoints.join("|"))
}

/// `waypoints` value for the measuring call: `via:<wp>|via:<wp>|...` in the
/// order chosen by the optimize call, so the provider does not reorder them.
fn via_param(waypoints: &[String], order: &[usize]) -> Result<String, Error> {
    let mut parts = Vec::with_capacity(order.len());

    for &index in order {
        let waypoint = waypoints.get(index).ok_or_else(|| upstream_error())?;
        parts.push(format!("via:{}", waypoint));
    }

    if parts.is_empty() {
        return Err(unexpected_error());
    }

    Ok(parts.join("|"))
}

#[async_trait]
impl DirectionsAPI for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn optimize_waypoints(&self, itinerary: &Itinerary) -> Result<Vec<usize>, Error> {
        let route = self
            .fetch_route(itinerary, optimize_param(&itinerary.waypoints))
            .await?;

        Ok(route.waypoint_order)
    }

    #[tracing::instrument(skip(self))]
    async fn route_metrics(
        &self,
        itinerary: &Itinerary,
        order: &[usize],
    ) -> Result<RouteMetrics, Error> {
        let route = self
            .fetch_route(itinerary, via_param(&itinerary.waypoints, order)?)
            .await?;

        let leg = route.legs.into_iter().next().ok_or_else(|| upstream_error())?;

        Ok(RouteMetrics {
            distance: leg.distance.text,
            duration: leg.duration.text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoints(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn optimize_param_flags_reordering_and_joins_with_pipes() {
        let param = optimize_param(&waypoints(&["Osaka Castle", "Nagoya Station"]));

        assert_eq!(param, "optimize:true|Osaka Castle|Nagoya Station");
    }

    #[test]
    fn via_param_marks_every_waypoint_as_pass_through() {
        let param = via_param(&waypoints(&["Osaka Castle", "Nagoya Station"]), &[1, 0]).unwrap();

        assert_eq!(param, "via:Nagoya Station|via:Osaka Castle");
    }

    #[test]
    fn via_param_rejects_out_of_range_indices() {
        assert!(via_param(&waypoints(&["Osaka Castle"]), &[1]).is_err());
    }

    #[test]
    fn parses_waypoint_order_from_optimize_response() {
        let data: Response = serde_json::from_str(
            r#"{"status": "OK", "routes": [{"waypoint_order": [1, 0], "legs": []}]}"#,
        )
        .unwrap();

        let route = first_route(data).unwrap();

        assert_eq!(route.waypoint_order, vec![1, 0]);
    }

    #[test]
    fn parses_leg_metrics_from_via_response() {
        let data: Response = serde_json::from_str(
            r#"{
                "status": "OK",
                "routes": [{
                    "legs": [{
                        "distance": {"text": "300 km", "value": 300000},
                        "duration": {"text": "4 hours", "value": 14400}
                    }]
                }]
            }"#,
        )
        .unwrap();

        let route = first_route(data).unwrap();
        let leg = &route.legs[0];

        assert_eq!(leg.distance.text, "300 km");
        assert_eq!(leg.duration.text, "4 hours");
    }

    #[test]
    fn non_ok_status_is_an_upstream_error() {
        let data: Response =
            serde_json::from_str(r#"{"status": "ZERO_RESULTS", "routes": []}"#).unwrap();

        assert!(first_route(data).is_err());
    }

    #[test]
    fn ok_status_without_routes_is_an_upstream_error() {
        let data: Response = serde_json::from_str(r#"{"status": "OK", "routes": []}"#).unwrap();

        assert!(first_route(data).is_err());
    }
}
