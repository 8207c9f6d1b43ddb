use crate::{
    api::DirectionsAPI,
    entities::{Itinerary, TripSummary},
    error::{upstream_error, Error},
};

/// Runs the two-step planning sequence: ask the provider for the best
/// visiting order, then measure the round trip with that order fixed.
#[tracing::instrument(skip(api))]
pub async fn plan_trip<A>(api: &A, itinerary: &Itinerary) -> Result<TripSummary, Error>
where
    A: DirectionsAPI + Sync,
{
    let order = api.optimize_waypoints(itinerary).await?;
    let metrics = api.route_metrics(itinerary, &order).await?;

    let mut ordered_waypoints = Vec::with_capacity(order.len());

    for &index in &order {
        let waypoint = itinerary
            .waypoints
            .get(index)
            .ok_or_else(|| upstream_error())?;
        ordered_waypoints.push(waypoint.clone());
    }

    Ok(TripSummary {
        origin: itinerary.origin.clone(),
        entered_waypoints: itinerary.waypoints.clone(),
        ordered_waypoints,
        distance: metrics.distance,
        duration: metrics.duration,
    })
}
