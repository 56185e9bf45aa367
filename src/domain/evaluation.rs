//! Cost comparison engine.
//!
//! Everything here is a pure function of its inputs and the immutable
//! [`CostTable`]. Amounts are kept unrounded; rounding happens when a
//! breakdown is rendered.

use log::{debug, trace};
use serde::Serialize;

use super::{
    distribution::AttendeeDistribution,
    error::EstimateError,
    location::{CostTable, LocationId},
};

/// Validated inputs for one estimate, built by the wizard or roster import.
#[derive(Clone, Debug, PartialEq)]
pub struct TripRequest {
    pub distribution: AttendeeDistribution,
    pub total_attendees: u32,
    pub days: u32,
    pub destination: LocationId,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DestinationCostBreakdown {
    pub destination: LocationId,
    pub total_attendees: u32,
    pub days: u32,
    pub local_attendee_count: u32,
    pub traveling_attendee_count: u32,
    pub flight_total: f64,
    pub hotel_total: f64,
    pub meal_total: f64,
    pub ground_transport_total: f64,
    pub grand_total: f64,
    pub per_person_cost: f64,
}

pub fn evaluate_destination(
    table: &CostTable,
    distribution: &AttendeeDistribution,
    total_attendees: u32,
    days: u32,
    destination_id: &str,
) -> Result<DestinationCostBreakdown, EstimateError> {
    if total_attendees == 0 {
        return Err(EstimateError::InvalidAttendeeCount(total_attendees));
    }
    if days == 0 {
        return Err(EstimateError::InvalidDuration(days));
    }
    let profile = table.get(destination_id)?;
    distribution.validate(table, total_attendees)?;

    // validate() guarantees the local count never exceeds the total.
    let local = distribution.count_for(&profile.id);
    let traveling = total_attendees - local;

    let traveling_f = f64::from(traveling);
    let total_f = f64::from(total_attendees);
    let days_f = f64::from(days);

    let flight_total = profile.flight_cost * traveling_f;
    let hotel_total = profile.hotel_cost_per_night * traveling_f * days_f;
    let meal_total = profile.meal_cost_per_day * total_f * days_f;
    let ground_transport_total = profile.ground_transport_cost * traveling_f;
    let grand_total = flight_total + hotel_total + meal_total + ground_transport_total;

    trace!(
        "evaluated {}: local={local} traveling={traveling} total={grand_total}",
        profile.id
    );

    Ok(DestinationCostBreakdown {
        destination: profile.id.clone(),
        total_attendees,
        days,
        local_attendee_count: local,
        traveling_attendee_count: traveling,
        flight_total,
        hotel_total,
        meal_total,
        ground_transport_total,
        grand_total,
        per_person_cost: grand_total / total_f,
    })
}

/// Breakdowns for every destination, in table order.
pub fn evaluate_all_destinations(
    table: &CostTable,
    distribution: &AttendeeDistribution,
    total_attendees: u32,
    days: u32,
) -> Result<Vec<DestinationCostBreakdown>, EstimateError> {
    table
        .ids()
        .map(|id| evaluate_destination(table, distribution, total_attendees, days, id.as_str()))
        .collect()
}

/// First destination with the strictly lowest grand total.
pub fn find_cheapest(breakdowns: &[DestinationCostBreakdown]) -> Result<LocationId, EstimateError> {
    let mut best: Option<&DestinationCostBreakdown> = None;
    for breakdown in breakdowns {
        match best {
            Some(current) if breakdown.grand_total >= current.grand_total => {}
            _ => best = Some(breakdown),
        }
    }

    best.map(|breakdown| breakdown.destination.clone())
        .ok_or(EstimateError::EmptyInput)
}

/// The chosen destination alongside every alternative.
#[derive(Clone, Debug, PartialEq)]
pub struct CostComparison {
    pub chosen: DestinationCostBreakdown,
    pub destinations: Vec<DestinationCostBreakdown>,
    pub cheapest: LocationId,
}

impl CostComparison {
    pub fn cheapest_breakdown(&self) -> &DestinationCostBreakdown {
        self.breakdown_for(&self.cheapest).unwrap_or(&self.chosen)
    }

    pub fn breakdown_for(&self, id: &LocationId) -> Option<&DestinationCostBreakdown> {
        self.destinations
            .iter()
            .find(|breakdown| &breakdown.destination == id)
    }

    pub fn chosen_is_cheapest(&self) -> bool {
        self.chosen.destination == self.cheapest
    }

    /// How much the cheapest destination saves over the chosen one.
    pub fn potential_savings(&self) -> f64 {
        self.chosen.grand_total - self.cheapest_breakdown().grand_total
    }

    /// Positive when `breakdown` is cheaper than the chosen destination.
    pub fn savings_versus_chosen(&self, breakdown: &DestinationCostBreakdown) -> f64 {
        self.chosen.grand_total - breakdown.grand_total
    }
}

pub fn compare_destinations(
    table: &CostTable,
    request: &TripRequest,
) -> Result<CostComparison, EstimateError> {
    let destinations = evaluate_all_destinations(
        table,
        &request.distribution,
        request.total_attendees,
        request.days,
    )?;
    let chosen = destinations
        .iter()
        .find(|breakdown| breakdown.destination == request.destination)
        .cloned()
        .ok_or_else(|| EstimateError::UnknownLocation(request.destination.to_string()))?;
    let cheapest = find_cheapest(&destinations)?;

    debug!(
        "compared {} destinations for {} attendees over {} days; chosen {} ({:.2}), cheapest {}",
        destinations.len(),
        request.total_attendees,
        request.days,
        chosen.destination,
        chosen.grand_total,
        cheapest
    );

    Ok(CostComparison {
        chosen,
        destinations,
        cheapest,
    })
}
