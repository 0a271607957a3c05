//! Derived trip metrics over a routing result.
//!
//! A pure function of the total distance; no error conditions.  The
//! constants are the navigator's fixed assumptions: 0.12 L/km consumption,
//! a 40 km/h average urban speed, and a flat per-litre fuel price.

use crate::router::PathResult;

/// Fuel consumption in litres per kilometre.
pub const FUEL_LITERS_PER_KM: f64 = 0.12;
/// Assumed average speed in km/h for time estimates.
pub const AVERAGE_SPEED_KMH: f64 = 40.0;
/// Fuel price in currency units per litre.
pub const FUEL_PRICE_PER_LITER: f64 = 1.5;

/// Fuel, time, and cost figures for one trip.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripEstimate {
    /// Litres of fuel, rounded to 2 decimal places.
    pub fuel_liters: f64,
    /// Whole hours of travel time (floor).
    pub hours: u32,
    /// Remaining minutes (rounded).
    pub minutes: u32,
    /// Fuel cost in currency units, rounded to 2 decimal places.
    ///
    /// Derived from the already-rounded `fuel_liters` figure, so the
    /// displayed litres and cost always agree.
    pub fuel_cost: f64,
}

impl TripEstimate {
    /// Estimate a trip over `distance_km`.  A distance of 0 yields the
    /// all-zero estimate.
    pub fn for_distance(distance_km: f64) -> Self {
        debug_assert!(distance_km >= 0.0, "trip distance must be non-negative");
        let fuel_liters = round2(distance_km * FUEL_LITERS_PER_KM);
        let time_hours = distance_km / AVERAGE_SPEED_KMH;
        let hours = time_hours.floor() as u32;
        let minutes = ((time_hours - time_hours.floor()) * 60.0).round() as u32;
        let fuel_cost = round2(fuel_liters * FUEL_PRICE_PER_LITER);
        Self { fuel_liters, hours, minutes, fuel_cost }
    }

    /// Two-decimal rendering of the fuel requirement, e.g. `"12.00"`.
    pub fn fuel_display(&self) -> String {
        format!("{:.2}", self.fuel_liters)
    }

    /// Two-decimal rendering of the fuel cost, e.g. `"18.00"`.
    pub fn cost_display(&self) -> String {
        format!("{:.2}", self.fuel_cost)
    }
}

impl From<&PathResult> for TripEstimate {
    fn from(result: &PathResult) -> Self {
        Self::for_distance(f64::from(result.distance_km))
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
