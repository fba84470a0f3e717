use crate::core::units::{megajoules_to_gigajoules, DAYS_PER_YEAR};
use crate::core::water_heat_demand::climate_zone::ClimateZone;
use crate::errors::InputValidationError;

/// Daily hot water volume assumed per occupant, in litres.
const LITRES_PER_OCCUPANT: f64 = 40.;

/// Ratio of average daily demand over the year to the winter peak.
const ANNUAL_TO_PEAK_RATIO: f64 = 0.904521;

/// Litres of hot water supplied per MJ of heat in winter, by climate zone.
fn litres_per_megajoule(zone: ClimateZone) -> Result<f64, InputValidationError> {
    match zone.number() {
        1 => Ok(6.144),
        2 => Ok(5.482),
        3 => Ok(5.107),
        4 => Ok(4.746),
        5 => Ok(4.514),
        other => Err(InputValidationError::NoPeakLoadFactor(other)),
    }
}

/// Daily hot water heat demand in the peak winter month, in MJ (Equation 25).
pub fn winter_peak_demand(occupants: f64, zone: ClimateZone) -> Result<f64, InputValidationError> {
    Ok(LITRES_PER_OCCUPANT * occupants / litres_per_megajoule(zone)?)
}

/// Annual hot water heat demand, in GJ.
pub fn annual_demand(winter_peak_demand: f64) -> f64 {
    megajoules_to_gigajoules(winter_peak_demand * DAYS_PER_YEAR as f64 * ANNUAL_TO_PEAK_RATIO)
}
