use crate::core::demand_series::DemandSeries;
use crate::core::end_use::distribute_annual_load;
use crate::core::reference_data::ReferenceData;
use crate::core::units::{DAYS_PER_YEAR, KILOJOULES_PER_MEGAJOULE, KILOJOULES_PER_WATT_HOUR};
use crate::errors::{InputValidationError, WohError};

/// Installed lighting power density, in W/m2.
const LIGHTING_POWER_DENSITY: f64 = 5.;
/// Average daily hours of use.
const HOURS_OF_USE_PER_DAY: f64 = 1.6;

/// Annual lighting energy, in MJ.
///
/// Arguments:
/// * `dwelling_area` - floor area of all zones excluding garage, in m2
pub fn annual_load(dwelling_area: f64) -> f64 {
    let annual_watt_hours =
        LIGHTING_POWER_DENSITY * HOURS_OF_USE_PER_DAY * dwelling_area * DAYS_PER_YEAR as f64;

    annual_watt_hours * KILOJOULES_PER_WATT_HOUR / KILOJOULES_PER_MEGAJOULE
}

pub fn hourly_energy(
    reference_data: &ReferenceData,
    dwelling_area: f64,
) -> Result<DemandSeries, WohError> {
    if !dwelling_area.is_finite() || dwelling_area <= 0. {
        return Err(InputValidationError::InvalidFloorArea(dwelling_area).into());
    }

    Ok(distribute_annual_load(
        &reference_data.lighting_shares,
        "lighting",
        annual_load(dwelling_area),
    )?)
}
