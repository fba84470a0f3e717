use crate::core::demand_series::DemandSeries;
use crate::core::end_use::distribute_annual_load;
use crate::core::reference_data::ReferenceData;
use crate::errors::WohError;

const BASE_LOAD: f64 = 7022.4;
const LOAD_PER_OCCUPANT: f64 = 441.65;

/// Annual plug load energy, in MJ.
pub fn annual_load(occupants: f64) -> f64 {
    BASE_LOAD + LOAD_PER_OCCUPANT * occupants
}

pub fn hourly_energy(
    reference_data: &ReferenceData,
    occupants: f64,
) -> Result<DemandSeries, WohError> {
    Ok(distribute_annual_load(
        &reference_data.plug_load_shares,
        "plug loads",
        annual_load(occupants),
    )?)
}
