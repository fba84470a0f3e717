use crate::core::demand_series::DemandSeries;
use crate::core::end_use::distribute_annual_load;
use crate::core::reference_data::ReferenceData;
use crate::errors::WohError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(Clone, Copy, Debug, Deserialize, Display, EnumIter, Eq, PartialEq, Serialize)]
pub enum CooktopType {
    Gas,
    Electric,
    Induction,
}

impl CooktopType {
    fn coefficient_column(&self) -> &'static str {
        match self {
            CooktopType::Gas => "gas cooktop",
            CooktopType::Electric => "electric cooktop",
            CooktopType::Induction => "induction cooktop",
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Display, EnumIter, Eq, PartialEq, Serialize)]
pub enum OvenType {
    Gas,
    Electric,
}

impl OvenType {
    fn coefficient_column(&self) -> &'static str {
        match self {
            OvenType::Gas => "gas oven",
            OvenType::Electric => "electric oven",
        }
    }
}

/// Annual cooktop energy, in MJ.
pub fn cooktop_annual_load(
    reference_data: &ReferenceData,
    occupants: f64,
    cooktop: CooktopType,
) -> Result<f64, WohError> {
    Ok(reference_data
        .cooking_coefficients
        .for_appliance(cooktop.coefficient_column())?
        .evaluate(occupants))
}

/// Annual oven energy, in MJ.
pub fn oven_annual_load(
    reference_data: &ReferenceData,
    occupants: f64,
    oven: OvenType,
) -> Result<f64, WohError> {
    Ok(reference_data
        .cooking_coefficients
        .for_appliance(oven.coefficient_column())?
        .evaluate(occupants))
}

/// Hourly cooktop and oven energy. Both follow the same cooking profile.
pub fn hourly_energy(
    reference_data: &ReferenceData,
    occupants: f64,
    cooktop: CooktopType,
    oven: OvenType,
) -> Result<(DemandSeries, DemandSeries), WohError> {
    let cooktop_series = distribute_annual_load(
        &reference_data.cooking_shares,
        "cooking",
        cooktop_annual_load(reference_data, occupants, cooktop)?,
    )?;
    let oven_series = distribute_annual_load(
        &reference_data.cooking_shares,
        "cooking",
        oven_annual_load(reference_data, occupants, oven)?,
    )?;

    Ok((cooktop_series, oven_series))
}
