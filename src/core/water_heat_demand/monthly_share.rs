use crate::compare_floats::Tolerance;
use crate::core::reference_data::ReferenceData;
use crate::core::water_heat_demand::type_code::SystemFamily;
use crate::errors::{ConsistencyCheckFailure, WohError};
use crate::reference_year::Month;
use strum::IntoEnumIterator;

const MONTHLY_SHARE_TOLERANCE: Tolerance = Tolerance::Absolute(0.005);

/// Share of annual purchased energy used in each month, January first.
///
/// Shares of a family that splits its energy between fuels are not expected to sum to one on
/// their own, so they are not checked here.
pub fn monthly_shares(
    reference_data: &ReferenceData,
    family: &SystemFamily,
    annual_demand: f64,
) -> Result<[f64; 12], WohError> {
    let mut shares = [0.; 12];
    for month in Month::iter() {
        shares[month.index()] = reference_data
            .monthly_shares
            .coefficients(&format!("{family}-{month}"))?
            .evaluate(annual_demand);
    }

    if !family.splits_fuels() {
        let total = shares.iter().sum::<f64>();
        if !MONTHLY_SHARE_TOLERANCE.admits(total, 1.) {
            return Err(ConsistencyCheckFailure::MonthlySharesNotNormalised {
                family: family.to_string(),
                total,
            }
            .into());
        }
    }

    Ok(shares)
}
