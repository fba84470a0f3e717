//! Appliance end uses whose hourly profiles come from monthly tables of percentages.

pub mod cooking;
pub mod lighting;
pub mod plug_loads;

use crate::compare_floats::Tolerance;
use crate::core::demand_series::DemandSeries;
use crate::core::reference_data::annual_shares::HourlySharesByMonth;
use crate::errors::ConsistencyCheckFailure;

const ANNUAL_SHARE_TOLERANCE: Tolerance = Tolerance::Absolute(0.001);

/// Spread an annual load over the reference year using a table of hourly percentages.
///
/// Arguments:
/// * `shares` - percentage of the annual load used in each hour of a day of each month
/// * `profile` - name of the end use, for error reporting
/// * `annual_load` - annual energy, in MJ
pub(crate) fn distribute_annual_load(
    shares: &HourlySharesByMonth,
    profile: &str,
    annual_load: f64,
) -> Result<DemandSeries, ConsistencyCheckFailure> {
    let annual_shares = shares.annual_shares();

    let total = annual_shares.iter().sum::<f64>();
    if !ANNUAL_SHARE_TOLERANCE.admits(total, 100.) {
        return Err(ConsistencyCheckFailure::AnnualSharesNotNormalised {
            profile: profile.to_owned(),
            total,
        });
    }

    DemandSeries::new(
        annual_shares
            .into_iter()
            .map(|share| share * annual_load / 100.)
            .collect(),
    )
}
