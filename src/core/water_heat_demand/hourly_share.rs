use crate::compare_floats::Tolerance;
use crate::core::reference_data::hourly_profiles::HotWaterProfile;
use crate::core::reference_data::ReferenceData;
use crate::core::units::HOURS_PER_DAY;
use crate::core::water_heat_demand::heater::{EnergisationSchedule, HeaterVariant, HotWaterType};
use crate::errors::{ConsistencyCheckFailure, DataIntegrityError, InputValidationError, WohError};
use std::fmt;
use std::fmt::{Display, Formatter};
use strum::{EnumIter, IntoEnumIterator};
use tracing::debug;

const HOURLY_SHARE_TOLERANCE: Tolerance = Tolerance::Absolute(0.007);

/// Segments of the daily load curve. Each has its own coefficients, shared by every hour in it.
#[derive(Clone, Copy, Debug, strum::Display, EnumIter, Eq, PartialEq)]
enum LoadCurveSegment {
    A,
    B,
    C,
    D,
}

use LoadCurveSegment::{A, B, C, D};

/// Segment for each hour of the day, from the hour after midnight.
const LOAD_CURVE_SEGMENT_BY_HOUR: [LoadCurveSegment; HOURS_PER_DAY] = [
    A, A, A, A, A, A, A, D, D, A, A, B, A, B, A, C, C, C, C, A, A, A, A, A,
];

/// Where the hourly shares for a heater come from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum HourlyShareSource {
    Profile(HotWaterProfile),
    /// Load curve coefficients for the given technology prefix.
    LoadCurve(&'static str),
}

impl Display for HourlyShareSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            HourlyShareSource::Profile(profile) => write!(f, "{profile}"),
            HourlyShareSource::LoadCurve(prefix) => write!(f, "{prefix} load curve"),
        }
    }
}

fn hourly_share_source(
    variant: HeaterVariant,
    requested: Option<EnergisationSchedule>,
) -> Result<HourlyShareSource, InputValidationError> {
    let schedule = match variant {
        HeaterVariant::Public(hot_water_type) => hot_water_type.permitted_schedule(requested)?,
        HeaterVariant::GasInstantaneousAuxiliary | HeaterVariant::SolarGasAuxiliary => {
            requested.unwrap_or_default()
        }
    };

    let source = match (variant, schedule) {
        (HeaterVariant::SolarGasAuxiliary, _) => {
            HourlyShareSource::Profile(HotWaterProfile::SolarGasAuxiliary)
        }
        (_, EnergisationSchedule::Daytime) => {
            HourlyShareSource::Profile(HotWaterProfile::DaytimeEnergisation)
        }
        (_, EnergisationSchedule::Overnight) => {
            HourlyShareSource::Profile(HotWaterProfile::OvernightEnergisation)
        }
        (
            HeaterVariant::Public(
                HotWaterType::SolidFuel
                | HotWaterType::ElectricInstantaneous
                | HotWaterType::GasInstantaneous
                | HotWaterType::SolarElectric
                | HotWaterType::SolarGas,
            ),
            EnergisationSchedule::Continuous,
        ) => HourlyShareSource::Profile(HotWaterProfile::TimeOfUse),
        (
            HeaterVariant::Public(
                hot_water_type @ (HotWaterType::ElectricStorageSmall
                | HotWaterType::GasStorage
                | HotWaterType::HeatPump),
            ),
            EnergisationSchedule::Continuous,
        ) => HourlyShareSource::LoadCurve(hot_water_type.code_prefix()),
        (HeaterVariant::GasInstantaneousAuxiliary, EnergisationSchedule::Continuous) => {
            HourlyShareSource::LoadCurve(HotWaterType::GasInstantaneous.code_prefix())
        }
        (HeaterVariant::Public(HotWaterType::ElectricStorageLarge), schedule) => {
            return Err(InputValidationError::UnsupportedSchedule {
                hot_water_type: HotWaterType::ElectricStorageLarge,
                schedule,
            });
        }
    };

    Ok(source)
}

/// Evaluate the daily load curve (Equations 31 to 34), one cubic in annual demand per segment.
fn load_curve_shares(
    reference_data: &ReferenceData,
    prefix: &str,
    annual_demand: f64,
) -> Result<[f64; HOURS_PER_DAY], DataIntegrityError> {
    let mut segment_shares = [0.; 4];
    for segment in LoadCurveSegment::iter() {
        segment_shares[segment as usize] = reference_data
            .hourly_coefficients
            .coefficients(&format!("{prefix}-{segment}"))?
            .evaluate(annual_demand);
    }

    Ok(LOAD_CURVE_SEGMENT_BY_HOUR.map(|segment| segment_shares[segment as usize]))
}

/// Share of each day's energy used in each hour, from the hour after midnight.
///
/// Arguments:
/// * `annual_demand` - annual hot water heat demand in GJ, which shapes the load curves
/// * `schedule` - requested energisation schedule, continuous if not given
pub(crate) fn hourly_shares(
    reference_data: &ReferenceData,
    variant: HeaterVariant,
    annual_demand: f64,
    schedule: Option<EnergisationSchedule>,
) -> Result<[f64; HOURS_PER_DAY], WohError> {
    let source = hourly_share_source(variant, schedule)?;
    debug!("Hourly shares for {variant:?} come from the {source}");

    let shares = match source {
        HourlyShareSource::Profile(profile) => reference_data.hot_water_profiles.shares(profile),
        HourlyShareSource::LoadCurve(prefix) => {
            load_curve_shares(reference_data, prefix, annual_demand)?
        }
    };

    let total = shares.iter().sum::<f64>();
    if !HOURLY_SHARE_TOLERANCE.admits(total, 1.) {
        return Err(ConsistencyCheckFailure::HourlySharesNotNormalised {
            source_name: source.to_string(),
            total,
        }
        .into());
    }

    Ok(shares)
}

/// Hourly shares for a hot water system.
pub fn hourly_shares_for(
    reference_data: &ReferenceData,
    hot_water_type: HotWaterType,
    annual_demand: f64,
    schedule: Option<EnergisationSchedule>,
) -> Result<[f64; HOURS_PER_DAY], WohError> {
    hourly_shares(
        reference_data,
        hot_water_type.into(),
        annual_demand,
        schedule,
    )
}
