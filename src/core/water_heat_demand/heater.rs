use crate::errors::InputValidationError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::debug;

/// Hot water system technologies covered by the standard.
#[derive(Clone, Copy, Debug, Deserialize, Display, EnumIter, Eq, Hash, PartialEq, Serialize)]
pub enum HotWaterType {
    SolidFuel,
    ElectricStorageSmall,
    ElectricStorageLarge,
    ElectricInstantaneous,
    GasStorage,
    GasInstantaneous,
    SolarElectric,
    SolarGas,
    HeatPump,
}

impl HotWaterType {
    /// Abbreviation used for this technology in the standard's data tables.
    pub fn code_prefix(&self) -> &'static str {
        match self {
            HotWaterType::SolidFuel => "SOF",
            HotWaterType::ElectricStorageSmall => "ESS",
            HotWaterType::ElectricStorageLarge => "ESL",
            HotWaterType::ElectricInstantaneous => "ESI",
            HotWaterType::GasStorage => "GST",
            HotWaterType::GasInstantaneous => "GIN",
            HotWaterType::SolarElectric => "STE",
            HotWaterType::SolarGas => "STG",
            HotWaterType::HeatPump => "SHP",
        }
    }

    /// Highest climate zone number for this technology. Heat pumps use their own zoning, which
    /// has one more zone than the others.
    pub fn max_climate_zone(&self) -> u8 {
        match self {
            HotWaterType::HeatPump => 5,
            _ => 4,
        }
    }

    /// Check the energisation schedule requested for this technology, falling back to continuous
    /// energisation when none is given.
    pub fn permitted_schedule(
        &self,
        requested: Option<EnergisationSchedule>,
    ) -> Result<EnergisationSchedule, InputValidationError> {
        let schedule = requested.unwrap_or_default();
        let unsupported = || InputValidationError::UnsupportedSchedule {
            hot_water_type: *self,
            schedule,
        };

        match self {
            HotWaterType::SolidFuel => {
                // the standard is unclear here, so solid fuel always runs continuously
                if schedule != EnergisationSchedule::Continuous {
                    debug!("{self} ignores {schedule} energisation and runs continuously");
                }
                Ok(EnergisationSchedule::Continuous)
            }
            // there is no load-dependent method for large electric storage
            HotWaterType::ElectricStorageLarge => match schedule {
                EnergisationSchedule::Continuous => Err(unsupported()),
                EnergisationSchedule::Daytime | EnergisationSchedule::Overnight => Ok(schedule),
            },
            HotWaterType::ElectricInstantaneous
            | HotWaterType::GasStorage
            | HotWaterType::GasInstantaneous
            | HotWaterType::SolarGas => match schedule {
                EnergisationSchedule::Continuous => Ok(schedule),
                EnergisationSchedule::Daytime | EnergisationSchedule::Overnight => {
                    Err(unsupported())
                }
            },
            HotWaterType::ElectricStorageSmall
            | HotWaterType::SolarElectric
            | HotWaterType::HeatPump => Ok(schedule),
        }
    }
}

/// When a hot water system draws energy.
#[derive(Clone, Copy, Debug, Default, Deserialize, Display, EnumIter, Eq, PartialEq, Serialize)]
pub enum EnergisationSchedule {
    /// Runs to a fixed daytime schedule.
    Daytime,
    /// Runs to a fixed overnight schedule.
    Overnight,
    /// Always on, so demand follows hot water usage.
    #[default]
    Continuous,
}

/// The public hot water types plus the auxiliary electrical loads of gas-boosted systems. Those
/// loads are treated as independent hot water units for the analysis, so they must never be
/// requested directly by callers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum HeaterVariant {
    Public(HotWaterType),
    #[allow(dead_code)]
    GasInstantaneousAuxiliary,
    SolarGasAuxiliary,
}

impl From<HotWaterType> for HeaterVariant {
    fn from(hot_water_type: HotWaterType) -> Self {
        HeaterVariant::Public(hot_water_type)
    }
}
