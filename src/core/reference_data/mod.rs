//! Tables published with the standard, loaded once and shared read-only by every calculation.

pub mod annual_shares;
pub mod climate_zones;
pub mod coefficients;
pub mod cooking_coefficients;
pub mod hourly_profiles;

use crate::core::reference_data::annual_shares::HourlySharesByMonth;
use crate::core::reference_data::climate_zones::{ClimateZoneTable, ZoneLabelFormat};
use crate::core::reference_data::coefficients::CoefficientTable;
use crate::core::reference_data::cooking_coefficients::CookingCoefficients;
use crate::core::reference_data::hourly_profiles::HotWaterProfiles;
use anyhow::Context;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

pub const CLIMATE_ZONES_FILE: &str = "hw_climate_zones_rev10.1.csv";
pub const HEAT_PUMP_CLIMATE_ZONES_FILE: &str = "hw_heat_pump_climate_zones_rev10.1.csv";
pub const ANNUAL_ENERGY_FILE: &str = "hw_annual_energy_by_climate_zone_rev10.1.csv";
pub const MONTHLY_SHARE_FILE: &str = "hw_monthly_share_rev10.1.csv";
pub const HOURLY_COEFFICIENTS_FILE: &str = "hw_hourly_coefficients_rev10.1.csv";
pub const HOURLY_PROFILES_FILE: &str = "hw_hourly_profiles_rev10.1.csv";
pub const COOKING_COEFFICIENTS_FILE: &str = "cooking_coefficients_rev10.1.csv";
pub const COOKING_HOURLY_SHARE_FILE: &str = "cooking_hourly_share_rev10.1.csv";
pub const PLUG_LOAD_HOURLY_SHARE_FILE: &str = "plug_load_hourly_share_rev10.1.csv";
pub const LIGHTING_HOURLY_SHARE_FILE: &str = "lighting_hourly_share_rev10.1.csv";

#[derive(Clone, Debug)]
pub struct ReferenceData {
    pub(crate) climate_zones: ClimateZoneTable,
    pub(crate) heat_pump_climate_zones: ClimateZoneTable,
    pub(crate) annual_energy: CoefficientTable,
    pub(crate) monthly_shares: CoefficientTable,
    pub(crate) hourly_coefficients: CoefficientTable,
    pub(crate) hot_water_profiles: HotWaterProfiles,
    pub(crate) cooking_coefficients: CookingCoefficients,
    pub(crate) cooking_shares: HourlySharesByMonth,
    pub(crate) plug_load_shares: HourlySharesByMonth,
    pub(crate) lighting_shares: HourlySharesByMonth,
}

impl ReferenceData {
    /// Load every table from a directory holding the standard's CSV files under their published
    /// names.
    pub fn from_directory(directory: &Path) -> anyhow::Result<Self> {
        debug!("Loading reference data from {}", directory.display());

        Ok(Self {
            climate_zones: load(directory, CLIMATE_ZONES_FILE, |csv| {
                ClimateZoneTable::new(csv, ZoneLabelFormat::Numeric)
            })?,
            heat_pump_climate_zones: load(directory, HEAT_PUMP_CLIMATE_ZONES_FILE, |csv| {
                ClimateZoneTable::new(csv, ZoneLabelFormat::HeatPump)
            })?,
            annual_energy: load(directory, ANNUAL_ENERGY_FILE, CoefficientTable::new)?,
            monthly_shares: load(directory, MONTHLY_SHARE_FILE, CoefficientTable::new)?,
            hourly_coefficients: load(directory, HOURLY_COEFFICIENTS_FILE, CoefficientTable::new)?,
            hot_water_profiles: load(directory, HOURLY_PROFILES_FILE, HotWaterProfiles::new)?,
            cooking_coefficients: load(
                directory,
                COOKING_COEFFICIENTS_FILE,
                CookingCoefficients::new,
            )?,
            cooking_shares: load(
                directory,
                COOKING_HOURLY_SHARE_FILE,
                HourlySharesByMonth::new,
            )?,
            plug_load_shares: load(
                directory,
                PLUG_LOAD_HOURLY_SHARE_FILE,
                HourlySharesByMonth::new,
            )?,
            lighting_shares: load(
                directory,
                LIGHTING_HOURLY_SHARE_FILE,
                HourlySharesByMonth::new,
            )?,
        })
    }
}

fn load<T>(
    directory: &Path,
    file_name: &str,
    parse: impl FnOnce(BufReader<File>) -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    let path = directory.join(file_name);
    let file = File::open(&path)
        .with_context(|| format!("Could not open reference data file {}", path.display()))?;

    parse(BufReader::new(file))
        .with_context(|| format!("Could not read reference data file {}", path.display()))
}
