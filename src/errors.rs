use crate::core::water_heat_demand::heater::{EnergisationSchedule, HotWaterType};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WohError {
    #[error("Request was considered invalid due to error: {0}")]
    InvalidRequest(#[from] anyhow::Error),
    #[error("Invalid input: {0}")]
    InputValidation(#[from] InputValidationError),
    #[error("Problem with reference data: {0}")]
    DataIntegrity(#[from] DataIntegrityError),
    #[error("Calculation failed a consistency check: {0}")]
    ConsistencyCheck(#[from] ConsistencyCheckFailure),
    #[error("Error writing results: {0}")]
    ErrorWritingOutput(anyhow::Error),
}

/// Errors caused by the inputs describing a dwelling or its appliances. These are always the
/// caller's to fix.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InputValidationError {
    #[error("Invalid postcode {0}, expected a value between 800 and 7470")]
    InvalidPostcode(u32),
    #[error("Invalid dwelling floor area {0}, expected a positive number of square metres")]
    InvalidFloorArea(f64),
    #[error("Invalid climate zone {zone} for hot water type {hot_water_type}")]
    ClimateZoneOutOfRange {
        hot_water_type: HotWaterType,
        zone: u8,
    },
    #[error("No peak load factor is defined for climate zone {0}")]
    NoPeakLoadFactor(u8),
    #[error("Missing gas star rating for hot water type {0}")]
    MissingStarRating(HotWaterType),
    #[error("Gas star rating {rating} for {hot_water_type} is not between {min} and {max}")]
    StarRatingOutOfRange {
        hot_water_type: HotWaterType,
        rating: f64,
        min: f64,
        max: f64,
    },
    #[error("Gas star rating must be in 0.5 star increments, got {0}")]
    StarRatingNotHalfStep(f64),
    #[error("Missing STC count for hot water type {0}")]
    MissingCertificateCount(HotWaterType),
    #[error("Hot water type {hot_water_type} cannot run with a {schedule} energisation schedule")]
    UnsupportedSchedule {
        hot_water_type: HotWaterType,
        schedule: EnergisationSchedule,
    },
    #[error("No auxiliary electric load is modelled for hot water type {0}")]
    AuxiliaryLoadNotModelled(HotWaterType),
}

/// Errors caused by the reference datasets: either the tables are defective or the requested
/// configuration is plausible but not covered by the standard's data.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DataIntegrityError {
    #[error("No climate zone covers postcode {0}")]
    NoClimateZone(u32),
    #[error("Postcode {postcode} matched {matches} climate zone rows, expected exactly one")]
    AmbiguousClimateZone { postcode: u32, matches: usize },
    #[error("Could not read a climate zone from label '{0}'")]
    InvalidZoneLabel(String),
    #[error("No data available for {0}")]
    NoDataAvailable(String),
    #[error("Missing coefficients for {0}")]
    MissingCoefficients(String),
}

/// A post-condition check on an intermediate or final result failed. The reference tables have
/// limited precision, so these checks allow for bounded error; anything beyond the bounds is a
/// modelling or data defect.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConsistencyCheckFailure {
    #[error("Monthly shares for {family} sum to {total}, expected 1")]
    MonthlySharesNotNormalised { family: String, total: f64 },
    #[error("Hourly shares for {source_name} sum to {total}, expected 1")]
    HourlySharesNotNormalised { source_name: String, total: f64 },
    #[error("Annual shares for {profile} sum to {total}%, expected 100%")]
    AnnualSharesNotNormalised { profile: String, total: f64 },
    #[error("Hourly series totals {total} MJ but annual purchased energy is {expected} MJ")]
    SeriesTotalMismatch { total: f64, expected: f64 },
    #[error("Hourly series has negative energy {value} MJ at hour {hour}")]
    NegativeEnergy { hour: usize, value: f64 },
    #[error("Hourly series has {0} values, expected one per hour of the reference year")]
    SeriesLength(usize),
}
