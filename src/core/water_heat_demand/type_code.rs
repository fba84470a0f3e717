use crate::core::water_heat_demand::climate_zone::ClimateZone;
use crate::core::water_heat_demand::heater::HotWaterType;
use crate::errors::InputValidationError;
use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::warn;

const SOLAR_GAS_AUXILIARY_PREFIX: &str = "STX";

/// A technology in a climate zone, e.g. `STE-3`. Monthly shares are keyed by family.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SystemFamily {
    prefix: &'static str,
    zone: ClimateZone,
}

impl SystemFamily {
    /// The auxiliary electric booster of a solar gas system, which has its own monthly shares.
    pub fn solar_gas_auxiliary(zone: ClimateZone) -> Self {
        Self {
            prefix: SOLAR_GAS_AUXILIARY_PREFIX,
            zone,
        }
    }

    /// Whether the family is one of a pair whose monthly shares only sum to one together, as
    /// solar gas splits its energy between gas and auxiliary electricity.
    pub fn splits_fuels(&self) -> bool {
        self.prefix == HotWaterType::SolarGas.code_prefix()
            || self.prefix == SOLAR_GAS_AUXILIARY_PREFIX
    }
}

impl Display for SystemFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.prefix, self.zone)
    }
}

/// Key selecting annual purchased energy coefficients, e.g. `STE-3-27` or `GIN-3-60`. The suffix
/// is the certificate count for solar and heat pump systems, ten times the star rating for gas
/// systems, and zero otherwise.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TypeCode {
    family: SystemFamily,
    suffix: u32,
}

impl TypeCode {
    pub fn family(&self) -> SystemFamily {
        self.family
    }

    pub fn suffix(&self) -> u32 {
        self.suffix
    }
}

impl Display for TypeCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.family, self.suffix)
    }
}

/// Build the type code identifying a hot water system's row in the reference tables.
pub fn type_code(
    hot_water_type: HotWaterType,
    zone: ClimateZone,
    star_rating: Option<f64>,
    certificate_count: Option<u32>,
) -> Result<TypeCode, InputValidationError> {
    if !(1..=hot_water_type.max_climate_zone()).contains(&zone.number()) {
        return Err(InputValidationError::ClimateZoneOutOfRange {
            hot_water_type,
            zone: zone.number(),
        });
    }

    let suffix = match hot_water_type {
        HotWaterType::SolidFuel
        | HotWaterType::ElectricStorageSmall
        | HotWaterType::ElectricStorageLarge
        | HotWaterType::ElectricInstantaneous => {
            ignore_star_rating(hot_water_type, star_rating)?;
            warn_if_ignored(hot_water_type, "STC count", certificate_count);
            0
        }
        HotWaterType::GasStorage => {
            warn_if_ignored(hot_water_type, "STC count", certificate_count);
            star_rating_code(hot_water_type, star_rating, 4., 5.)?
        }
        HotWaterType::GasInstantaneous => {
            warn_if_ignored(hot_water_type, "STC count", certificate_count);
            star_rating_code(hot_water_type, star_rating, 4., 7.)?
        }
        HotWaterType::SolarElectric | HotWaterType::SolarGas | HotWaterType::HeatPump => {
            ignore_star_rating(hot_water_type, star_rating)?;
            certificate_count.ok_or(InputValidationError::MissingCertificateCount(hot_water_type))?
        }
    };

    Ok(TypeCode {
        family: SystemFamily {
            prefix: hot_water_type.code_prefix(),
            zone,
        },
        suffix,
    })
}

fn star_rating_code(
    hot_water_type: HotWaterType,
    star_rating: Option<f64>,
    min: f64,
    max: f64,
) -> Result<u32, InputValidationError> {
    let rating = star_rating.ok_or(InputValidationError::MissingStarRating(hot_water_type))?;

    if !(min..=max).contains(&rating) {
        return Err(InputValidationError::StarRatingOutOfRange {
            hot_water_type,
            rating,
            min,
            max,
        });
    }

    half_star_code(rating)
}

/// Gas star ratings come in half stars, so ten times the rating is a whole multiple of five.
fn half_star_code(rating: f64) -> Result<u32, InputValidationError> {
    let scaled = rating * 10.;
    let code = scaled.round();
    if !is_close!(scaled, code, abs_tol = 1e-9) || code < 0. || code as u32 % 5 != 0 {
        return Err(InputValidationError::StarRatingNotHalfStep(rating));
    }

    Ok(code as u32)
}

/// A star rating given for a system without one plays no part in its type code, but must still
/// be a whole number of half stars.
fn ignore_star_rating(
    hot_water_type: HotWaterType,
    star_rating: Option<f64>,
) -> Result<(), InputValidationError> {
    if let Some(rating) = star_rating {
        half_star_code(rating)?;
    }
    warn_if_ignored(hot_water_type, "star rating", star_rating);

    Ok(())
}

fn warn_if_ignored<T: Display>(hot_water_type: HotWaterType, what: &str, value: Option<T>) {
    if let Some(value) = value {
        warn!("Ignoring {what} {value} given for hot water type {hot_water_type}");
    }
}
