use crate::core::reference_data::ReferenceData;
use crate::core::water_heat_demand::heater::HotWaterType;
use crate::errors::{InputValidationError, WohError};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use tracing::debug;

/// Australian postcodes covered by the climate zone tables.
pub const VALID_POSTCODES: RangeInclusive<u32> = 800..=7470;

/// A hot water climate zone. Heat pumps have their own zoning, so the same number can mean a
/// different region depending on the technology it was resolved for.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ClimateZone(u8);

impl ClimateZone {
    pub(crate) fn new(zone: u8) -> Self {
        Self(zone)
    }

    pub fn number(&self) -> u8 {
        self.0
    }
}

impl Display for ClimateZone {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Find the hot water climate zone for a postcode. Heat pumps are looked up in their own table.
pub fn climate_zone(
    reference_data: &ReferenceData,
    postcode: u32,
    hot_water_type: HotWaterType,
) -> Result<ClimateZone, WohError> {
    if !VALID_POSTCODES.contains(&postcode) {
        return Err(InputValidationError::InvalidPostcode(postcode).into());
    }

    let table = match hot_water_type {
        HotWaterType::HeatPump => &reference_data.heat_pump_climate_zones,
        _ => &reference_data.climate_zones,
    };
    let zone = ClimateZone(table.zone_for_postcode(postcode)?);

    debug!("Postcode {postcode} is in climate zone {zone} for {hot_water_type}");

    Ok(zone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reference_data::climate_zones::{ClimateZoneTable, ZoneLabelFormat};
    use crate::errors::DataIntegrityError;
    use crate::tests::fixtures::reference_data;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Cursor;

    #[rstest]
    #[case(2000, HotWaterType::SolarElectric, 3)]
    #[case(800, HotWaterType::GasStorage, 1)]
    #[case(7470, HotWaterType::GasStorage, 4)]
    #[case(7000, HotWaterType::HeatPump, 5)]
    #[case(4000, HotWaterType::HeatPump, 2)]
    fn should_resolve_climate_zone(
        reference_data: &ReferenceData,
        #[case] postcode: u32,
        #[case] hot_water_type: HotWaterType,
        #[case] expected: u8,
    ) {
        assert_eq!(
            climate_zone(reference_data, postcode, hot_water_type)
                .unwrap()
                .number(),
            expected
        );
    }

    #[rstest]
    #[case(799)]
    #[case(7471)]
    #[case(0)]
    fn should_reject_postcodes_outside_australian_range(
        reference_data: &ReferenceData,
        #[case] postcode: u32,
    ) {
        assert!(matches!(
            climate_zone(reference_data, postcode, HotWaterType::SolarGas),
            Err(WohError::InputValidation(InputValidationError::InvalidPostcode(p)))
                if p == postcode
        ));
    }

    #[test]
    fn should_report_postcode_missing_from_table() {
        let mut reference_data = reference_data().clone();
        reference_data.climate_zones = ClimateZoneTable::new(
            Cursor::new("from_postcode,to_postcode,zone\n800,999,1\n"),
            ZoneLabelFormat::Numeric,
        )
        .unwrap();

        assert!(matches!(
            climate_zone(&reference_data, 2000, HotWaterType::GasStorage),
            Err(WohError::DataIntegrity(DataIntegrityError::NoClimateZone(2000)))
        ));
    }
}
