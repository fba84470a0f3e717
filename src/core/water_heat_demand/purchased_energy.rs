use crate::core::reference_data::ReferenceData;
use crate::core::water_heat_demand::type_code::TypeCode;
use crate::errors::DataIntegrityError;

/// Annual energy purchased by the hot water system, in MJ.
///
/// Arguments:
/// * `annual_demand` - annual hot water heat demand, in GJ
/// * `type_code` - selects the row of coefficients to use
pub fn annual_purchased_energy(
    reference_data: &ReferenceData,
    annual_demand: f64,
    type_code: &TypeCode,
) -> Result<f64, DataIntegrityError> {
    Ok(reference_data
        .annual_energy
        .coefficients(&type_code.to_string())?
        .evaluate(annual_demand))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::water_heat_demand::climate_zone::ClimateZone;
    use crate::core::water_heat_demand::heater::HotWaterType;
    use crate::core::water_heat_demand::type_code::type_code;
    use crate::tests::fixtures::reference_data;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(HotWaterType::SolarElectric, None, Some(27), 3351.996)]
    #[case(HotWaterType::GasInstantaneous, Some(6.), None, 12611.26)]
    #[case(HotWaterType::ElectricStorageSmall, None, None, 11048.91)]
    #[case(HotWaterType::HeatPump, None, Some(30), 3317.0)]
    #[case(HotWaterType::SolarGas, None, Some(38), 2989.25)]
    fn should_evaluate_annual_purchased_energy(
        reference_data: &ReferenceData,
        #[case] hot_water_type: HotWaterType,
        #[case] star_rating: Option<f64>,
        #[case] certificate_count: Option<u32>,
        #[case] expected: f64,
    ) {
        let type_code = type_code(
            hot_water_type,
            ClimateZone::new(3),
            star_rating,
            certificate_count,
        )
        .unwrap();

        assert_relative_eq!(
            annual_purchased_energy(reference_data, 9.1782, &type_code).unwrap(),
            expected,
            max_relative = 1e-5
        );
    }

    #[rstest]
    fn should_report_incomplete_coefficients(reference_data: &ReferenceData) {
        let type_code = type_code(
            HotWaterType::GasInstantaneous,
            ClimateZone::new(3),
            Some(7.),
            None,
        )
        .unwrap();

        assert_eq!(
            annual_purchased_energy(reference_data, 9.1782, &type_code),
            Err(DataIntegrityError::MissingCoefficients("GIN-3-70".to_owned()))
        );
    }

    #[rstest]
    fn should_report_unlisted_system(reference_data: &ReferenceData) {
        let type_code = type_code(
            HotWaterType::SolarElectric,
            ClimateZone::new(3),
            None,
            Some(99),
        )
        .unwrap();

        assert_eq!(
            annual_purchased_energy(reference_data, 9.1782, &type_code),
            Err(DataIntegrityError::NoDataAvailable("STE-3-99".to_owned()))
        );
    }
}
