mod test_hot_water {
    use crate::core::reference_data::ReferenceData;
    use crate::core::water_heat_demand::heater::{EnergisationSchedule, HotWaterType};
    use crate::core::water_heat_demand::hot_water::*;
    use crate::errors::{DataIntegrityError, InputValidationError, WohError};
    use crate::reference_year::{Month, HOURS_IN_REFERENCE_YEAR};
    use crate::tests::fixtures::reference_data;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rstest::*;

    const FLOOR_AREA: f64 = 200.;
    const SYDNEY: u32 = 2000;

    fn with_certificates(certificate_count: u32) -> HotWaterOptions {
        HotWaterOptions {
            certificate_count: Some(certificate_count),
            ..Default::default()
        }
    }

    fn with_star_rating(star_rating: f64) -> HotWaterOptions {
        HotWaterOptions {
            star_rating: Some(star_rating),
            ..Default::default()
        }
    }

    fn with_schedule(schedule: EnergisationSchedule) -> HotWaterOptions {
        HotWaterOptions {
            energisation_schedule: Some(schedule),
            ..Default::default()
        }
    }

    fn on_schedule(certificate_count: u32, schedule: EnergisationSchedule) -> HotWaterOptions {
        HotWaterOptions {
            energisation_schedule: Some(schedule),
            ..with_certificates(certificate_count)
        }
    }

    #[rstest]
    fn solar_electric_worked_example(reference_data: &ReferenceData) {
        let demand = hourly_purchased_energy(
            reference_data,
            FLOOR_AREA,
            SYDNEY,
            HotWaterType::SolarElectric,
            with_certificates(27),
        )
        .unwrap();

        assert_eq!(demand.type_code.to_string(), "STE-3-27");
        assert_relative_eq!(demand.annual_demand, 9.178, max_relative = 1e-3);
        assert_relative_eq!(demand.annual_purchased_energy, 3351.996, epsilon = 5.);
        assert_eq!(demand.series.len(), HOURS_IN_REFERENCE_YEAR);
        assert_relative_eq!(demand.series.total(), 3351.996, epsilon = 5.);
        assert_eq!(demand.auxiliary_series, None);
    }

    #[rstest]
    fn gas_instantaneous_worked_example(reference_data: &ReferenceData) {
        let demand = hourly_purchased_energy(
            reference_data,
            FLOOR_AREA,
            SYDNEY,
            HotWaterType::GasInstantaneous,
            with_star_rating(6.),
        )
        .unwrap();

        assert_eq!(demand.type_code.to_string(), "GIN-3-60");
        assert_relative_eq!(demand.annual_purchased_energy, 12611.26, epsilon = 3.);
        assert_relative_eq!(demand.series.total(), 12611.26, epsilon = 3.);
    }

    #[rstest]
    fn electric_storage_small_worked_example(reference_data: &ReferenceData) {
        let demand = hourly_purchased_energy(
            reference_data,
            FLOOR_AREA,
            SYDNEY,
            HotWaterType::ElectricStorageSmall,
            HotWaterOptions::default(),
        )
        .unwrap();

        assert_relative_eq!(demand.annual_purchased_energy, 11048.91, epsilon = 3.);
        assert_relative_eq!(demand.series.total(), 11048.91, epsilon = 50.);

        // the first hour of the year is in segment A of the load curve
        let january_share = reference_data
            .monthly_shares
            .coefficients("ESS-3-JAN")
            .unwrap()
            .evaluate(demand.annual_demand);
        let segment_a_share = 0.03 + 0.0002 * demand.annual_demand;
        assert_relative_eq!(
            demand.series[0],
            demand.annual_purchased_energy * january_share / 31. * segment_a_share,
            max_relative = 1e-9
        );
    }

    #[rstest]
    fn heat_pump_worked_example(reference_data: &ReferenceData) {
        let demand = hourly_purchased_energy(
            reference_data,
            FLOOR_AREA,
            SYDNEY,
            HotWaterType::HeatPump,
            with_certificates(30),
        )
        .unwrap();

        assert_eq!(demand.type_code.to_string(), "SHP-3-30");
        assert_relative_eq!(demand.annual_purchased_energy, 3317., epsilon = 5.);
        assert_relative_eq!(demand.series.total(), 3317., epsilon = 5.);
    }

    #[rstest]
    fn heat_pump_should_use_its_own_climate_zones(reference_data: &ReferenceData) {
        // Hobart is zone 4 for other systems but heat pump zone 5
        let demand = hourly_purchased_energy(
            reference_data,
            FLOOR_AREA,
            7000,
            HotWaterType::HeatPump,
            with_certificates(30),
        )
        .unwrap();

        assert_eq!(demand.type_code.to_string(), "SHP-5-30");
        assert_relative_eq!(demand.annual_demand, 10.38576, max_relative = 1e-5);
        assert_relative_eq!(demand.series.total(), 4042.818, max_relative = 1e-5);
    }

    #[rstest]
    fn solar_gas_should_return_auxiliary_series_on_request(reference_data: &ReferenceData) {
        let demand = hourly_purchased_energy(
            reference_data,
            FLOOR_AREA,
            SYDNEY,
            HotWaterType::SolarGas,
            HotWaterOptions {
                certificate_count: Some(38),
                include_auxiliary: true,
                ..Default::default()
            },
        )
        .unwrap();
        let auxiliary_series = demand.auxiliary_series.unwrap();

        assert_eq!(demand.type_code.to_string(), "STG-3-38");
        assert_eq!(demand.series.len(), HOURS_IN_REFERENCE_YEAR);
        assert_eq!(auxiliary_series.len(), HOURS_IN_REFERENCE_YEAR);
        assert_relative_eq!(demand.series.total(), 2854.944, epsilon = 0.01);
        assert_relative_eq!(auxiliary_series.total(), 134.526, epsilon = 0.01);
        assert_relative_eq!(
            demand.series.total() + auxiliary_series.total(),
            2989.25,
            epsilon = 1.
        );
    }

    #[rstest]
    fn solar_gas_should_return_gas_alone_by_default(reference_data: &ReferenceData) {
        let demand = hourly_purchased_energy(
            reference_data,
            FLOOR_AREA,
            SYDNEY,
            HotWaterType::SolarGas,
            with_certificates(38),
        )
        .unwrap();

        assert_eq!(demand.auxiliary_series, None);
        assert!(demand.series.total() < 0.99 * demand.annual_purchased_energy);
    }

    #[rstest]
    fn overnight_energisation_should_only_draw_at_night(reference_data: &ReferenceData) {
        let demand = hourly_purchased_energy(
            reference_data,
            FLOOR_AREA,
            SYDNEY,
            HotWaterType::ElectricStorageLarge,
            with_schedule(EnergisationSchedule::Overnight),
        )
        .unwrap();

        for (hour, energy) in demand.series.values().iter().enumerate() {
            let hour_of_day = hour % 24;
            if (6..22).contains(&hour_of_day) {
                assert_eq!(*energy, 0., "energy drawn at hour {hour}");
            } else {
                assert!(*energy > 0.);
            }
        }
        assert_relative_eq!(demand.series.total(), 11314.13, epsilon = 0.01);
    }

    #[rstest]
    fn monthly_totals_should_follow_monthly_shares(reference_data: &ReferenceData) {
        let demand = hourly_purchased_energy(
            reference_data,
            FLOOR_AREA,
            SYDNEY,
            HotWaterType::SolidFuel,
            HotWaterOptions::default(),
        )
        .unwrap();

        let july_share = reference_data
            .monthly_shares
            .coefficients("SOF-3-JUL")
            .unwrap()
            .evaluate(demand.annual_demand);
        assert_relative_eq!(
            demand.series.month(Month::Jul).iter().sum::<f64>(),
            july_share * demand.annual_purchased_energy,
            max_relative = 1e-9
        );
        assert_relative_eq!(demand.series.total(), 14122.39, epsilon = 0.01);
    }

    #[rstest]
    #[case(HotWaterType::SolidFuel, HotWaterOptions::default())]
    #[case(HotWaterType::ElectricStorageSmall, HotWaterOptions::default())]
    #[case(HotWaterType::ElectricStorageSmall, with_schedule(EnergisationSchedule::Daytime))]
    #[case(HotWaterType::ElectricStorageSmall, with_schedule(EnergisationSchedule::Overnight))]
    #[case(HotWaterType::ElectricStorageLarge, with_schedule(EnergisationSchedule::Daytime))]
    #[case(HotWaterType::ElectricStorageLarge, with_schedule(EnergisationSchedule::Overnight))]
    #[case(HotWaterType::ElectricInstantaneous, HotWaterOptions::default())]
    #[case(HotWaterType::GasStorage, with_star_rating(4.5))]
    #[case(HotWaterType::GasStorage, with_star_rating(5.))]
    #[case(HotWaterType::GasInstantaneous, with_star_rating(6.))]
    #[case(HotWaterType::SolarElectric, with_certificates(27))]
    #[case(HotWaterType::SolarElectric, on_schedule(27, EnergisationSchedule::Overnight))]
    #[case(HotWaterType::SolarGas, with_certificates(38))]
    #[case(HotWaterType::HeatPump, with_certificates(30))]
    #[case(HotWaterType::HeatPump, on_schedule(30, EnergisationSchedule::Daytime))]
    fn every_valid_configuration_should_give_a_full_year(
        reference_data: &ReferenceData,
        #[case] hot_water_type: HotWaterType,
        #[case] options: HotWaterOptions,
    ) {
        let demand =
            hourly_purchased_energy(reference_data, FLOOR_AREA, SYDNEY, hot_water_type, options)
                .unwrap();

        assert_eq!(demand.series.len(), HOURS_IN_REFERENCE_YEAR);
        assert!(demand.series.values().iter().all(|energy| *energy >= 0.));
        if hot_water_type != HotWaterType::SolarGas {
            assert_relative_eq!(
                demand.series.total(),
                demand.annual_purchased_energy,
                max_relative = 0.007
            );
        }
    }

    #[rstest]
    #[case(799)]
    #[case(7471)]
    fn should_reject_postcode_outside_australia(
        reference_data: &ReferenceData,
        #[case] postcode: u32,
    ) {
        assert!(matches!(
            hourly_purchased_energy(
                reference_data,
                FLOOR_AREA,
                postcode,
                HotWaterType::SolarElectric,
                with_certificates(27)
            ),
            Err(WohError::InputValidation(InputValidationError::InvalidPostcode(_)))
        ));
    }

    #[rstest]
    fn should_reject_gas_storage_without_star_rating(reference_data: &ReferenceData) {
        assert!(matches!(
            hourly_purchased_energy(
                reference_data,
                FLOOR_AREA,
                SYDNEY,
                HotWaterType::GasStorage,
                HotWaterOptions::default()
            ),
            Err(WohError::InputValidation(
                InputValidationError::MissingStarRating(HotWaterType::GasStorage)
            ))
        ));
    }

    #[rstest]
    fn should_reject_star_rating_off_half_step(reference_data: &ReferenceData) {
        assert!(matches!(
            hourly_purchased_energy(
                reference_data,
                FLOOR_AREA,
                SYDNEY,
                HotWaterType::GasStorage,
                with_star_rating(4.3)
            ),
            Err(WohError::InputValidation(InputValidationError::StarRatingNotHalfStep(_)))
        ));
    }

    #[rstest]
    fn should_reject_continuous_large_electric_storage(reference_data: &ReferenceData) {
        assert!(matches!(
            hourly_purchased_energy(
                reference_data,
                FLOOR_AREA,
                SYDNEY,
                HotWaterType::ElectricStorageLarge,
                HotWaterOptions::default()
            ),
            Err(WohError::InputValidation(
                InputValidationError::UnsupportedSchedule {
                    hot_water_type: HotWaterType::ElectricStorageLarge,
                    schedule: EnergisationSchedule::Continuous,
                }
            ))
        ));
    }

    #[rstest]
    fn should_reject_auxiliary_series_for_other_types(reference_data: &ReferenceData) {
        assert!(matches!(
            hourly_purchased_energy(
                reference_data,
                FLOOR_AREA,
                SYDNEY,
                HotWaterType::SolarElectric,
                HotWaterOptions {
                    include_auxiliary: true,
                    ..with_certificates(27)
                }
            ),
            Err(WohError::InputValidation(
                InputValidationError::AuxiliaryLoadNotModelled(HotWaterType::SolarElectric)
            ))
        ));
    }

    #[rstest]
    fn should_report_incomplete_coefficients(reference_data: &ReferenceData) {
        assert!(matches!(
            hourly_purchased_energy(
                reference_data,
                FLOOR_AREA,
                SYDNEY,
                HotWaterType::GasInstantaneous,
                with_star_rating(7.)
            ),
            Err(WohError::DataIntegrity(
                DataIntegrityError::MissingCoefficients(type_code)
            )) if type_code == "GIN-3-70"
        ));
    }

    #[rstest]
    fn should_report_configuration_without_data(reference_data: &ReferenceData) {
        // Darwin is climate zone 1, which the fixture tables do not cover
        assert!(matches!(
            hourly_purchased_energy(
                reference_data,
                FLOOR_AREA,
                800,
                HotWaterType::ElectricStorageSmall,
                HotWaterOptions::default()
            ),
            Err(WohError::DataIntegrity(
                DataIntegrityError::NoDataAvailable(type_code)
            )) if type_code == "ESS-1-00"
        ));
    }

    #[rstest]
    fn should_reject_invalid_floor_area(reference_data: &ReferenceData) {
        assert!(matches!(
            hourly_purchased_energy(
                reference_data,
                -1.,
                SYDNEY,
                HotWaterType::ElectricInstantaneous,
                HotWaterOptions::default()
            ),
            Err(WohError::InputValidation(InputValidationError::InvalidFloorArea(_)))
        ));
    }
}
