use crate::core::demand_series::DemandSeries;
use crate::core::occupancy::calculate_occupants;
use crate::core::reference_data::ReferenceData;
use crate::core::water_heat_demand::annual_demand::{annual_demand, winter_peak_demand};
use crate::core::water_heat_demand::climate_zone::climate_zone;
use crate::core::water_heat_demand::expander::{
    check_energy_conserved, expand_to_hourly, SERIES_TOLERANCE, SPLIT_FUEL_TOLERANCE,
};
use crate::core::water_heat_demand::heater::{EnergisationSchedule, HeaterVariant, HotWaterType};
use crate::core::water_heat_demand::hourly_share::hourly_shares;
use crate::core::water_heat_demand::monthly_share::monthly_shares;
use crate::core::water_heat_demand::purchased_energy::annual_purchased_energy;
use crate::core::water_heat_demand::type_code::{type_code, SystemFamily, TypeCode};
use crate::errors::{InputValidationError, WohError};
use tracing::debug;

/// Details of a hot water system beyond its type. Which of these apply depends on the type.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HotWaterOptions {
    /// Gas star rating in half stars, for gas storage and gas instantaneous systems.
    pub star_rating: Option<f64>,
    /// Number of small-scale technology certificates, for solar and heat pump systems.
    pub certificate_count: Option<u32>,
    pub energisation_schedule: Option<EnergisationSchedule>,
    /// Whether to return the auxiliary electricity of a solar gas system as a separate series.
    pub include_auxiliary: bool,
}

/// Hourly purchased energy for a hot water system, in MJ.
#[derive(Clone, Debug, PartialEq)]
pub struct HotWaterDemand {
    pub type_code: TypeCode,
    /// Annual hot water heat demand, in GJ.
    pub annual_demand: f64,
    /// Annual purchased energy the series are expanded from, in MJ.
    pub annual_purchased_energy: f64,
    /// Energy of the system's main fuel. For solar gas this is the gas alone.
    pub series: DemandSeries,
    /// Auxiliary electricity of a solar gas system, when requested.
    pub auxiliary_series: Option<DemandSeries>,
}

/// Hourly purchased energy for the hot water system of a dwelling.
///
/// Arguments:
/// * `dwelling_area` - floor area of all zones excluding garage, in m2
/// * `postcode` - Australian postcode of the dwelling
/// * `hot_water_type` - technology of the hot water system
/// * `options` - details the technology needs, see [`HotWaterOptions`]
pub fn hourly_purchased_energy(
    reference_data: &ReferenceData,
    dwelling_area: f64,
    postcode: u32,
    hot_water_type: HotWaterType,
    options: HotWaterOptions,
) -> Result<HotWaterDemand, WohError> {
    if options.include_auxiliary && hot_water_type != HotWaterType::SolarGas {
        return Err(InputValidationError::AuxiliaryLoadNotModelled(hot_water_type).into());
    }

    let occupants = calculate_occupants(dwelling_area)?;
    let zone = climate_zone(reference_data, postcode, hot_water_type)?;
    let annual_demand = annual_demand(winter_peak_demand(occupants, zone)?);
    let type_code = type_code(
        hot_water_type,
        zone,
        options.star_rating,
        options.certificate_count,
    )?;
    let annual_purchased_energy =
        annual_purchased_energy(reference_data, annual_demand, &type_code)?;

    debug!(
        "{type_code}: {occupants} occupants, annual demand {annual_demand:.4} GJ, \
         annual purchased energy {annual_purchased_energy:.2} MJ"
    );

    let series = expand_to_hourly(
        annual_purchased_energy,
        &monthly_shares(reference_data, &type_code.family(), annual_demand)?,
        &hourly_shares(
            reference_data,
            hot_water_type.into(),
            annual_demand,
            options.energisation_schedule,
        )?,
    )?;

    let auxiliary_series = match hot_water_type {
        HotWaterType::SolarGas => {
            let auxiliary_series = expand_to_hourly(
                annual_purchased_energy,
                &monthly_shares(
                    reference_data,
                    &SystemFamily::solar_gas_auxiliary(zone),
                    annual_demand,
                )?,
                &hourly_shares(
                    reference_data,
                    HeaterVariant::SolarGasAuxiliary,
                    annual_demand,
                    None,
                )?,
            )?;
            debug!(
                "{type_code}: {:.2} MJ gas and {:.2} MJ auxiliary electricity",
                series.total(),
                auxiliary_series.total()
            );
            check_energy_conserved(
                series.total() + auxiliary_series.total(),
                annual_purchased_energy,
                SPLIT_FUEL_TOLERANCE,
            )?;
            options.include_auxiliary.then_some(auxiliary_series)
        }
        _ => {
            check_energy_conserved(series.total(), annual_purchased_energy, SERIES_TOLERANCE)?;
            None
        }
    };

    Ok(HotWaterDemand {
        type_code,
        annual_demand,
        annual_purchased_energy,
        series,
        auxiliary_series,
    })
}
