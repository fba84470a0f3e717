mod compare_floats;
pub mod core;
pub mod errors;
pub mod input;
pub mod output;
pub mod reference_year;

#[cfg(test)]
mod tests;

#[macro_use]
extern crate is_close;

pub use crate::core::demand_series::DemandSeries;
pub use crate::core::reference_data::ReferenceData;
pub use crate::errors::WohError;

use crate::core::end_use::{cooking, lighting, plug_loads};
use crate::core::occupancy::calculate_occupants;
use crate::core::water_heat_demand::hot_water::hourly_purchased_energy;
use crate::input::{ingest_for_processing, Input};
use crate::output::Output;
use crate::reference_year::HOURS_IN_REFERENCE_YEAR;
use csv::WriterBuilder;
use indexmap::IndexMap;
use std::io::Read;
use tracing::{debug, info};

pub const HOT_WATER: &str = "Hot water";
pub const HOT_WATER_AUXILIARY: &str = "Hot water auxiliary electricity";
pub const COOKTOP: &str = "Cooktop";
pub const OVEN: &str = "Oven";
pub const PLUG_LOADS: &str = "Plug loads";
pub const LIGHTING: &str = "Lighting";

const ENERGY_UNITS: &str = "[MJ]";

/// Hourly energy for each end use calculated for a dwelling, keyed by end use name in the order
/// they were calculated.
pub type RunResults = IndexMap<&'static str, DemandSeries>;

/// Calculate hourly energy for every end use described in a JSON dwelling input, write the
/// results to the output and return them.
pub fn run_project(
    input: impl Read,
    output: impl Output,
    reference_data: &ReferenceData,
) -> Result<RunResults, WohError> {
    let input = ingest_for_processing(input)?;
    let results = calculate_end_uses(&input, reference_data)?;

    if !output.is_noop() {
        write_results_file(&output, &results).map_err(WohError::ErrorWritingOutput)?;
        write_summary_file(&output, &results).map_err(WohError::ErrorWritingOutput)?;
    }

    Ok(results)
}

fn calculate_end_uses(
    input: &Input,
    reference_data: &ReferenceData,
) -> Result<RunResults, WohError> {
    let occupants = calculate_occupants(input.floor_area)?;
    debug!(
        "Dwelling of {} m2 in postcode {} has {occupants} occupants",
        input.floor_area, input.postcode
    );

    let mut results = RunResults::new();

    if let Some(hot_water) = &input.hot_water {
        let demand = hourly_purchased_energy(
            reference_data,
            input.floor_area,
            input.postcode,
            hot_water.hot_water_type,
            hot_water.options(),
        )?;
        info!(
            "Hot water system {} purchases {:.2} MJ a year",
            demand.type_code, demand.annual_purchased_energy
        );
        results.insert(HOT_WATER, demand.series);
        if let Some(auxiliary_series) = demand.auxiliary_series {
            results.insert(HOT_WATER_AUXILIARY, auxiliary_series);
        }
    }

    if let Some(cooking) = &input.cooking {
        let (cooktop, oven) =
            cooking::hourly_energy(reference_data, occupants, cooking.cooktop, cooking.oven)?;
        results.insert(COOKTOP, cooktop);
        results.insert(OVEN, oven);
    }

    if input.plug_loads {
        results.insert(
            PLUG_LOADS,
            plug_loads::hourly_energy(reference_data, occupants)?,
        );
    }

    if input.lighting {
        results.insert(
            LIGHTING,
            lighting::hourly_energy(reference_data, input.floor_area)?,
        );
    }

    Ok(results)
}

fn write_results_file(output: &impl Output, results: &RunResults) -> anyhow::Result<()> {
    let output_key = "results";
    debug!("writing out to {output_key}");
    let writer = output.writer_for_location_key(output_key)?;
    let mut writer = WriterBuilder::new().flexible(true).from_writer(writer);

    let mut headings = vec!["Timestep"];
    let mut units_row = vec!["[count]"];
    for name in results.keys() {
        headings.push(*name);
        units_row.push(ENERGY_UNITS);
    }
    writer.write_record(&headings)?;
    writer.write_record(&units_row)?;

    for t_idx in 0..HOURS_IN_REFERENCE_YEAR {
        let mut row = vec![t_idx.to_string()];
        row.extend(results.values().map(|series| series[t_idx].to_string()));
        writer.write_record(&row)?;
    }

    writer.flush()?;

    Ok(())
}

fn write_summary_file(output: &impl Output, results: &RunResults) -> anyhow::Result<()> {
    let output_key = "results_summary";
    debug!("writing out to {output_key}");
    let writer = output.writer_for_location_key(output_key)?;
    let mut writer = WriterBuilder::new().flexible(true).from_writer(writer);

    writer.write_record(["End use", "Annual total"])?;
    writer.write_record(["", ENERGY_UNITS])?;
    for (name, series) in results {
        writer.write_record([name.to_string(), series.total().to_string()])?;
    }

    writer.flush()?;

    Ok(())
}
