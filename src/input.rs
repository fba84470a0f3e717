use crate::core::end_use::cooking::{CooktopType, OvenType};
use crate::core::water_heat_demand::heater::{EnergisationSchedule, HotWaterType};
use crate::core::water_heat_demand::hot_water::HotWaterOptions;
use serde::Deserialize;
use std::io::{BufReader, Read};

pub fn ingest_for_processing(json: impl Read) -> Result<Input, anyhow::Error> {
    Ok(serde_json::from_reader(BufReader::new(json))?)
}

/// A dwelling and the end uses to calculate for it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Input {
    /// Floor area of all zones excluding garage, in m2.
    pub floor_area: f64,
    pub postcode: u32,
    pub hot_water: Option<HotWaterInput>,
    pub cooking: Option<CookingInput>,
    #[serde(default)]
    pub plug_loads: bool,
    #[serde(default)]
    pub lighting: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct HotWaterInput {
    #[serde(rename = "Type")]
    pub hot_water_type: HotWaterType,
    pub star_rating: Option<f64>,
    pub certificate_count: Option<u32>,
    pub energisation_schedule: Option<EnergisationSchedule>,
    #[serde(default)]
    pub include_auxiliary: bool,
}

impl HotWaterInput {
    pub fn options(&self) -> HotWaterOptions {
        HotWaterOptions {
            star_rating: self.star_rating,
            certificate_count: self.certificate_count,
            energisation_schedule: self.energisation_schedule,
            include_auxiliary: self.include_auxiliary,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CookingInput {
    pub cooktop: CooktopType,
    pub oven: OvenType,
}
