use crate::core::units::HOURS_PER_DAY;
use anyhow::bail;
use serde::Deserialize;
use std::io::Read;
use strum::{Display, EnumIter};

/// Fixed 24-hour hot water profiles that do not depend on annual demand.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
pub enum HotWaterProfile {
    #[strum(to_string = "time of use profile")]
    TimeOfUse,
    #[strum(to_string = "daytime energisation profile")]
    DaytimeEnergisation,
    #[strum(to_string = "overnight energisation profile")]
    OvernightEnergisation,
    #[strum(to_string = "solar gas auxiliary profile")]
    SolarGasAuxiliary,
}

#[derive(Clone, Debug, Deserialize)]
struct HourlyProfileRow {
    #[serde(rename = "Nominal hour number")]
    nominal_hour: usize,
    #[serde(rename = "Time of Hot Water use by hour (share)")]
    time_of_use: f64,
    #[serde(rename = "Daytime energisation by hour (share)")]
    daytime_energisation: f64,
    #[serde(rename = "Overnight energisation by hour (share)")]
    overnight_energisation: f64,
    #[serde(rename = "Share auxiliary electricity energy for solar thermal gas systems")]
    solar_gas_auxiliary: f64,
}

#[derive(Clone, Debug)]
pub(crate) struct HotWaterProfiles {
    time_of_use: [f64; HOURS_PER_DAY],
    daytime_energisation: [f64; HOURS_PER_DAY],
    overnight_energisation: [f64; HOURS_PER_DAY],
    solar_gas_auxiliary: [f64; HOURS_PER_DAY],
}

impl HotWaterProfiles {
    pub(crate) fn new(csv: impl Read) -> anyhow::Result<Self> {
        let rows: Vec<HourlyProfileRow> = csv::Reader::from_reader(csv)
            .deserialize::<HourlyProfileRow>()
            .collect::<Result<_, _>>()?;

        if rows.len() != HOURS_PER_DAY {
            bail!(
                "Expected {HOURS_PER_DAY} hourly hot water profile rows, found {}",
                rows.len()
            );
        }

        let mut profiles = Self {
            time_of_use: [0.; HOURS_PER_DAY],
            daytime_energisation: [0.; HOURS_PER_DAY],
            overnight_energisation: [0.; HOURS_PER_DAY],
            solar_gas_auxiliary: [0.; HOURS_PER_DAY],
        };

        for (hour, row) in rows.into_iter().enumerate() {
            // nominal hours run from 1 (the hour after midnight) to 24
            if row.nominal_hour != hour + 1 {
                bail!(
                    "Hot water profiles out of order: expected nominal hour {}, found {}",
                    hour + 1,
                    row.nominal_hour
                );
            }
            profiles.time_of_use[hour] = row.time_of_use;
            profiles.daytime_energisation[hour] = row.daytime_energisation;
            profiles.overnight_energisation[hour] = row.overnight_energisation;
            profiles.solar_gas_auxiliary[hour] = row.solar_gas_auxiliary;
        }

        Ok(profiles)
    }

    pub(crate) fn shares(&self, profile: HotWaterProfile) -> [f64; HOURS_PER_DAY] {
        match profile {
            HotWaterProfile::TimeOfUse => self.time_of_use,
            HotWaterProfile::DaytimeEnergisation => self.daytime_energisation,
            HotWaterProfile::OvernightEnergisation => self.overnight_energisation,
            HotWaterProfile::SolarGasAuxiliary => self.solar_gas_auxiliary,
        }
    }
}
