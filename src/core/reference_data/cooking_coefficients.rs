use crate::errors::DataIntegrityError;
use anyhow::{anyhow, bail};
use indexmap::IndexMap;
use std::io::Read;

const VARIABLE_COLUMN: &str = "variable";
const FACTOR_ROW: &str = "factor";
const CONSTANT_ROW: &str = "constant";

/// Annual energy of an appliance as `constant + factor·occupants`, in MJ.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LinearLoad {
    pub factor: f64,
    pub constant: f64,
}

impl LinearLoad {
    pub fn evaluate(&self, occupants: f64) -> f64 {
        self.constant + occupants * self.factor
    }
}

/// Cooking coefficients, one column per appliance and one row per coefficient.
#[derive(Clone, Debug)]
pub(crate) struct CookingCoefficients {
    by_appliance: IndexMap<String, LinearLoad>,
}

impl CookingCoefficients {
    pub(crate) fn new(csv: impl Read) -> anyhow::Result<Self> {
        let mut reader = csv::Reader::from_reader(csv);
        let headers = reader.headers()?.clone();
        let variable_index = headers
            .iter()
            .position(|header| header.trim() == VARIABLE_COLUMN)
            .ok_or_else(|| anyhow!("Cooking coefficients have no '{VARIABLE_COLUMN}' column"))?;

        let mut by_appliance: IndexMap<String, LinearLoad> = headers
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != variable_index)
            .map(|(_, appliance)| (appliance.trim().to_owned(), LinearLoad::default()))
            .collect();
        let mut factors_seen = false;
        let mut constants_seen = false;

        for record in reader.records() {
            let record = record?;
            let variable = record
                .get(variable_index)
                .map(str::trim)
                .ok_or_else(|| anyhow!("Cooking coefficient row has no variable name"))?;
            let is_factor = match variable {
                FACTOR_ROW => true,
                CONSTANT_ROW => false,
                other => bail!("Unexpected cooking coefficient row '{other}'"),
            };

            for (appliance, cell) in headers
                .iter()
                .zip(record.iter())
                .enumerate()
                .filter(|(index, _)| *index != variable_index)
                .map(|(_, column)| column)
            {
                let value: f64 = cell.trim().parse().map_err(|_| {
                    anyhow!("Invalid cooking coefficient '{cell}' for {appliance}")
                })?;
                let load = by_appliance
                    .get_mut(appliance.trim())
                    .ok_or_else(|| anyhow!("Unexpected cooking appliance {appliance}"))?;
                if is_factor {
                    load.factor = value;
                } else {
                    load.constant = value;
                }
            }

            if is_factor {
                factors_seen = true;
            } else {
                constants_seen = true;
            }
        }

        if !(factors_seen && constants_seen) {
            bail!("Cooking coefficients need both a '{FACTOR_ROW}' and a '{CONSTANT_ROW}' row");
        }

        Ok(Self { by_appliance })
    }

    pub(crate) fn for_appliance(&self, appliance: &str) -> Result<LinearLoad, DataIntegrityError> {
        self.by_appliance.get(appliance).copied().ok_or_else(|| {
            DataIntegrityError::NoDataAvailable(format!("cooking appliance {appliance}"))
        })
    }
}
