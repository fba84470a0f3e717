use crate::errors::DataIntegrityError;
use anyhow::bail;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;

/// Coefficients of a cubic `a·x³ + b·x² + c·x + d`, which is how the standard expresses annual
/// purchased energy and the monthly and hourly shares as functions of annual hot water demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl CubicCoefficients {
    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * x.powi(3) + self.b * x.powi(2) + self.c * x + self.d
    }
}

// The tables label their coefficient columns differently (a, a-month, ax and so on), and some
// rows have placeholder text in place of numbers, so cells are read as text first.
#[derive(Clone, Debug, Deserialize)]
struct CoefficientRow {
    #[serde(rename = "System ID")]
    system_id: String,
    #[serde(alias = "a-month", alias = "ax")]
    a: String,
    #[serde(alias = "b-month", alias = "bx")]
    b: String,
    #[serde(alias = "c-month", alias = "cx")]
    c: String,
    #[serde(alias = "d-month", alias = "dx")]
    d: String,
}

impl CoefficientRow {
    fn coefficients(&self) -> Option<CubicCoefficients> {
        let parse = |cell: &str| cell.trim().parse::<f64>().ok().filter(|x| x.is_finite());

        Some(CubicCoefficients {
            a: parse(&self.a)?,
            b: parse(&self.b)?,
            c: parse(&self.c)?,
            d: parse(&self.d)?,
        })
    }
}

#[derive(Clone, Debug)]
enum CoefficientEntry {
    Complete(CubicCoefficients),
    /// The standard lists the system but does not provide usable numbers for it.
    Incomplete,
}

/// A table of cubic coefficients keyed by system ID.
#[derive(Clone, Debug)]
pub(crate) struct CoefficientTable {
    entries: HashMap<String, CoefficientEntry>,
}

impl CoefficientTable {
    pub(crate) fn new(csv: impl Read) -> anyhow::Result<Self> {
        let mut entries = HashMap::new();

        for row in csv::Reader::from_reader(csv).deserialize::<CoefficientRow>() {
            let row = row?;
            let entry = match row.coefficients() {
                Some(coefficients) => CoefficientEntry::Complete(coefficients),
                None => CoefficientEntry::Incomplete,
            };
            let system_id = row.system_id.trim().to_owned();
            if entries.insert(system_id, entry).is_some() {
                bail!("System ID {} appears more than once", row.system_id);
            }
        }

        Ok(Self { entries })
    }

    pub(crate) fn coefficients(
        &self,
        system_id: &str,
    ) -> Result<CubicCoefficients, DataIntegrityError> {
        match self.entries.get(system_id) {
            Some(CoefficientEntry::Complete(coefficients)) => Ok(*coefficients),
            Some(CoefficientEntry::Incomplete) => {
                Err(DataIntegrityError::MissingCoefficients(system_id.to_owned()))
            }
            None => Err(DataIntegrityError::NoDataAvailable(system_id.to_owned())),
        }
    }
}
