use crate::errors::DataIntegrityError;
use anyhow::bail;
use itertools::Itertools;
use serde::Deserialize;
use std::io::Read;

/// How zones are labelled in a postcode table. The heat pump table labels its zones like
/// "HP3-AU" while the general table uses bare zone numbers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ZoneLabelFormat {
    Numeric,
    HeatPump,
}

impl ZoneLabelFormat {
    fn parse(&self, label: &str) -> Result<u8, DataIntegrityError> {
        let label = label.trim();
        let zone = match self {
            ZoneLabelFormat::Numeric => Some(label),
            ZoneLabelFormat::HeatPump => label
                .strip_prefix("HP")
                .and_then(|label| label.strip_suffix("-AU")),
        };

        zone.and_then(|zone| zone.parse::<u8>().ok())
            .ok_or_else(|| DataIntegrityError::InvalidZoneLabel(label.to_owned()))
    }
}

#[derive(Clone, Debug, Deserialize)]
struct ClimateZoneRow {
    from_postcode: u32,
    to_postcode: u32,
    zone: String,
}

impl ClimateZoneRow {
    fn covers(&self, postcode: u32) -> bool {
        (self.from_postcode..=self.to_postcode).contains(&postcode)
    }
}

/// Ranges of postcodes (inclusive at both ends) and the climate zone each falls in.
#[derive(Clone, Debug)]
pub(crate) struct ClimateZoneTable {
    rows: Vec<ClimateZoneRow>,
    label_format: ZoneLabelFormat,
}

impl ClimateZoneTable {
    pub(crate) fn new(csv: impl Read, label_format: ZoneLabelFormat) -> anyhow::Result<Self> {
        let rows: Vec<ClimateZoneRow> = csv::Reader::from_reader(csv)
            .deserialize::<ClimateZoneRow>()
            .collect::<Result<_, _>>()?;

        if let Some(row) = rows.iter().find(|row| row.from_postcode > row.to_postcode) {
            bail!(
                "Climate zone row for postcodes {} to {} has an empty range",
                row.from_postcode,
                row.to_postcode
            );
        }

        Ok(Self { rows, label_format })
    }

    /// Zone number for the single row covering the postcode.
    pub(crate) fn zone_for_postcode(&self, postcode: u32) -> Result<u8, DataIntegrityError> {
        let matches = self
            .rows
            .iter()
            .filter(|row| row.covers(postcode))
            .collect_vec();

        match matches.as_slice() {
            [row] => self.label_format.parse(&row.zone),
            [] => Err(DataIntegrityError::NoClimateZone(postcode)),
            _ => Err(DataIntegrityError::AmbiguousClimateZone {
                postcode,
                matches: matches.len(),
            }),
        }
    }
}
