use crate::core::units::HOURS_PER_DAY;
use crate::reference_year::{tile_daily_profiles, Month};
use anyhow::bail;
use serde::Deserialize;
use std::io::Read;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct HourOfDayRow {
    hour: usize,
    jan: f64,
    feb: f64,
    mar: f64,
    apr: f64,
    may: f64,
    jun: f64,
    jul: f64,
    aug: f64,
    sep: f64,
    oct: f64,
    nov: f64,
    dec: f64,
}

impl HourOfDayRow {
    fn by_month(&self) -> [f64; 12] {
        [
            self.jan, self.feb, self.mar, self.apr, self.may, self.jun, self.jul, self.aug,
            self.sep, self.oct, self.nov, self.dec,
        ]
    }
}

/// Percentage of a year's energy used in each hour of a typical day of each month, as the
/// standard publishes it for appliance end uses.
#[derive(Clone, Debug)]
pub(crate) struct HourlySharesByMonth {
    by_month: [[f64; HOURS_PER_DAY]; 12],
}

impl HourlySharesByMonth {
    pub(crate) fn new(csv: impl Read) -> anyhow::Result<Self> {
        let rows: Vec<HourOfDayRow> = csv::Reader::from_reader(csv)
            .deserialize::<HourOfDayRow>()
            .collect::<Result<_, _>>()?;

        if rows.len() != HOURS_PER_DAY {
            bail!(
                "Expected {HOURS_PER_DAY} rows of hourly shares, found {}",
                rows.len()
            );
        }

        let mut by_month = [[0.; HOURS_PER_DAY]; 12];
        for (hour, row) in rows.iter().enumerate() {
            if row.hour != hour + 1 {
                bail!(
                    "Hourly shares are out of order: expected hour {}, found {}",
                    hour + 1,
                    row.hour
                );
            }
            for (month, share) in row.by_month().into_iter().enumerate() {
                by_month[month][hour] = share;
            }
        }

        Ok(Self { by_month })
    }

    pub(crate) fn for_month(&self, month: Month) -> [f64; HOURS_PER_DAY] {
        self.by_month[month.index()]
    }

    /// Percentage of the annual total falling in each hour of the reference year.
    pub(crate) fn annual_shares(&self) -> Vec<f64> {
        tile_daily_profiles(|month| self.for_month(month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference_year::HOURS_IN_REFERENCE_YEAR;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    const PLUG_LOAD_SHARES: &str =
        include_str!("../../tests/fixtures/reference_data/plug_load_hourly_share_rev10.1.csv");

    #[test]
    fn should_tile_shares_over_the_reference_year() {
        let shares = HourlySharesByMonth::new(Cursor::new(PLUG_LOAD_SHARES)).unwrap();
        let annual = shares.annual_shares();

        assert_eq!(annual.len(), HOURS_IN_REFERENCE_YEAR);
        assert_eq!(annual[0], shares.for_month(Month::Jan)[0]);
        assert_eq!(annual[744 + 5], shares.for_month(Month::Feb)[5]);
        assert_eq!(annual[8759], shares.for_month(Month::Dec)[23]);
        assert_relative_eq!(annual.iter().sum::<f64>(), 100., max_relative = 1e-9);
    }

    #[test]
    fn should_fail_to_load_a_short_table() {
        let truncated = PLUG_LOAD_SHARES
            .lines()
            .take(20)
            .collect::<Vec<_>>()
            .join("\n");
        assert!(HourlySharesByMonth::new(Cursor::new(truncated)).is_err());
    }
}
