use crate::core::units::{DAYS_IN_MONTH, HOURS_PER_DAY};
use strum::{Display, EnumIter, IntoEnumIterator};

/// All hourly series cover a single non-leap reference year.
pub const HOURS_IN_REFERENCE_YEAR: usize = 8760;

// Hours that start each month (and end the previous one). There are 13 values so that the end
// of the final month is handled correctly, e.g. Jan is hours 0-743.
const MONTH_START_END_HOURS: [usize; 13] = [
    0, 744, 1416, 2160, 2880, 3624, 4344, 5088, 5832, 6552, 7296, 8016, 8760,
];

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, PartialEq)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn days(&self) -> usize {
        DAYS_IN_MONTH[self.index()]
    }

    /// First hour of the month and first hour of the following month.
    pub fn start_end_hours(&self) -> (usize, usize) {
        (
            MONTH_START_END_HOURS[self.index()],
            MONTH_START_END_HOURS[self.index() + 1],
        )
    }
}

/// Repeat each month's 24-hour profile for every day of that month, in chronological order,
/// giving one value per hour of the reference year.
pub(crate) fn tile_daily_profiles<F>(mut daily_profile: F) -> Vec<f64>
where
    F: FnMut(Month) -> [f64; HOURS_PER_DAY],
{
    Month::iter()
        .flat_map(|month| itertools::repeat_n(daily_profile(month), month.days()).flatten())
        .collect()
}
