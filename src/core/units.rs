pub const HOURS_PER_DAY: usize = 24;
pub const DAYS_PER_YEAR: u32 = 365;
pub const DAYS_IN_MONTH: [usize; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
pub const MEGAJOULES_PER_GIGAJOULE: f64 = 1_000.;
pub const KILOJOULES_PER_MEGAJOULE: f64 = 1_000.;
pub const KILOJOULES_PER_WATT_HOUR: f64 = 3.6;

pub(crate) fn megajoules_to_gigajoules(energy_in_mj: f64) -> f64 {
    energy_in_mj / MEGAJOULES_PER_GIGAJOULE
}
