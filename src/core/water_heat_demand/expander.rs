use crate::compare_floats::Tolerance;
use crate::core::demand_series::DemandSeries;
use crate::core::units::HOURS_PER_DAY;
use crate::errors::ConsistencyCheckFailure;
use crate::reference_year::tile_daily_profiles;

/// Allowed gap between a series total and the annual energy it was expanded from.
pub(crate) const SERIES_TOLERANCE: Tolerance = Tolerance::Relative(0.007);

/// Allowed gap for the gas and auxiliary electricity of a solar gas system taken together.
pub(crate) const SPLIT_FUEL_TOLERANCE: Tolerance = Tolerance::Relative(0.005);

/// Spread annual purchased energy over the hours of the reference year: each month gets its
/// share, divided evenly between its days, and each day is split by the hourly shares.
pub(crate) fn expand_to_hourly(
    annual_purchased_energy: f64,
    monthly_shares: &[f64; 12],
    hourly_shares: &[f64; HOURS_PER_DAY],
) -> Result<DemandSeries, ConsistencyCheckFailure> {
    DemandSeries::new(tile_daily_profiles(|month| {
        let daily_energy =
            annual_purchased_energy * monthly_shares[month.index()] / month.days() as f64;
        hourly_shares.map(|share| share * daily_energy)
    }))
}

pub(crate) fn check_energy_conserved(
    total: f64,
    expected: f64,
    tolerance: Tolerance,
) -> Result<(), ConsistencyCheckFailure> {
    if tolerance.admits(total, expected) {
        Ok(())
    } else {
        Err(ConsistencyCheckFailure::SeriesTotalMismatch { total, expected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference_year::Month;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    const FLAT_HOURS: [f64; HOURS_PER_DAY] = [1. / 24.; HOURS_PER_DAY];

    #[test]
    fn should_divide_monthly_energy_between_days() {
        let mut monthly_shares = [0.; 12];
        monthly_shares[Month::Feb.index()] = 1.;

        let series = expand_to_hourly(2800., &monthly_shares, &FLAT_HOURS).unwrap();

        assert_eq!(series.month(Month::Jan).iter().sum::<f64>(), 0.);
        assert_relative_eq!(series[744], 100. / 24., max_relative = 1e-12);
        assert_relative_eq!(
            series.month(Month::Feb).iter().sum::<f64>(),
            2800.,
            max_relative = 1e-12
        );
        assert_relative_eq!(series.total(), 2800., max_relative = 1e-12);
    }

    #[test]
    fn should_repeat_hourly_shape_each_day() {
        let mut hourly_shares = [0.; HOURS_PER_DAY];
        hourly_shares[0] = 0.25;
        hourly_shares[12] = 0.75;

        let series = expand_to_hourly(3650., &[1. / 12.; 12], &hourly_shares).unwrap();
        let jan_daily = 3650. / 12. / 31.;

        assert_relative_eq!(series[0], 0.25 * jan_daily, max_relative = 1e-12);
        assert_relative_eq!(series[12], 0.75 * jan_daily, max_relative = 1e-12);
        assert_relative_eq!(series[24 + 12], 0.75 * jan_daily, max_relative = 1e-12);
        assert_eq!(series[1], 0.);
    }

    #[test]
    fn should_reject_negative_monthly_share() {
        let mut monthly_shares = [1. / 11.; 12];
        monthly_shares[3] = -0.01;

        assert!(matches!(
            expand_to_hourly(1000., &monthly_shares, &FLAT_HOURS),
            Err(ConsistencyCheckFailure::NegativeEnergy { hour, .. }) if hour == 2160
        ));
    }

    #[test]
    fn should_check_energy_is_conserved() {
        assert_eq!(
            check_energy_conserved(3352.259, 3351.996, SERIES_TOLERANCE),
            Ok(())
        );
        assert_eq!(
            check_energy_conserved(3400., 3351.996, SERIES_TOLERANCE),
            Err(ConsistencyCheckFailure::SeriesTotalMismatch {
                total: 3400.,
                expected: 3351.996
            })
        );
        assert!(check_energy_conserved(3370., 3351.996, SPLIT_FUEL_TOLERANCE).is_err());
    }
}
