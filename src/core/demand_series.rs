use crate::errors::ConsistencyCheckFailure;
use crate::reference_year::{Month, HOURS_IN_REFERENCE_YEAR};
use std::ops::Index;

/// Energy in MJ for each hour of the reference year, starting at midnight on 1 January.
///
/// Construction guarantees exactly one finite, non-negative value per hour.
#[derive(Clone, Debug, PartialEq)]
pub struct DemandSeries(Vec<f64>);

impl DemandSeries {
    pub(crate) fn new(values: Vec<f64>) -> Result<Self, ConsistencyCheckFailure> {
        if values.len() != HOURS_IN_REFERENCE_YEAR {
            return Err(ConsistencyCheckFailure::SeriesLength(values.len()));
        }
        if let Some((hour, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, value)| !(value.is_finite() && **value >= 0.))
        {
            return Err(ConsistencyCheckFailure::NegativeEnergy { hour, value });
        }

        Ok(Self(values))
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn month(&self, month: Month) -> &[f64] {
        let (start, end) = month.start_end_hours();
        &self.0[start..end]
    }
}

impl Index<usize> for DemandSeries {
    type Output = f64;

    fn index(&self, hour: usize) -> &Self::Output {
        &self.0[hour]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn should_reject_wrong_length() {
        assert_eq!(
            DemandSeries::new(vec![1.; 8784]),
            Err(ConsistencyCheckFailure::SeriesLength(8784))
        );
    }

    #[test]
    fn should_reject_negative_energy() {
        let mut values = vec![1.; HOURS_IN_REFERENCE_YEAR];
        values[100] = -0.5;

        assert_eq!(
            DemandSeries::new(values),
            Err(ConsistencyCheckFailure::NegativeEnergy {
                hour: 100,
                value: -0.5
            })
        );
    }

    #[test]
    fn should_slice_by_month() {
        let values = (0..HOURS_IN_REFERENCE_YEAR).map(|hour| hour as f64);
        let series = DemandSeries::new(values.collect()).unwrap();

        assert_eq!(series.month(Month::Jan).len(), 744);
        assert_eq!(series.month(Month::Feb)[0], 744.);
        assert_eq!(series.month(Month::Dec).last(), Some(&8759.));
        assert_eq!(series[10], 10.);
        assert_eq!(
            series.total(),
            (0..HOURS_IN_REFERENCE_YEAR).sum::<usize>() as f64
        );
    }
}
