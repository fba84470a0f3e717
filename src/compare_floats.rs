/// Bounds used when cross-checking results calculated from the reference tables, which only
/// carry a handful of significant figures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Tolerance {
    Absolute(f64),
    Relative(f64),
}

impl Tolerance {
    pub(crate) fn admits(&self, actual: f64, expected: f64) -> bool {
        match *self {
            Tolerance::Absolute(abs_tol) => is_close!(actual, expected, abs_tol = abs_tol),
            Tolerance::Relative(rel_tol) => is_close!(actual, expected, rel_tol = rel_tol),
        }
    }
}
