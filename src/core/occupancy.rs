use crate::errors::InputValidationError;

const MIN_OCCUPANTS: f64 = 1.;
const MAX_OCCUPANTS: f64 = 6.;

/// Calculate the number of occupants of a dwelling (Equation 2). The result is fractional,
/// clipped to between 1 and 6 and rounded to two decimal places, as the standard does.
///
/// Arguments:
/// * `dwelling_area` - floor area of all zones excluding garage, in m2
pub fn calculate_occupants(dwelling_area: f64) -> Result<f64, InputValidationError> {
    if !dwelling_area.is_finite() || dwelling_area <= 0. {
        return Err(InputValidationError::InvalidFloorArea(dwelling_area));
    }

    let occupants = (1.525 * dwelling_area.ln() - 4.533).clamp(MIN_OCCUPANTS, MAX_OCCUPANTS);

    Ok((occupants * 100.).round() / 100.)
}
