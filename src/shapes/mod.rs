//! geomatrix::shapes - round shapes described by a single radius
//!
//! Public submodules:
//! - circle (Circle<T>)
//! - sphere (Sphere<T>)

pub mod circle;
pub mod sphere;

use crate::error::{GeometryError, Result};
use crate::numerics::types::traits::FloatingPoint;

/// Reject negative and NaN radii.
pub(crate) fn validate_radius<T: FloatingPoint>(radius: T) -> Result<T> {
    if radius.is_nan() || radius < T::zero() {
        return Err(GeometryError::invalid("Radius cannot be negative."));
    }
    Ok(radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_radius() {
        assert_eq!(validate_radius(0.0_f64), Ok(0.0));
        assert_eq!(validate_radius(2.5_f32), Ok(2.5));
        assert!(validate_radius(-0.001_f64).is_err());
        assert!(validate_radius(f32::NAN).is_err());
    }
}
