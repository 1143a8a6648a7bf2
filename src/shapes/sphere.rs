//! Sphere primitive, the three dimensional sibling of `Circle`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::validate_radius;
use crate::error::Result;
use crate::numerics::types::traits::FloatingPoint;

/// A sphere with a non-negative radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere<T: FloatingPoint = f64> {
    radius: T,
}

impl<T: FloatingPoint> Sphere<T> {
    pub fn new(radius: T) -> Result<Self> {
        let radius = validate_radius(radius)?;
        debug!(radius = radius.to_f64(), "created sphere");
        Ok(Self { radius })
    }

    pub fn radius(&self) -> T {
        self.radius
    }

    /// Replace the radius. On error the previous radius is kept.
    pub fn set_radius(&mut self, radius: T) -> Result<()> {
        self.radius = validate_radius(radius)?;
        Ok(())
    }

    /// Computes surface area: 4 * π * r^2
    pub fn surface_area(&self) -> T {
        T::from_f64(4.0) * T::pi() * self.radius * self.radius
    }

    /// Computes volume: 4/3 * π * r^3
    pub fn volume(&self) -> T {
        T::from_f64(4.0 / 3.0) * T::pi() * self.radius * self.radius * self.radius
    }
}

impl<T> Serialize for Sphere<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.radius.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Sphere<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let radius = T::deserialize(deserializer)?;
        Sphere::new(radius).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_sphere_measurements() {
        let s = Sphere::new(3.0).unwrap();
        assert!((s.surface_area() - 36.0 * PI).abs() < 1e-9);
        assert!((s.volume() - 36.0 * PI).abs() < 1e-9);

        let unit = Sphere::new(1.0).unwrap();
        assert!((unit.surface_area() - 4.0 * PI).abs() < 1e-12);
        assert!((unit.volume() - 4.0 / 3.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_negative_radius_rejected() {
        assert!(Sphere::new(-0.5_f64).is_err());
        assert!(Sphere::<f32>::new(-7.0).is_err());
    }

    #[test]
    fn test_set_radius_keeps_old_value_on_error() {
        let mut s = Sphere::new(2.0).unwrap();
        assert!(s.set_radius(f64::NAN).is_err());
        assert_eq!(s.radius(), 2.0);

        s.set_radius(0.0).unwrap();
        assert_eq!(s.volume(), 0.0);
    }

    #[test]
    fn test_serde_validates_radius() {
        let s: Sphere<f32> = serde_json::from_str("2.0").unwrap();
        assert_eq!(s.radius(), 2.0);
        assert!(serde_json::from_str::<Sphere<f32>>("-2.0").is_err());
    }
}
