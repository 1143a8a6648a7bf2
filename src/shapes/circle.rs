//! Circle primitive.
//!
//! Generic over the project's `FloatingPoint` trait, defaulting to `f64`.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::validate_radius;
use crate::error::Result;
use crate::numerics::types::traits::FloatingPoint;

/// A circle with a non-negative radius.
///
/// The radius is only reachable through [`Circle::new`] and
/// [`Circle::set_radius`], both of which reject negative and NaN values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle<T: FloatingPoint = f64> {
    radius: T,
}

impl<T: FloatingPoint> Circle<T> {
    /// Construct a new circle. Fails with `InvalidArgument` when `radius < 0`.
    pub fn new(radius: T) -> Result<Self> {
        let radius = validate_radius(radius)?;
        debug!(radius = radius.to_f64(), "created circle");
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

    /// Computes circumference: 2 * π * r
    pub fn circumference(&self) -> T {
        T::from_f64(2.0) * T::pi() * self.radius
    }

    /// Computes area: π * r^2
    pub fn area(&self) -> T {
        T::pi() * self.radius * self.radius
    }
}

impl<T: FloatingPoint> fmt::Display for Circle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(r={:.2})", self.radius.to_f64())
    }
}

impl<T> Serialize for Circle<T>
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

impl<'de, T> Deserialize<'de> for Circle<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let radius = T::deserialize(deserializer)?;
        Circle::new(radius).map_err(serde::de::Error::custom)
    }
}
