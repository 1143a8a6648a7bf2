// src/numerics/types/traits.rs
// FloatingPoint trait used by the shape types.

/// FloatingPoint is a minimal trait for the floating point types the shapes
/// are generic over.
///
/// Note: We require Copy, PartialOrd and the basic arithmetic ops on Self.
pub trait FloatingPoint:
Copy + PartialOrd + core::fmt::Debug
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn pi() -> Self;

    /// Lossy conversion used for small constants such as 4/3.
    fn from_f64(value: f64) -> Self;

    /// Widening conversion, handy for logging and formatting.
    fn to_f64(self) -> f64;

    fn is_nan(self) -> bool;
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn pi() -> Self { core::f32::consts::PI }
    fn from_f64(value: f64) -> Self { value as f32 }
    fn to_f64(self) -> f64 { self as f64 }
    fn is_nan(self) -> bool { f32::is_nan(self) }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn pi() -> Self { core::f64::consts::PI }
    fn from_f64(value: f64) -> Self { value }
    fn to_f64(self) -> f64 { self }
    fn is_nan(self) -> bool { f64::is_nan(self) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half_turn<T: FloatingPoint>() -> T {
        T::pi() * T::one()
    }

    #[test]
    fn test_constants_per_precision() {
        assert_eq!(half_turn::<f64>(), std::f64::consts::PI);
        assert_eq!(half_turn::<f32>(), std::f32::consts::PI);
        assert_eq!(<f32 as FloatingPoint>::zero(), 0.0);
    }

    #[test]
    fn test_nan_detection() {
        assert!(FloatingPoint::is_nan(f64::NAN));
        assert!(!FloatingPoint::is_nan(1.5_f32));
        assert_eq!(<f32 as FloatingPoint>::from_f64(0.5).to_f64(), 0.5);
    }
}
