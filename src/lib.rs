pub mod error;
pub mod numerics;
pub mod shapes;
pub mod demo;
pub use error::{GeometryError, Result};
pub use numerics::random::RandomSource;
pub use numerics::types::matrix::Matrix;
pub use shapes::circle::Circle;
pub use shapes::sphere::Sphere;
