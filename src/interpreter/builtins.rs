//! Built-in function implementations
//!
//! - `sqrt(x)`: square root, `NaN` for negative input
//! - `sin(x)`, `cos(x)`, `tan(x)`: trigonometry on an angle in degrees
//!
//! Domain problems are not errors; they produce the IEEE result (`NaN`,
//! infinities) like the arithmetic operators do.

use crate::parser::ast::Function;

impl Function {
    /// Apply the function to an already evaluated argument
    #[inline]
    pub fn apply(self, argument: f64) -> f64 {
        match self {
            Function::Sqrt => argument.sqrt(),
            Function::Sin => argument.to_radians().sin(),
            Function::Cos => argument.to_radians().cos(),
            Function::Tan => argument.to_radians().tan(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_sqrt() {
        assert_eq!(Function::Sqrt.apply(4.0), 2.0);
        assert!(Function::Sqrt.apply(-1.0).is_nan());
    }

    #[test]
    fn test_trig_uses_degrees() {
        assert!((Function::Sin.apply(30.0) - 0.5).abs() < EPSILON);
        assert!((Function::Cos.apply(60.0) - 0.5).abs() < EPSILON);
        assert!((Function::Tan.apply(45.0) - 1.0).abs() < EPSILON);
        assert!((Function::Sin.apply(-90.0) + 1.0).abs() < EPSILON);
    }
}
