//! Free-function vector operations used by the intersection formulas.
//!
//! These are thin wrappers over `DVec3` so the formulas read the same way
//! they are written on paper.

use crate::Vector3;

/// Component-wise `a - b`.
#[inline]
pub fn subtract(a: Vector3, b: Vector3) -> Vector3 {
    a - b
}

/// Component-wise `a * s`.
#[inline]
pub fn scale(a: Vector3, s: f64) -> Vector3 {
    a * s
}

/// Standard 3D dot product.
#[inline]
pub fn dot(a: Vector3, b: Vector3) -> f64 {
    a.dot(b)
}

/// Normalize the triple `(x, y, z)`.
///
/// A zero-length input divides by zero and yields non-finite components.
/// It never panics.
#[inline]
pub fn unit(x: f64, y: f64, z: f64) -> Vector3 {
    let length = (x * x + y * y + z * z).sqrt();
    Vector3::new(x / length, y / length, z / length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtract() {
        let a = Vector3::new(5.0, 7.0, 9.0);
        let b = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(subtract(a, b), Vector3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_scale() {
        let a = Vector3::new(1.0, -2.0, 3.0);
        assert_eq!(scale(a, 2.0), Vector3::new(2.0, -4.0, 6.0));
        assert_eq!(scale(a, 0.0), Vector3::ZERO);
    }

    #[test]
    fn test_dot() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(dot(a, b), 32.0);
        assert_eq!(dot(Vector3::X, Vector3::Y), 0.0);
    }

    #[test]
    fn test_unit() {
        let u = unit(3.0, 0.0, 4.0);
        assert!((u - Vector3::new(0.6, 0.0, 0.8)).length() < 1e-12);
        assert!((u.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_zero_length() {
        // Degenerate input: no panic, components are NaN
        let u = unit(0.0, 0.0, 0.0);
        assert!(u.x.is_nan());
        assert!(u.y.is_nan());
        assert!(u.z.is_nan());
    }
}
