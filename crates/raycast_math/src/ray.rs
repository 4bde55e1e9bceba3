use crate::{vector, Vector3};

/// A ray in 3D space with origin and direction.
///
/// Camera rays start at the eye point and travel along a unit `direction`
/// toward a pixel center on the image plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray whose direction is the normalized triple `(x, y, z)`.
    pub fn from_unit(origin: Vector3, x: f64, y: f64, z: f64) -> Self {
        Self::new(origin, vector::unit(x, y, z))
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vector3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vector3 {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vector3::new(1.0, 2.0, 3.0);
        let direction = Vector3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, direction);
    }

    #[test]
    fn test_ray_from_unit() {
        let ray = Ray::from_unit(Vector3::ZERO, 0.0, 0.0, -5.0);
        assert_eq!(ray.direction(), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(ray.origin(), Vector3::ZERO);
    }
}
