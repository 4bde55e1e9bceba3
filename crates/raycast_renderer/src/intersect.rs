//! Ray-primitive intersection.
//!
//! Every test returns the distance `t` along the ray to the hit, or `None`.
//! Only strictly positive distances count, which drops hits behind the eye.

use raycast_core::{Plane, SceneObject, Sphere};
use raycast_math::{dot, subtract, Ray, Vector3};

/// Trait for scene objects that rays can hit.
pub trait Intersect {
    /// Distance along `ray` to the nearest hit in front of its origin.
    fn intersect(&self, ray: &Ray) -> Option<f64>;
}

/// Solve `a·t² + b·t + c = 0` for a sphere.
///
/// Prefers the smaller root and falls back to the larger one when the
/// smaller lies behind the origin (the origin is inside the sphere).
pub fn sphere_intersection(ray: &Ray, center: Vector3, radius: f64) -> Option<f64> {
    let oc = subtract(ray.origin(), center);
    let a = dot(ray.direction(), ray.direction());
    let b = 2.0 * dot(ray.direction(), oc);
    let c = dot(oc, oc) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();
    let t0 = (-b - sqrtd) / (2.0 * a);
    if t0 > 0.0 {
        return Some(t0);
    }

    let t1 = (-b + sqrtd) / (2.0 * a);
    (t1 > 0.0).then_some(t1)
}

/// Intersect a ray with the plane through `position` with `normal`.
///
/// A ray exactly parallel to the plane never hits.
pub fn plane_intersection(ray: &Ray, position: Vector3, normal: Vector3) -> Option<f64> {
    let numerator = -(dot(normal, ray.origin()) - dot(position, normal));
    let denominator = dot(normal, ray.direction());
    if denominator == 0.0 {
        return None;
    }

    let t = numerator / denominator;
    (t > 0.0).then_some(t)
}

impl Intersect for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        sphere_intersection(ray, self.position?, self.radius?)
    }
}

impl Intersect for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        plane_intersection(ray, self.position?, self.normal?)
    }
}

impl Intersect for SceneObject {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        match self {
            SceneObject::Sphere(sphere) => sphere.intersect(ray),
            SceneObject::Plane(plane) => plane.intersect(ray),
            SceneObject::Light(_) => None,
        }
    }
}

/// Check whether an object has the geometry its intersection test needs.
pub(crate) fn has_geometry(object: &SceneObject) -> bool {
    match object {
        SceneObject::Sphere(s) => s.position.is_some() && s.radius.is_some(),
        SceneObject::Plane(p) => p.position.is_some() && p.normal.is_some(),
        SceneObject::Light(_) => false,
    }
}

/// The closest object along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index of the object in the scene list
    pub index: usize,
    /// Distance along the ray
    pub t: f64,
}

/// Find the object with the smallest positive hit distance.
///
/// Objects are scanned in list order and the best hit is only replaced by a
/// strictly closer one, so the lowest index wins ties.
pub fn find_closest_hit(ray: &Ray, objects: &[SceneObject]) -> Option<Hit> {
    let mut closest: Option<Hit> = None;

    for (index, object) in objects.iter().enumerate() {
        let Some(t) = object.intersect(ray) else {
            continue;
        };
        if t > 0.0 && closest.map_or(true, |hit| t < hit.t) {
            closest = Some(Hit { index, t });
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use super::*;
    use raycast_core::{Light, ObjectKind};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sphere(center: Vector3, radius: f64) -> SceneObject {
        SceneObject::Sphere(Sphere {
            position: Some(center),
            radius: Some(radius),
            diffuse_color: Some(Vector3::ONE),
            ..Default::default()
        })
    }

    fn plane(position: Vector3, normal: Vector3) -> SceneObject {
        SceneObject::Plane(Plane {
            position: Some(position),
            normal: Some(normal),
            diffuse_color: Some(Vector3::ONE),
            ..Default::default()
        })
    }

    fn random_unit(rng: &mut StdRng) -> Vector3 {
        loop {
            let v = Vector3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            let len = v.length();
            if len > 0.1 && len <= 1.0 {
                return v / len;
            }
        }
    }

    #[test]
    fn test_sphere_hit() {
        let ray = Ray::new(Vector3::ZERO, Vector3::new(0.0, 0.0, -1.0));
        let t = sphere_intersection(&ray, Vector3::new(0.0, 0.0, -5.0), 1.0).unwrap();
        assert!((t - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_miss() {
        // Ray pointing away from sphere
        let ray = Ray::new(Vector3::ZERO, Vector3::Y);
        assert_eq!(sphere_intersection(&ray, Vector3::new(0.0, 0.0, -5.0), 1.0), None);

        // Sphere entirely behind the origin
        let ray = Ray::new(Vector3::ZERO, Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(sphere_intersection(&ray, Vector3::new(0.0, 0.0, 5.0), 1.0), None);
    }

    #[test]
    fn test_sphere_from_inside() {
        // Smaller root is behind the origin, so the far wall is hit
        let ray = Ray::new(Vector3::ZERO, Vector3::X);
        let t = sphere_intersection(&ray, Vector3::ZERO, 2.0).unwrap();
        assert!((t - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_front_face_distance_property() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let origin = Vector3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );
            let direction = random_unit(&mut rng);
            let radius = rng.gen_range(0.1..5.0);
            let distance = radius + rng.gen_range(0.01..50.0);
            let center = origin + direction * distance;

            let ray = Ray::new(origin, direction);
            let t = sphere_intersection(&ray, center, radius).unwrap();
            assert!(
                (t - (distance - radius)).abs() < 1e-9 * distance.max(1.0),
                "t={} expected={}",
                t,
                distance - radius
            );
        }
    }

    #[test]
    fn test_sphere_miss_property() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let origin = Vector3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );
            let direction = random_unit(&mut rng);
            let side = direction.any_orthonormal_vector();
            let radius = rng.gen_range(0.1..5.0);
            // Closest approach of the ray line stays outside the sphere
            let clearance = radius + rng.gen_range(0.01..10.0);
            let along = rng.gen_range(-50.0..50.0);
            let center = origin + direction * along + side * clearance;

            let ray = Ray::new(origin, direction);
            assert_eq!(sphere_intersection(&ray, center, radius), None);
        }
    }

    #[test]
    fn test_plane_hit() {
        let ray = Ray::new(Vector3::ZERO, Vector3::new(0.0, -1.0, 0.0));
        let t = plane_intersection(&ray, Vector3::new(0.0, -2.0, 0.0), Vector3::Y).unwrap();
        assert!((t - 2.0).abs() < 1e-12);

        // Normal orientation does not matter
        let t = plane_intersection(&ray, Vector3::new(0.0, -2.0, 0.0), -Vector3::Y).unwrap();
        assert!((t - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_plane_behind() {
        let ray = Ray::new(Vector3::ZERO, Vector3::Y);
        assert_eq!(plane_intersection(&ray, Vector3::new(0.0, -2.0, 0.0), Vector3::Y), None);
    }

    #[test]
    fn test_plane_parallel_property() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..500 {
            let a = rng.gen_range(-1.0..1.0);
            let b = rng.gen_range(-1.0..1.0);
            let normal = Vector3::new(a, b, 0.0);
            let direction = Vector3::new(-b, a, rng.gen_range(-1.0..1.0));
            assert_eq!(dot(normal, direction), 0.0);

            let origin = Vector3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );
            let position = Vector3::new(rng.gen_range(-10.0..10.0), 0.0, 0.0);
            let ray = Ray::new(origin, direction);
            assert_eq!(plane_intersection(&ray, position, normal), None);
        }
    }

    #[test]
    fn test_missing_geometry_never_hits() {
        let ray = Ray::new(Vector3::ZERO, Vector3::new(0.0, 0.0, -1.0));
        let no_radius = SceneObject::Sphere(Sphere {
            position: Some(Vector3::new(0.0, 0.0, -5.0)),
            ..Default::default()
        });
        let no_normal = SceneObject::Plane(Plane {
            position: Some(Vector3::new(0.0, 0.0, -5.0)),
            ..Default::default()
        });
        assert_eq!(no_radius.intersect(&ray), None);
        assert_eq!(no_normal.intersect(&ray), None);
        assert!(!has_geometry(&no_radius));
        assert!(!has_geometry(&no_normal));
        assert!(has_geometry(&sphere(Vector3::ZERO, 1.0)));
    }

    #[test]
    fn test_lights_are_skipped() {
        let light = SceneObject::Light(Light {
            color: Some(Vector3::ONE),
            position: Some(Vector3::new(0.0, 0.0, -5.0)),
            ..Default::default()
        });
        assert_eq!(light.kind(), ObjectKind::Light);

        let ray = Ray::new(Vector3::ZERO, Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(light.intersect(&ray), None);
        assert_eq!(find_closest_hit(&ray, &[light]), None);

        let objects = [light, sphere(Vector3::new(0.0, 0.0, -5.0), 1.0)];
        assert_eq!(find_closest_hit(&ray, &objects).map(|h| h.index), Some(1));
    }

    #[test]
    fn test_closest_hit_wins() {
        let ray = Ray::new(Vector3::ZERO, Vector3::new(0.0, 0.0, -1.0));
        let objects = [
            sphere(Vector3::new(0.0, 0.0, -10.0), 1.0),
            plane(Vector3::new(0.0, 0.0, -20.0), Vector3::Z),
            sphere(Vector3::new(0.0, 0.0, -4.0), 1.0),
        ];
        let hit = find_closest_hit(&ray, &objects).unwrap();
        assert_eq!(hit.index, 2);
        assert!((hit.t - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let ray = Ray::new(Vector3::ZERO, Vector3::new(0.0, 0.0, -1.0));
        let a = sphere(Vector3::new(0.0, 0.0, -5.0), 1.0);
        let b = plane(Vector3::new(0.0, 0.0, -4.0), Vector3::Z);
        assert_eq!(a.intersect(&ray), b.intersect(&ray));

        assert_eq!(find_closest_hit(&ray, &[a, b]).unwrap().index, 0);
        assert_eq!(find_closest_hit(&ray, &[b, a]).unwrap().index, 0);
        assert_eq!(find_closest_hit(&ray, &[a, a, a]).unwrap().index, 0);
    }

    #[test]
    fn test_find_closest_hit_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(99);
        let objects: Vec<_> = (0..32)
            .map(|_| {
                sphere(
                    Vector3::new(
                        rng.gen_range(-5.0..5.0),
                        rng.gen_range(-5.0..5.0),
                        rng.gen_range(-20.0..-2.0),
                    ),
                    rng.gen_range(0.2..2.0),
                )
            })
            .collect();

        for _ in 0..200 {
            let ray = Ray::new(Vector3::ZERO, random_unit(&mut rng));
            let first = find_closest_hit(&ray, &objects);
            let second = find_closest_hit(&ray, &objects);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_no_objects() {
        let ray = Ray::new(Vector3::ZERO, Vector3::X);
        assert_eq!(find_closest_hit(&ray, &[]), None);
    }
}
