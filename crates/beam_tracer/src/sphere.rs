//! Sphere primitive.

use crate::{Intersectable, Intersection, Material};
use beam_math::{Aabb, Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(material: Material, center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Intersectable for Sphere {
    /// Solves `|O + tD - C|^2 = r^2` for the nearest non-negative root.
    ///
    /// Spheres with a non-positive radius have no surface and are never hit.
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        if self.radius <= 0.0 {
            return None;
        }
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        if a == 0.0 {
            return None;
        }
        let b = 2.0 * ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root first; fall back to the far root when the origin is inside
        let mut t = (-b - sqrtd) / (2.0 * a);
        if t < 0.0 {
            t = (-b + sqrtd) / (2.0 * a);
            if t < 0.0 {
                return None;
            }
        }

        let point = ray.at(t);
        Some(Intersection::new(
            point,
            (point - self.center).normalize(),
            self.material,
        ))
    }

    fn bounding_box(&self) -> Aabb {
        let rvec = Vec3::splat(self.radius);
        Aabb::from_points(self.center - rvec, self.center + rvec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    fn sphere() -> Sphere {
        Sphere::new(Material::default(), Vec3::new(0.0, 0.0, 10.0), 3.0)
    }

    #[test]
    fn test_sphere_hit_front() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let hit = sphere().intersect(&ray).expect("ray should hit the sphere");

        assert!(approx_eq(hit.point, Vec3::new(0.0, 0.0, 7.0)));
        assert!(approx_eq(hit.normal, Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_sphere_miss() {
        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(sphere().intersect(&ray).is_none());

        // Ray passing beside it
        let ray = Ray::new(Vec3::new(3.5, 0.0, 0.0), Vec3::Z);
        assert!(sphere().intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 20.0), Vec3::Z);
        assert!(sphere().intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_from_inside_uses_far_root() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
        let hit = sphere().intersect(&ray).expect("ray from inside should exit");

        assert!(approx_eq(hit.point, Vec3::new(0.0, 0.0, 13.0)));
        assert!(approx_eq(hit.normal, Vec3::Z));
    }

    #[test]
    fn test_sphere_unnormalized_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 4.0));
        let hit = sphere().intersect(&ray).expect("ray should hit the sphere");
        assert!(approx_eq(hit.point, Vec3::new(0.0, 0.0, 7.0)));
    }

    #[test]
    fn test_sphere_zero_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert!(sphere().intersect(&ray).is_none());
    }

    #[test]
    fn test_degenerate_radius_never_hits() {
        for radius in [0.0, -2.0] {
            let s = Sphere::new(Material::default(), Vec3::new(0.0, 0.0, 5.0), radius);
            // Straight through the center, where the discriminant is exactly zero
            assert!(s.intersect(&Ray::new(Vec3::ZERO, Vec3::Z)).is_none());
            assert!(s.intersect(&Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::X)).is_none());
        }
    }

    #[test]
    fn test_sphere_hits_lie_on_surface() {
        let s = Sphere::new(Material::default(), Vec3::new(1.0, -2.0, 6.0), 2.5);
        let origins = [Vec3::ZERO, Vec3::new(-4.0, 3.0, -1.0), Vec3::new(1.0, -2.0, 6.0)];

        for origin in origins {
            for i in 0..32 {
                let angle = i as f32 * 0.2;
                let target = s.center + Vec3::new(angle.cos(), angle.sin(), 0.5) * 2.0;
                let ray = Ray::new(origin, (target - origin).normalize());
                if let Some(hit) = s.intersect(&ray) {
                    let distance = (hit.point - s.center).length();
                    assert!((distance - s.radius).abs() < 1e-3);
                    assert!((hit.point - origin).dot(ray.direction) >= -1e-4);
                }
            }
        }
    }

    #[test]
    fn test_sphere_bounding_box() {
        let bbox = sphere().bounding_box();
        assert_eq!(bbox.min(), Vec3::new(-3.0, -3.0, 7.0));
        assert_eq!(bbox.max(), Vec3::new(3.0, 3.0, 13.0));
    }
}
