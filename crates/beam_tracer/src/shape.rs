//! Closed set of scene primitives.

use crate::{Intersectable, Intersection, Plane, Sphere, Triangle};
use beam_math::{Aabb, Ray};

/// Every shape kind a scene can hold.
///
/// Dispatch is a single `match` per operation; adding a variant makes every
/// unhandled site a compile error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
    /// Culling volume; never produces a hit.
    Aabb(Aabb),
}

impl Shape {
    /// Short lowercase name, matching the scene description `type` tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "sphere",
            Shape::Plane(_) => "plane",
            Shape::Triangle(_) => "triangle",
            Shape::Aabb(_) => "aabb",
        }
    }
}

impl Intersectable for Shape {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        match self {
            Shape::Sphere(s) => s.intersect(ray),
            Shape::Plane(p) => p.intersect(ray),
            Shape::Triangle(t) => t.intersect(ray),
            Shape::Aabb(b) => Intersectable::intersect(b, ray),
        }
    }

    fn bounding_box(&self) -> Aabb {
        match self {
            Shape::Sphere(s) => s.bounding_box(),
            Shape::Plane(p) => p.bounding_box(),
            Shape::Triangle(t) => t.bounding_box(),
            Shape::Aabb(b) => *b,
        }
    }

    fn intersects(&self, ray: &Ray) -> bool {
        match self {
            Shape::Aabb(b) => b.intersects(ray),
            other => other.intersect(ray).is_some(),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

impl From<Aabb> for Shape {
    fn from(aabb: Aabb) -> Self {
        Shape::Aabb(aabb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Material;
    use beam_math::Vec3;

    #[test]
    fn test_dispatch_matches_variant() {
        let sphere = Sphere::new(Material::default(), Vec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let shape = Shape::from(sphere);
        assert_eq!(shape.intersect(&ray), sphere.intersect(&ray));
        assert_eq!(shape.bounding_box(), sphere.bounding_box());
        assert!(shape.intersects(&ray));
        assert_eq!(shape.kind_name(), "sphere");
    }

    #[test]
    fn test_aabb_shape_is_not_a_surface() {
        let shape = Shape::from(Aabb::from_points(Vec3::splat(-1.0), Vec3::splat(1.0)));
        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::Z);

        assert!(shape.intersects(&ray));
        assert!(shape.intersect(&ray).is_none());
        assert_eq!(shape.kind_name(), "aabb");
    }
}
