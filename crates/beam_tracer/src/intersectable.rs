//! The intersection contract shared by every shape and by the scene.

use crate::Material;
use beam_math::{Aabb, Ray, Vec3};

/// Record of the nearest ray-surface contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at the intersection
    pub normal: Vec3,
    /// Material of the shape that was hit
    pub material: Material,
}

impl Intersection {
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            point,
            normal,
            material,
        }
    }
}

/// Anything that can report its nearest forward intersection with a ray.
pub trait Intersectable {
    /// Nearest intersection at parameter `t >= 0` along the ray, if any.
    ///
    /// Degenerate geometry (parallel rays, zero-area triangles, zero-length
    /// directions) resolves to `None`.
    fn intersect(&self, ray: &Ray) -> Option<Intersection>;

    /// Axis-aligned bounds of the object.
    fn bounding_box(&self) -> Aabb;

    /// Cheap yes/no variant of [`Intersectable::intersect`].
    fn intersects(&self, ray: &Ray) -> bool {
        self.intersect(ray).is_some()
    }
}

/// Boxes are culling volumes, not surfaces: they are never "hit", only tested.
impl Intersectable for Aabb {
    fn intersect(&self, _ray: &Ray) -> Option<Intersection> {
        None
    }

    fn bounding_box(&self) -> Aabb {
        *self
    }

    fn intersects(&self, ray: &Ray) -> bool {
        Aabb::intersects(self, ray)
    }
}
