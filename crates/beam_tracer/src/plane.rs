//! Infinite plane primitive.

use crate::{Intersectable, Intersection, Material};
use beam_math::{Aabb, Interval, Ray, Vec3};

/// An infinite plane: the points `p` where `dot(p, normal) + d == 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub d: f32,
    pub material: Material,
}

impl Plane {
    /// Create a plane from its normal and signed distance term.
    pub fn new(material: Material, normal: Vec3, d: f32) -> Self {
        Self {
            normal,
            d,
            material,
        }
    }

    /// Create the plane with the given normal passing through `point`.
    pub fn through_point(material: Material, normal: Vec3, point: Vec3) -> Self {
        Self::new(material, normal, -normal.dot(point))
    }

    /// Signed plane equation value at `p`; zero on the plane.
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        p.dot(self.normal) + self.d
    }

    /// Index of the axis the normal points along, if it is axis-aligned.
    fn aligned_axis(&self) -> Option<usize> {
        let n = self.normal;
        match (n.x != 0.0, n.y != 0.0, n.z != 0.0) {
            (true, false, false) => Some(0),
            (false, true, false) => Some(1),
            (false, false, true) => Some(2),
            _ => None,
        }
    }
}

impl Intersectable for Plane {
    /// The returned normal always faces the incoming ray.
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let denom = ray.direction.dot(self.normal);
        if denom == 0.0 {
            return None;
        }

        let t = -(ray.origin.dot(self.normal) + self.d) / denom;
        if t < 0.0 {
            return None;
        }

        let normal = if denom > 0.0 { -self.normal } else { self.normal };
        Some(Intersection::new(ray.at(t), normal, self.material))
    }

    /// Unbounded unless axis-aligned, in which case the box is flat on that axis.
    fn bounding_box(&self) -> Aabb {
        let mut aabb = Aabb::INFINITE;
        let Some(axis) = self.aligned_axis() else {
            return aabb;
        };

        let offset = -self.d / self.normal[axis];
        let flat = Interval::new(offset, offset);
        match axis {
            0 => aabb.x = flat,
            1 => aabb.y = flat,
            _ => aabb.z = flat,
        }
        aabb
    }
}
