//! Triangle primitive.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::{Intersectable, Intersection, Material};
use beam_math::{Aabb, Ray, Vec3};

/// Tolerance for the parallel-ray test and the accepted `t` window.
pub const EPSILON: f32 = 1.0e-7;

/// A triangle primitive.
///
/// The face normal and centroid are derived from the vertices and kept in
/// sync by every vertex mutator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub material: Material,
    a: Vec3,
    b: Vec3,
    c: Vec3,
    /// Face normal, `normalize(cross(b - a, c - a))`
    normal: Vec3,
    centroid: Vec3,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(material: Material, a: Vec3, b: Vec3, c: Vec3) -> Self {
        let mut triangle = Self {
            material,
            a,
            b,
            c,
            normal: Vec3::ZERO,
            centroid: Vec3::ZERO,
        };
        triangle.recalculate();
        triangle
    }

    #[inline]
    pub fn a(&self) -> Vec3 {
        self.a
    }

    #[inline]
    pub fn b(&self) -> Vec3 {
        self.b
    }

    #[inline]
    pub fn c(&self) -> Vec3 {
        self.c
    }

    /// Unit face normal, or zero for a degenerate triangle.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    #[inline]
    pub fn centroid(&self) -> Vec3 {
        self.centroid
    }

    pub fn set_a(&mut self, a: Vec3) {
        self.a = a;
        self.recalculate();
    }

    pub fn set_b(&mut self, b: Vec3) {
        self.b = b;
        self.recalculate();
    }

    pub fn set_c(&mut self, c: Vec3) {
        self.c = c;
        self.recalculate();
    }

    pub fn set_points(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        self.a = a;
        self.b = b;
        self.c = c;
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.normal = (self.b - self.a).cross(self.c - self.a).normalize_or_zero();
        self.centroid = (self.a + self.b + self.c) / 3.0;
    }
}

impl Intersectable for Triangle {
    /// Möller-Trumbore. The face normal is returned as stored, not turned
    /// toward the ray.
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;

        let h = ray.direction.cross(ac);
        let a = ab.dot(h);

        // Ray is parallel to triangle
        if a.abs() < EPSILON {
            return None;
        }

        let inv_a = 1.0 / a;
        let ao = ray.origin - self.a;
        let u = inv_a * ao.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = ao.cross(ab);
        let v = inv_a * ray.direction.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = inv_a * ac.dot(q);
        if t <= EPSILON || t >= 1.0 / EPSILON {
            return None;
        }

        Some(Intersection::new(ray.at(t), self.normal, self.material))
    }

    fn bounding_box(&self) -> Aabb {
        Aabb::from_points(self.a.min(self.b).min(self.c), self.a.max(self.b).max(self.c))
    }
}
