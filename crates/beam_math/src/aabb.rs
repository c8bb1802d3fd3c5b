use crate::{Interval, Ray, Vec3};

/// Axis-Aligned Bounding Box used for culling and bounds union.
///
/// An AABB is defined by three intervals (one per axis). Two sentinel boxes
/// deliberately break the `min <= max` invariant of a real box:
/// [`Aabb::NOTHING`] is the empty set and the identity of [`Aabb::combine`],
/// [`Aabb::INFINITE`] is the universal set and absorbs any box it is combined with.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// The empty box (+inf as min, -inf as max on every axis).
    pub const NOTHING: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    /// The universal box (-inf as min, +inf as max on every axis).
    pub const INFINITE: Aabb = Aabb {
        x: Interval::UNIVERSE,
        y: Interval::UNIVERSE,
        z: Interval::UNIVERSE,
    };

    /// Create an AABB from explicit per-axis bounds.
    ///
    /// Bounds are stored as given; no reordering or padding is applied.
    pub const fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32, z_min: f32, z_max: f32) -> Self {
        Self {
            x: Interval::new(x_min, x_max),
            y: Interval::new(y_min, y_max),
            z: Interval::new(z_min, z_max),
        }
    }

    /// Create an AABB from two corner points, in any order.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::new(min.x, max.x, min.y, max.y, min.z, max.z)
    }

    /// The union identity.
    #[inline]
    pub fn nothing() -> Self {
        Self::NOTHING
    }

    /// The absorbing element of union.
    #[inline]
    pub fn infinite() -> Self {
        Self::INFINITE
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec3 {
        Vec3::new(self.x.min, self.y.min, self.z.min)
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec3 {
        Vec3::new(self.x.max, self.y.max, self.z.max)
    }

    /// True if any axis is empty, so the box contains no point.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty() || self.z.is_empty()
    }

    /// Extend this box in place so it also bounds `other`.
    pub fn combine(&mut self, other: &Aabb) {
        *self = Self::overarching(self, other);
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn overarching(a: &Aabb, b: &Aabb) -> Self {
        Self {
            x: Interval::surrounding(&a.x, &b.x),
            y: Interval::surrounding(&a.y, &b.y),
            z: Interval::surrounding(&a.z, &b.z),
        }
    }

    /// Test if a ray hits this box anywhere at or ahead of its origin.
    ///
    /// Uses the slab method: the entry/exit parameters of the three axis slabs
    /// are intersected, and the ray hits when that interval is non-empty and
    /// ends at `t >= 0`.
    pub fn intersects(&self, ray: &Ray) -> bool {
        if self.is_empty() {
            return false;
        }

        let inv_dir = ray.direction.recip();
        let t0 = (self.min() - ray.origin) * inv_dir;
        let t1 = (self.max() - ray.origin) * inv_dir;

        let t_near = t0.min(t1).max_element();
        let t_far = t0.max(t1).min_element();

        t_far >= 0.0 && t_far >= t_near
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::NOTHING
    }
}
