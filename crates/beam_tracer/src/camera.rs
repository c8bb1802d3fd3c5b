//! Pinhole camera for primary ray generation.

use beam_math::{Quat, Ray, Vec3};

/// World up axis. Vertical movement and horizontal rotation follow it.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Camera that maps normalized screen coordinates to world-space rays.
///
/// The basis (forward/right/up) starts orthonormal and is rotated in place;
/// it is never re-orthonormalized, so long rotation sequences drift slightly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,

    // Lens settings
    fov_deg: f32,      // Vertical field of view in degrees
    screen_scale: f32, // 2 * tan(fov / 2)
    aspect: f32,
    focal_distance: f32,
    aperture_radius: f32, // Stored for depth of field, unused by ray generation
}

impl Camera {
    /// Create a camera looking along `direction`.
    ///
    /// `direction` must not be zero or parallel to [`WORLD_UP`], otherwise the
    /// derived basis is undefined.
    pub fn new(
        aspect: f32,
        fov_deg: f32,
        position: Vec3,
        direction: Vec3,
        focal_distance: f32,
        aperture_radius: f32,
    ) -> Self {
        let forward = direction.normalize();
        let right = WORLD_UP.cross(forward).normalize();
        let up = forward.cross(right);

        Self {
            position,
            forward,
            right,
            up,
            fov_deg,
            screen_scale: fov_to_screen_scale(fov_deg),
            aspect,
            focal_distance,
            aperture_radius,
        }
    }

    /// Build the ray through normalized screen coordinates `(u, v)`.
    ///
    /// `u` runs left to right and `v` top to bottom, both in `[0, 1]`. The
    /// ray starts on the focal plane and points away from the camera position.
    pub fn screen_coords_to_ray(&self, u: f32, v: f32) -> Ray {
        let scale = self.focal_distance * self.screen_scale;
        let pixel_pos = self.position
            + self.focal_distance * self.forward
            + (u - 0.5) * scale * self.right
            - (v - 0.5) * scale * (1.0 / self.aspect) * self.up;

        Ray::new(pixel_pos, (pixel_pos - self.position).normalize())
    }

    /// Translate by `delta` expressed as (right, world up, forward) amounts.
    pub fn move_by(&mut self, delta: Vec3) {
        self.position += delta.x * self.right + delta.y * WORLD_UP + delta.z * self.forward;
    }

    /// Yaw around the world up axis.
    pub fn rotate_horizontally(&mut self, angle_deg: f32) {
        self.rotate(Quat::from_axis_angle(WORLD_UP, angle_deg.to_radians()));
    }

    /// Pitch around the camera's current right axis. Positive angles look up.
    pub fn rotate_vertically(&mut self, angle_deg: f32) {
        self.rotate(Quat::from_axis_angle(
            self.right.normalize(),
            -angle_deg.to_radians(),
        ));
    }

    /// Restore the canonical basis: forward +Z, up +Y, right = up x forward.
    pub fn reset_rotation(&mut self) {
        self.forward = Vec3::Z;
        self.up = Vec3::Y;
        self.right = self.up.cross(self.forward);
    }

    fn rotate(&mut self, rotation: Quat) {
        self.forward = rotation * self.forward;
        self.right = rotation * self.right;
        self.up = rotation * self.up;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_fov(&mut self, fov_deg: f32) {
        self.fov_deg = fov_deg;
        self.screen_scale = fov_to_screen_scale(fov_deg);
    }

    pub fn set_focal_distance(&mut self, focal_distance: f32) {
        self.focal_distance = focal_distance;
    }

    pub fn set_aperture_radius(&mut self, aperture_radius: f32) {
        self.aperture_radius = aperture_radius;
    }

    /// Update aspect ratio (e.g., on output resize)
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn fov(&self) -> f32 {
        self.fov_deg
    }

    pub fn screen_scale(&self) -> f32 {
        self.screen_scale
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn focal_distance(&self) -> f32 {
        self.focal_distance
    }

    pub fn aperture_radius(&self) -> f32 {
        self.aperture_radius
    }
}

#[inline]
fn fov_to_screen_scale(fov_deg: f32) -> f32 {
    2.0 * (0.5 * fov_deg.to_radians()).tan()
}
