//! Beam tracer - ray/shape intersection core.
//!
//! Casts one ray per pixel from a [`Camera`] into a [`Scene`] of flat-colored
//! shapes and writes the nearest hit's material color into a [`PixelBuffer`].
//!
//! The shape set is closed: [`Shape`] is an enum over [`Sphere`], [`Plane`],
//! [`Triangle`] and [`Aabb`], stored contiguously inside the scene.

mod camera;
mod intersectable;
mod material;
mod pixel_buffer;
mod plane;
mod scene;
mod shape;
mod sphere;
mod triangle;

pub use camera::{Camera, WORLD_UP};
pub use intersectable::{Intersectable, Intersection};
pub use material::{Color, Material, MaterialKind};
pub use pixel_buffer::{color_to_rgba8, PixelBuffer};
pub use plane::Plane;
pub use scene::Scene;
pub use shape::Shape;
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from beam_math
pub use beam_math::{Aabb, Ray, Vec3, Vec4};
