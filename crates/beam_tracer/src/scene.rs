//! Scene aggregate: an owned, ordered arena of shapes.

use std::time::Instant;

use crate::{
    Camera, Color, Intersectable, Intersection, Material, PixelBuffer, Plane, Shape, Sphere,
    Triangle,
};
use beam_math::{Aabb, Ray, Vec3};

/// An ordered collection of shapes that is itself intersectable.
///
/// Shapes are stored by value and addressed by index. A scene is built once
/// through the `add*` calls and replaced wholesale on reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape and return its index.
    pub fn add(&mut self, shape: impl Into<Shape>) -> usize {
        self.shapes.push(shape.into());
        self.shapes.len() - 1
    }

    pub fn add_sphere(&mut self, material: Material, center: Vec3, radius: f32) -> usize {
        self.add(Sphere::new(material, center, radius))
    }

    pub fn add_plane(&mut self, material: Material, normal: Vec3, d: f32) -> usize {
        self.add(Plane::new(material, normal, d))
    }

    pub fn add_plane_through_point(&mut self, material: Material, normal: Vec3, point: Vec3) -> usize {
        self.add(Plane::through_point(material, normal, point))
    }

    pub fn add_triangle(&mut self, material: Material, a: Vec3, b: Vec3, c: Vec3) -> usize {
        self.add(Triangle::new(material, a, b, c))
    }

    /// Get a shape by index.
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Remove every shape.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Render one frame.
    ///
    /// Every pixel `(u, v)` of `buffer` gets the flat material color of the
    /// nearest hit along the camera ray through `(u / width, v / height)`,
    /// or `sky_color` when nothing is hit.
    pub fn trace(&self, camera: &Camera, sky_color: Color, buffer: &mut PixelBuffer) {
        let start = Instant::now();
        let (width, height) = (buffer.width(), buffer.height());
        let du = 1.0 / width as f32;
        let dv = 1.0 / height as f32;

        for v in 0..height {
            for u in 0..width {
                let ray = camera.screen_coords_to_ray(u as f32 * du, v as f32 * dv);
                let color = self
                    .intersect(&ray)
                    .map_or(sky_color, |hit| hit.material.color);
                buffer.set(u, v, color);
            }
        }

        log::debug!(
            "Traced {}x{} against {} shapes in {:?}",
            width,
            height,
            self.shapes.len(),
            start.elapsed()
        );
    }
}

impl Intersectable for Scene {
    /// Closest hit by squared distance from the ray origin.
    ///
    /// On an exact distance tie the shape added first wins; callers should
    /// not rely on which one that is.
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let mut closest: Option<Intersection> = None;
        let mut closest_distance_sq = f32::INFINITY;

        for shape in &self.shapes {
            let Some(hit) = shape.intersect(ray) else {
                continue;
            };
            let distance_sq = (hit.point - ray.origin).length_squared();
            if distance_sq < closest_distance_sq {
                closest = Some(hit);
                closest_distance_sq = distance_sq;
            }
        }

        closest
    }

    fn bounding_box(&self) -> Aabb {
        self.shapes.iter().fold(Aabb::NOTHING, |mut acc, shape| {
            acc.combine(&shape.bounding_box());
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beam_math::Vec4;

    fn colored(r: f32, g: f32, b: f32) -> Material {
        Material::diffuse(Vec4::new(r, g, b, 1.0), 0.0)
    }

    fn three_shapes() -> Scene {
        let mut scene = Scene::new();
        scene.add_sphere(colored(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 10.0), 3.0);
        scene.add_plane(colored(0.0, 1.0, 0.0), Vec3::Y, 5.0);
        scene.add_triangle(
            colored(0.0, 0.0, 1.0),
            Vec3::new(-1.0, -1.0, 4.0),
            Vec3::new(1.0, -1.0, 4.0),
            Vec3::new(0.0, 1.0, 4.0),
        );
        scene
    }

    fn brute_force_closest(shapes: &[Shape], ray: &Ray) -> Option<f32> {
        shapes
            .iter()
            .filter_map(|s| s.intersect(ray))
            .map(|hit| (hit.point - ray.origin).length_squared())
            .min_by(|a, b| a.total_cmp(b))
    }

    #[test]
    fn test_add_returns_indices() {
        let mut scene = Scene::new();
        assert_eq!(scene.add_sphere(Material::default(), Vec3::ZERO, 1.0), 0);
        assert_eq!(scene.add_plane_through_point(Material::default(), Vec3::Y, Vec3::ZERO), 1);
        assert_eq!(scene.add(Aabb::INFINITE), 2);

        assert_eq!(scene.len(), 3);
        assert_eq!(scene.get(1).map(Shape::kind_name), Some("plane"));
        assert!(scene.get(3).is_none());
    }

    #[test]
    fn test_nearest_hit_wins() {
        let scene = three_shapes();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let hit = scene.intersect(&ray).expect("ray should hit the triangle");

        assert_eq!(hit.material, colored(0.0, 0.0, 1.0));
        assert!((hit.point - Vec3::new(0.0, 0.0, 4.0)).length() < 1e-5);
    }

    #[test]
    fn test_matches_brute_force_and_order_independent() {
        let scene = three_shapes();
        let mut reversed = Scene::new();
        for shape in scene.shapes().iter().rev() {
            reversed.add(*shape);
        }

        let directions = [
            Vec3::Z,
            Vec3::new(0.0, -1.0, 1.0),
            Vec3::new(0.2, -0.1, 1.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        for direction in directions {
            let ray = Ray::new(Vec3::ZERO, direction.normalize());
            let expected = brute_force_closest(scene.shapes(), &ray);
            let got = scene.intersect(&ray);

            assert_eq!(got.map(|h| (h.point - ray.origin).length_squared()), expected);
            assert_eq!(got, reversed.intersect(&ray));
        }
    }

    #[test]
    fn test_tie_goes_to_first_added() {
        let mut scene = Scene::new();
        scene.add_plane(colored(1.0, 0.0, 0.0), Vec3::Z, -5.0);
        scene.add_plane(colored(0.0, 1.0, 0.0), Vec3::Z, -5.0);

        let hit = scene.intersect(&Ray::new(Vec3::ZERO, Vec3::Z)).expect("ray should hit");
        assert_eq!(hit.material, colored(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_clear_yields_empty_scene() {
        let mut scene = three_shapes();
        scene.clear();

        assert!(scene.is_empty());
        assert_eq!(scene, Scene::new());
        for direction in [Vec3::Z, -Vec3::Y, Vec3::X] {
            assert!(scene.intersect(&Ray::new(Vec3::ZERO, direction)).is_none());
        }
        assert_eq!(scene.bounding_box(), Aabb::NOTHING);
    }

    #[test]
    fn test_bounding_box_union() {
        let mut scene = Scene::new();
        scene.add_sphere(Material::default(), Vec3::ZERO, 1.0);
        scene.add_sphere(Material::default(), Vec3::new(5.0, 0.0, 0.0), 2.0);

        let bbox = scene.bounding_box();
        assert_eq!(bbox.min(), Vec3::new(-1.0, -2.0, -2.0));
        assert_eq!(bbox.max(), Vec3::new(7.0, 2.0, 2.0));

        scene.add_plane(Material::default(), Vec3::new(1.0, 1.0, 0.0).normalize(), 0.0);
        assert_eq!(scene.bounding_box(), Aabb::INFINITE);
    }

    #[test]
    fn test_trace_all_miss_writes_sky() {
        let mut scene = Scene::new();
        scene.add_sphere(colored(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -10.0), 1.0);
        scene.add_plane(colored(0.0, 1.0, 0.0), Vec3::Z, 10.0);
        scene.add_triangle(colored(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -4.0), Vec3::new(1.0, 0.0, -4.0), Vec3::new(0.0, 1.0, -4.0));

        let camera = Camera::new(1.0, 60.0, Vec3::ZERO, Vec3::Z, 1.0, 0.0);
        let sky = Color::new(0.1, 0.2, 0.3, 1.0);
        let mut buffer = PixelBuffer::new(8, 6);
        scene.trace(&camera, sky, &mut buffer);

        assert!(buffer.pixels().all(|&c| c == sky));
    }

    #[test]
    fn test_trace_top_and_bottom_rows() {
        // Floor below, sky above
        let mut scene = Scene::new();
        let floor = colored(0.5, 0.5, 0.5);
        scene.add_plane(floor, Vec3::Y, 1.0);

        let camera = Camera::new(1.0, 90.0, Vec3::ZERO, Vec3::Z, 1.0, 0.0);
        let sky = Color::new(0.0, 0.0, 0.0, 1.0);
        let mut buffer = PixelBuffer::new(4, 4);
        scene.trace(&camera, sky, &mut buffer);

        for u in 0..4 {
            assert_eq!(buffer.get(u, 0), sky);
            assert_eq!(buffer.get(u, 3), floor.color);
        }
    }
}
