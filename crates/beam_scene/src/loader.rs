//! Scene description loader.
//!
//! Reads the JSON format
//!
//! ```text
//! { "scene": [
//!   { "type": "sphere",   "material": M, "pos": V, "radius": N },
//!   { "type": "plane",    "material": M, "normal": V, "d": N },      // or "point": V
//!   { "type": "triangle", "material": M, "a": V, "b": V, "c": V }
//! ]}
//! M := { "type": "diffuse", "color": { "r", "g", "b", ["a"] }, ["emission"] }
//! V := { "x", "y", "z" }
//! ```
//!
//! and builds a [`Scene`] through its construction API.

use std::path::Path;

use beam_math::{Vec3, Vec4};
use beam_tracer::{Material, MaterialKind, Scene};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON syntax error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{context}: missing required key \"{key}\"")]
    MissingKey { context: String, key: String },

    #[error("{context}: \"{key}\" has an invalid value")]
    InvalidValue { context: String, key: String },

    #[error("{0}: expected a JSON object")]
    NotAnObject(String),

    #[error("Unknown object type \"{0}\"")]
    UnknownObjectType(String),

    #[error("Unknown material type \"{0}\"")]
    UnknownMaterialType(String),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Build a new scene from description text.
pub fn parse_scene(text: &str) -> LoadResult<Scene> {
    let root: Value = serde_json::from_str(text)?;
    let root = as_object(&root, "scene description")?;

    let objects = field(root, "scene description", "scene")?
        .as_array()
        .ok_or_else(|| invalid("scene description", "scene"))?;

    let mut scene = Scene::new();
    for (index, object) in objects.iter().enumerate() {
        let context = format!("scene[{index}]");
        add_object(&mut scene, object, &context)?;
    }

    log::debug!("Parsed scene description with {} shapes", scene.len());
    Ok(scene)
}

/// Read and parse a scene description file.
pub fn load_scene(path: impl AsRef<Path>) -> LoadResult<Scene> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let scene = parse_scene(&text)?;
    log::info!("Loaded {} shapes from {}", scene.len(), path.display());
    Ok(scene)
}

/// Replace the contents of `scene` with the parsed description.
///
/// The scene is cleared first. On success it holds exactly the new shapes;
/// on failure it is left empty.
pub fn reload_scene(scene: &mut Scene, text: &str) -> LoadResult<()> {
    scene.clear();
    *scene = parse_scene(text)?;
    Ok(())
}

fn add_object(scene: &mut Scene, object: &Value, context: &str) -> LoadResult<()> {
    let object = as_object(object, context)?;
    let kind = string(object, context, "type")?;
    let context = format!("{context} ({kind})");
    let context = context.as_str();

    // Resolved per arm so an unknown type is reported before anything else
    let material = || parse_material(field(object, context, "material")?, context);

    match kind {
        "sphere" => {
            let material = material()?;
            let center = vec3(object, context, "pos")?;
            let radius = number(object, context, "radius")?;
            if radius <= 0.0 {
                return Err(invalid(context, "radius"));
            }
            scene.add_sphere(material, center, radius);
        }
        "plane" => {
            let material = material()?;
            let normal = vec3(object, context, "normal")?;
            if object.contains_key("d") {
                let d = number(object, context, "d")?;
                scene.add_plane(material, normal, d);
            } else if object.contains_key("point") {
                let point = vec3(object, context, "point")?;
                scene.add_plane_through_point(material, normal, point);
            } else {
                return Err(missing(context, "d"));
            }
        }
        "triangle" => {
            let material = material()?;
            let a = vec3(object, context, "a")?;
            let b = vec3(object, context, "b")?;
            let c = vec3(object, context, "c")?;
            scene.add_triangle(material, a, b, c);
        }
        other => return Err(LoadError::UnknownObjectType(other.to_string())),
    }

    Ok(())
}

fn parse_material(value: &Value, context: &str) -> LoadResult<Material> {
    let context = format!("{context} material");
    let context = context.as_str();
    let material = as_object(value, context)?;

    let kind = match string(material, context, "type")? {
        "diffuse" => MaterialKind::Diffuse,
        other => return Err(LoadError::UnknownMaterialType(other.to_string())),
    };

    let color = parse_color(field(material, context, "color")?, context)?;
    let emission = optional_number(material, context, "emission")?.unwrap_or(0.0);

    Ok(Material::new(kind, color, emission))
}

fn parse_color(value: &Value, context: &str) -> LoadResult<Vec4> {
    let context = format!("{context} color");
    let context = context.as_str();
    let color = as_object(value, context)?;

    Ok(Vec4::new(
        number(color, context, "r")?,
        number(color, context, "g")?,
        number(color, context, "b")?,
        optional_number(color, context, "a")?.unwrap_or(1.0),
    ))
}

fn vec3(object: &Map<String, Value>, context: &str, key: &str) -> LoadResult<Vec3> {
    let context = format!("{context} {key}");
    let context = context.as_str();
    let v = as_object(field(object, context, key)?, context)?;

    Ok(Vec3::new(
        number(v, context, "x")?,
        number(v, context, "y")?,
        number(v, context, "z")?,
    ))
}

fn as_object<'a>(value: &'a Value, context: &str) -> LoadResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| LoadError::NotAnObject(context.to_string()))
}

fn field<'a>(object: &'a Map<String, Value>, context: &str, key: &str) -> LoadResult<&'a Value> {
    object.get(key).ok_or_else(|| missing(context, key))
}

fn string<'a>(object: &'a Map<String, Value>, context: &str, key: &str) -> LoadResult<&'a str> {
    field(object, context, key)?
        .as_str()
        .ok_or_else(|| invalid(context, key))
}

fn number(object: &Map<String, Value>, context: &str, key: &str) -> LoadResult<f32> {
    to_f32(field(object, context, key)?).ok_or_else(|| invalid(context, key))
}

fn optional_number(object: &Map<String, Value>, context: &str, key: &str) -> LoadResult<Option<f32>> {
    match object.get(key) {
        None => Ok(None),
        Some(value) => to_f32(value).map(Some).ok_or_else(|| invalid(context, key)),
    }
}

fn to_f32(value: &Value) -> Option<f32> {
    value.as_f64().map(|n| n as f32).filter(|n| n.is_finite())
}

fn missing(context: &str, key: &str) -> LoadError {
    LoadError::MissingKey {
        context: context.to_string(),
        key: key.to_string(),
    }
}

fn invalid(context: &str, key: &str) -> LoadError {
    LoadError::InvalidValue {
        context: context.to_string(),
        key: key.to_string(),
    }
}
