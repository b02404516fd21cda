use super::raytracing_scene::RaytracingScene;
use super::{Camera, DepthOfField, RenderOptions};
use crate::core::{CartoonMaterial, Color, LambertMaterial, Material};
use crate::error::{RenderError, Result};
use crate::lights::{DirectionalLight, Light};
use crate::primitives::{Plane, Shape, Sphere};
use log::{debug, warn};
use nalgebra::{Point3, Vector3};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::Read;
use std::str::FromStr;

fn one() -> f64 {
    1.0
}

fn default_segments() -> u32 {
    CartoonMaterial::DEFAULT_SEGMENTS
}

fn default_up() -> Vector3<f64> {
    Vector3::y()
}

/// Named entry of the `materials`, `shapes` or `lights` lists. The
/// parameters are only decoded once `kind` is known.
#[derive(Debug, Deserialize)]
pub struct ObjectConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl ObjectConfig {
    fn params<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(Value::Object(self.params.clone())).map_err(|err| {
            RenderError::InvalidParameter {
                name: self.name.clone(),
                reason: err.to_string(),
            }
        })
    }

    fn unsupported(&self, category: &'static str) -> RenderError {
        RenderError::UnsupportedKind {
            category,
            kind: self.kind.clone(),
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LambertConfig {
    ambient: String,
    diffuse: String,
    #[serde(default = "one")]
    softness: f64,
    #[serde(default = "one")]
    exponent: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CartoonConfig {
    ambient: String,
    diffuse: String,
    specular: String,
    outline: String,
    #[serde(default = "default_segments")]
    segments: u32,
    #[serde(default)]
    highlight_segments: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SphereConfig {
    position: Point3<f64>,
    radius: Option<f64>,
    scales: Option<Vector3<f64>>,
    material: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlaneConfig {
    position: Point3<f64>,
    normal: Vector3<f64>,
    material: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DirectionalLightConfig {
    view: Vector3<f64>,
    color: String,
    #[serde(default = "one")]
    intensity: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraConfig {
    pub name: String,
    pub position: Point3<f64>,
    #[serde(default)]
    pub target: Option<Point3<f64>>,
    #[serde(default = "default_up")]
    pub up: Vector3<f64>,
    pub resolution: (u32, u32),
    #[serde(default)]
    pub depth: Option<f64>,
    #[serde(default)]
    pub sensor_width: Option<f64>,
    #[serde(default)]
    pub depth_of_field: Option<DepthOfField>,
}

impl CameraConfig {
    fn build(self) -> Result<Camera> {
        let mut camera = Camera::new(&self.name, self.position, self.resolution)?;
        if let Some(width) = self.sensor_width {
            camera = camera.with_sensor_width(width)?;
        }
        if let Some(depth) = self.depth {
            camera = camera.with_depth(depth)?;
        }
        if let Some(depth_of_field) = self.depth_of_field {
            camera = camera.with_depth_of_field(depth_of_field)?;
        }

        let target = self.target.unwrap_or(self.position - Vector3::z());
        camera.look_at(target, self.up)?;

        Ok(camera)
    }
}

/// Scene description as written in a scene file. Objects refer to colors
/// and materials by name; `build_raytracing_scene` resolves the names.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scene {
    pub background: Color,
    pub cameras: Vec<CameraConfig>,
    pub colors: HashMap<String, Color>,
    pub materials: Vec<ObjectConfig>,
    pub shapes: Vec<ObjectConfig>,
    pub lights: Vec<ObjectConfig>,
}

impl FromStr for Scene {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

impl Scene {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn build_raytracing_scene(self) -> Result<RaytracingScene> {
        let colors = self.colors;

        let mut materials = HashMap::new();
        for config in &self.materials {
            let material = build_material(config, &colors)?;
            match materials.entry(config.name.clone()) {
                Entry::Occupied(_) => {
                    return Err(RenderError::DuplicateName {
                        category: "material",
                        name: config.name.clone(),
                    })
                }
                Entry::Vacant(entry) => {
                    entry.insert(material);
                }
            }
        }

        let shapes = self
            .shapes
            .iter()
            .map(|config| build_shape(config, &materials))
            .collect::<Result<Vec<_>>>()?;
        let lights = self
            .lights
            .iter()
            .map(|config| build_light(config, &colors))
            .collect::<Result<Vec<_>>>()?;
        let cameras = self
            .cameras
            .into_iter()
            .map(CameraConfig::build)
            .collect::<Result<Vec<_>>>()?;

        if cameras.is_empty() {
            warn!("Scene has no cameras, nothing will be rendered");
        }
        debug!(
            "Resolved {} colors, {} materials, {} shapes, {} lights and {} cameras",
            colors.len(),
            materials.len(),
            shapes.len(),
            lights.len(),
            cameras.len()
        );

        Ok(RaytracingScene::new(
            RenderOptions {
                background: self.background,
            },
            cameras,
            shapes,
            lights,
        ))
    }
}

fn invalid_parameter(config: &ObjectConfig, reason: &str) -> RenderError {
    RenderError::InvalidParameter {
        name: config.name.clone(),
        reason: reason.to_string(),
    }
}

fn lookup<'a, T>(
    table: &'a HashMap<String, T>,
    (kind, name): (&'static str, &str),
    (target, reference): (&'static str, &str),
) -> Result<&'a T> {
    table
        .get(reference)
        .ok_or_else(|| RenderError::ConfigReference {
            kind,
            name: name.to_string(),
            target,
            reference: reference.to_string(),
        })
}

fn build_material(config: &ObjectConfig, colors: &HashMap<String, Color>) -> Result<Material> {
    let color = |reference: &str| -> Result<Color> {
        lookup(colors, ("material", config.name.as_str()), ("color", reference)).copied()
    };

    match config.kind.as_str() {
        "lambert" => {
            let params: LambertConfig = config.params()?;
            if !params.softness.is_finite() || params.softness < 0.0 {
                return Err(invalid_parameter(config, "softness must be finite and non-negative"));
            }
            if !params.exponent.is_finite() || params.exponent < 0.0 {
                return Err(invalid_parameter(config, "exponent must be finite and non-negative"));
            }

            Ok(Material::Lambert(LambertMaterial {
                ambient: color(&params.ambient)?,
                diffuse: color(&params.diffuse)?,
                softness: params.softness,
                exponent: params.exponent,
            }))
        }
        "cartoon" => {
            let params: CartoonConfig = config.params()?;
            let material = CartoonMaterial::new(
                color(&params.ambient)?,
                color(&params.diffuse)?,
                color(&params.specular)?,
                color(&params.outline)?,
                params.segments,
            )
            .map_err(|err| match err {
                RenderError::InvalidParameter { reason, .. } => RenderError::InvalidParameter {
                    name: config.name.clone(),
                    reason,
                },
                err => err,
            })?;
            Ok(Material::Cartoon(
                material.with_highlight_segments(params.highlight_segments),
            ))
        }
        _ => Err(config.unsupported("material")),
    }
}

fn build_shape(config: &ObjectConfig, materials: &HashMap<String, Material>) -> Result<Shape> {
    let material = |reference: &str| -> Result<Material> {
        lookup(materials, ("shape", config.name.as_str()), ("material", reference)).copied()
    };
    let invalid = |reason: &str| invalid_parameter(config, reason);

    match config.kind.as_str() {
        "sphere" => {
            let params: SphereConfig = config.params()?;
            let scales = match (params.radius, params.scales) {
                (Some(_), Some(_)) => return Err(invalid("set either radius or scales, not both")),
                (Some(radius), None) => Vector3::repeat(radius),
                (None, Some(scales)) => scales,
                (None, None) => Vector3::repeat(1.0),
            };
            if scales.iter().any(|scale| *scale <= 0.0) {
                return Err(invalid("radius and scales must be positive"));
            }

            let material = material(&params.material)?;
            Ok(Shape::Sphere(Sphere::ellipsoid(params.position, scales, material)))
        }
        "plane" => {
            let params: PlaneConfig = config.params()?;
            let material = material(&params.material)?;
            Ok(Shape::Plane(Plane::new(params.position, params.normal, material)?))
        }
        _ => Err(config.unsupported("shape")),
    }
}

fn build_light(config: &ObjectConfig, colors: &HashMap<String, Color>) -> Result<Light> {
    match config.kind.as_str() {
        "directional" => {
            let params: DirectionalLightConfig = config.params()?;
            let color = lookup(
                colors,
                ("light", config.name.as_str()),
                ("color", params.color.as_str()),
            )?;
            Ok(Light::Directional(DirectionalLight::new(
                params.view,
                *color,
                params.intensity,
            )?))
        }
        _ => Err(config.unsupported("light")),
    }
}
