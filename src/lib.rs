#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::too_many_lines,
    clippy::wildcard_imports
)]

mod core;
mod error;
mod lights;
mod primitives;
mod ray_intersection;
mod render;
mod utils;

pub use crate::core::{
    CartoonMaterial, CheckedNormalize, Color, LambertMaterial, Material, Vector2d, Vector3d,
    Vector4d,
};
pub use crate::error::{RenderError, Result};
pub use crate::lights::{DirectionalLight, Light};
pub use crate::primitives::{Plane, Shape, Sphere};
pub use crate::ray_intersection::{Intersectable, Intersection, Ray};
pub use crate::render::{
    Camera, CameraConfig, DepthOfField, ObjectConfig, RaytracingScene, RenderOptions,
    RenderedImage, Scene,
};
