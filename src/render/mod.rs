mod camera;
mod raytracing_scene;
mod scene;

use crate::core::Color;

pub use camera::{Camera, DepthOfField};
pub use raytracing_scene::{RaytracingScene, RenderedImage};
pub use scene::{CameraConfig, ObjectConfig, Scene};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RenderOptions {
    /// Color of pixels whose ray hits nothing.
    pub background: Color,
}
