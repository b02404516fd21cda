mod directional;

use crate::core::Color;
use nalgebra::{Point3, Vector3};

pub use directional::DirectionalLight;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Light {
    Directional(DirectionalLight),
}

impl Light {
    /// Unit vector from `hit_point` toward the light.
    pub fn get_direction(&self, _hit_point: &Point3<f64>) -> Vector3<f64> {
        match self {
            Light::Directional(light) => light.get_direction(),
        }
    }

    pub fn get_color(&self) -> Color {
        match self {
            Light::Directional(light) => light.get_color(),
        }
    }
}
