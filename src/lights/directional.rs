use crate::core::{CheckedNormalize, Color};
use crate::error::Result;
use nalgebra::Vector3;

/// Light at infinite distance shining along `view`.
///
/// The direction to the light is the same for every surface point, so no
/// hit point is needed to evaluate it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DirectionalLight {
    view: Vector3<f64>,
    color: Color,
    intensity: f64,
}

impl DirectionalLight {
    pub fn new(view: Vector3<f64>, color: Color, intensity: f64) -> Result<Self> {
        Ok(Self {
            view: view.checked_normalize()?,
            color,
            intensity,
        })
    }

    pub fn get_direction(&self) -> Vector3<f64> {
        -self.view
    }

    pub fn get_color(&self) -> Color {
        self.color * self.intensity
    }
}
