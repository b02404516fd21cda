use super::Color;
use crate::error::{RenderError, Result};
use crate::lights::Light;
use crate::utils::{remap_value, smoothstep};

const LAMBERT_BAND: (f64, f64) = (0.45, 0.55);
const OUTLINE_THRESHOLD: f64 = 0.6;
const HIGHLIGHT_SHININESS: i32 = 30;

// Maps a cosine in [-1, 1] onto [0, 1]
fn normalize_angle(angle: f64) -> f64 {
    (angle + 1.0) / 2.0
}

fn band(value: f64, segments: u32) -> u32 {
    let segments = i64::from(segments);
    ((value * segments as f64).floor() as i64).rem_euclid(segments) as u32
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LambertMaterial {
    pub ambient: Color,
    pub diffuse: Color,
    pub softness: f64,
    pub exponent: f64,
}

impl Default for LambertMaterial {
    fn default() -> Self {
        Self {
            ambient: Color::black(),
            diffuse: Color::black(),
            softness: 1.0,
            exponent: 1.0,
        }
    }
}

impl LambertMaterial {
    pub fn new(ambient: Color, diffuse: Color) -> Self {
        Self {
            ambient,
            diffuse,
            ..LambertMaterial::default()
        }
    }

    /// Weight of the ambient color for a given light angle: 0 when the
    /// surface faces away from the light, 1 when it faces the light, with a
    /// narrow smoothed transition around the terminator.
    pub fn blend_weight(&self, light_angle: f64) -> f64 {
        let c = normalize_angle(light_angle).clamp(LAMBERT_BAND.0, LAMBERT_BAND.1);
        let d = remap_value(c, LAMBERT_BAND, (0.0, 1.0));
        smoothstep(d).powf(self.exponent)
    }

    pub fn shade(&self, light_angle: f64, light: &Light) -> Color {
        let ca = self.blend_weight(light_angle);
        let surface = self.diffuse * (1.0 - ca) + self.ambient * ca;
        surface * self.softness + light.get_color()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CartoonMaterial {
    ambient: Color,
    diffuse: Color,
    specular: Color,
    outline: Color,
    segments: u32,
    highlight_segments: u32,
}

impl CartoonMaterial {
    pub const DEFAULT_SEGMENTS: u32 = 3;

    pub fn new(
        ambient: Color,
        diffuse: Color,
        specular: Color,
        outline: Color,
        segments: u32,
    ) -> Result<Self> {
        if segments == 0 {
            return Err(RenderError::InvalidParameter {
                name: "cartoon".to_string(),
                reason: "segments must be at least 1".to_string(),
            });
        }

        Ok(Self {
            ambient,
            diffuse,
            specular,
            outline,
            segments,
            highlight_segments: 0,
        })
    }

    /// Enables banded specular highlights; 0 disables them.
    #[must_use]
    pub fn with_highlight_segments(mut self, highlight_segments: u32) -> Self {
        self.highlight_segments = highlight_segments;
        self
    }

    pub fn shade(&self, light_angle: f64, camera_angle: f64, reflect_angle: f64) -> Color {
        if camera_angle < OUTLINE_THRESHOLD {
            return self.outline;
        }

        let segments = f64::from(self.segments);
        let rest = f64::from(band(normalize_angle(light_angle), self.segments));
        let color = self.ambient * (rest / segments) + self.diffuse * ((segments - rest) / segments);

        if self.highlight_segments == 0 {
            return color;
        }

        let highlight = normalize_angle(reflect_angle).powi(HIGHLIGHT_SHININESS);
        let segments = f64::from(self.highlight_segments);
        let rest = f64::from(band(highlight, self.highlight_segments));
        self.specular * (rest / segments) + color * ((segments - rest) / segments)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Material {
    Lambert(LambertMaterial),
    Cartoon(CartoonMaterial),
}

impl Material {
    /// Color contributed by `light`. Angles are cosines between the surface
    /// normal and the light, camera and reflected light directions.
    pub fn shade(
        &self,
        light_angle: f64,
        camera_angle: f64,
        reflect_angle: f64,
        light: &Light,
    ) -> Color {
        match self {
            Material::Lambert(material) => material.shade(light_angle, light),
            Material::Cartoon(material) => material.shade(light_angle, camera_angle, reflect_angle),
        }
    }
}
