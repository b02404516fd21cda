use auto_ops::{impl_op_ex, impl_op_ex_commutative};
use image::Rgb;
use nalgebra::Vector3;
use serde::Deserialize;

const CHANNEL_MAX: f64 = u8::MAX as f64;

/// Unclamped RGB triple on the 0-255 scale.
///
/// Contributions from several lights are summed as-is; clamping only happens
/// when the color is quantized into a pixel.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Color(Vector3<f64>);

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self(Vector3::new(r, g, b))
    }

    pub fn black() -> Self {
        Self(Vector3::zeros())
    }

    pub fn r(&self) -> f64 {
        self.0.x
    }

    pub fn g(&self) -> f64 {
        self.0.y
    }

    pub fn b(&self) -> f64 {
        self.0.z
    }

    pub fn to_rgb8(&self) -> Rgb<u8> {
        let channel = |c: f64| c.clamp(0.0, CHANNEL_MAX) as u8;
        Rgb([channel(self.0.x), channel(self.0.y), channel(self.0.z)])
    }
}

impl_op_ex!(+ |a: &Color, b: &Color| -> Color { Color(a.0 + b.0) });
impl_op_ex!(+= |a: &mut Color, b: &Color| { a.0 += b.0; });
impl_op_ex_commutative!(* |a: &Color, b: &f64| -> Color { Color(a.0 * *b) });

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_clamps_when_quantizing() {
        assert_eq!(Color::new(-20.0, 128.7, 300.0).to_rgb8(), Rgb([0, 128, 255]));
        assert_eq!(Color::new(255.0, 0.0, 254.999).to_rgb8(), Rgb([255, 0, 254]));
        assert_eq!(Color::black().to_rgb8(), Rgb([0, 0, 0]));
    }

    #[test]
    fn it_accumulates_light_contributions() {
        let mut color = Color::black();
        color += Color::new(100.0, 50.0, 25.0);
        color += &Color::new(200.0, 50.0, 0.0);

        assert_eq!(color, Color::new(300.0, 100.0, 25.0));
        assert_eq!(color.to_rgb8(), Rgb([255, 100, 25]));
    }

    #[test]
    fn it_scales() {
        let color = Color::new(10.0, 20.0, 30.0);
        assert_eq!(color * 0.5, Color::new(5.0, 10.0, 15.0));
        assert_eq!(2.0 * color, Color::new(20.0, 40.0, 60.0));
        assert_eq!(color + color, Color::new(20.0, 40.0, 60.0));
    }

    #[test]
    fn it_deserializes_from_an_array() {
        assert_eq!(
            serde_json::from_value::<Color>(json!([85, 37, 130])).unwrap(),
            Color::new(85.0, 37.0, 130.0)
        );
        assert!(serde_json::from_value::<Color>(json!([1, 2])).is_err());
    }
}
