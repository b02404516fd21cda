use crate::core::{CheckedNormalize, Vector2d};
use crate::error::{RenderError, Result};
use crate::ray_intersection::Ray;
use nalgebra::{Point3, Vector3};
use rand::{thread_rng, Rng};
use serde::Deserialize;

const DEFAULT_SENSOR_WIDTH: f64 = 1.0;
const DEFAULT_DEPTH: f64 = 3.0;

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DepthOfField {
    pub radius: f64,
    pub focus: f64,
}

/// Pinhole camera with an image plane `depth` units in front of it.
///
/// `view` points from the look target back toward the camera, so the camera
/// looks along `-view`. `side` and `up` span the image plane.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    name: String,
    position: Point3<f64>,
    side: Vector3<f64>,
    up: Vector3<f64>,
    view: Vector3<f64>,
    sensor: Vector2d,
    resolution: (u32, u32),
    depth: f64,
    depth_of_field: Option<DepthOfField>,
}

impl Camera {
    pub fn new(name: &str, position: Point3<f64>, resolution: (u32, u32)) -> Result<Self> {
        let (width, height) = resolution;
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidParameter {
                name: name.to_string(),
                reason: format!("resolution must be non-zero, got {}x{}", width, height),
            });
        }

        let mut camera = Self {
            name: name.to_string(),
            position,
            side: Vector3::x(),
            up: Vector3::y(),
            view: Vector3::z(),
            sensor: Vector2d::zeros(),
            resolution,
            depth: DEFAULT_DEPTH,
            depth_of_field: None,
        };
        camera.set_sensor_width(DEFAULT_SENSOR_WIDTH)?;
        camera.look_at(position - Vector3::z(), Vector3::y())?;

        Ok(camera)
    }

    /// Sets the horizontal sensor extent; the vertical one follows the
    /// aspect ratio of the resolution.
    pub fn with_sensor_width(mut self, width: f64) -> Result<Self> {
        self.set_sensor_width(width)?;
        Ok(self)
    }

    pub fn with_depth(mut self, depth: f64) -> Result<Self> {
        if depth <= 0.0 {
            return Err(self.invalid(format!("depth must be positive, got {}", depth)));
        }

        self.depth = depth;
        Ok(self)
    }

    pub fn with_depth_of_field(mut self, depth_of_field: DepthOfField) -> Result<Self> {
        if depth_of_field.radius < 0.0 || depth_of_field.focus <= 0.0 {
            return Err(self.invalid(format!(
                "depth of field needs a non-negative radius and a positive focus, got {:?}",
                depth_of_field
            )));
        }

        self.depth_of_field = Some(depth_of_field);
        Ok(self)
    }

    /// Rebuilds the camera frame so that it faces `target`.
    ///
    /// Fails when `target` is the camera position or when `up` is parallel
    /// to the viewing direction. The camera is left unchanged on failure.
    pub fn look_at(&mut self, target: Point3<f64>, up: Vector3<f64>) -> Result<()> {
        let view = (self.position - target).checked_normalize()?;
        let side = up.cross(&view).checked_normalize()?;

        self.up = view.cross(&side);
        self.side = side;
        self.view = view;

        Ok(())
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_position(&self) -> Point3<f64> {
        self.position
    }

    pub fn get_view(&self) -> Vector3<f64> {
        self.view
    }

    pub fn get_resolution(&self) -> (u32, u32) {
        self.resolution
    }

    pub fn get_width(&self) -> u32 {
        self.resolution.0
    }

    pub fn get_height(&self) -> u32 {
        self.resolution.1
    }

    /// World-space point on the image plane for pixel coordinates `(x, y)`.
    /// `(0, 0)` is the top-left corner of the sensor.
    pub fn pixel_position(&self, x: f64, y: f64) -> Point3<f64> {
        let u = x / f64::from(self.resolution.0);
        let v = y / f64::from(self.resolution.1);

        let image_center = self.position - self.view * self.depth;
        let origin = image_center - self.side * (self.sensor.x / 2.0) + self.up * (self.sensor.y / 2.0);

        origin + self.side * (u * self.sensor.x) - self.up * (v * self.sensor.y)
    }

    pub fn primary_ray(&self, x: f64, y: f64) -> Result<Ray> {
        self.primary_ray_with_rng(x, y, &mut thread_rng())
    }

    /// Same as [`Camera::primary_ray`] with an explicit source for the lens
    /// jitter.
    pub fn primary_ray_with_rng<R: Rng>(&self, x: f64, y: f64, rng: &mut R) -> Result<Ray> {
        let direction = (self.pixel_position(x, y) - self.position).checked_normalize()?;

        match self.depth_of_field {
            Some(DepthOfField { radius, focus }) if radius > 0.0 => {
                let offset_side = rng.gen_range(-radius..=radius);
                let offset_up = rng.gen_range(-radius..=radius);

                let origin = self.position + self.side * offset_side + self.up * offset_up;
                let focal_point = self.position + direction * focus;
                let direction = (focal_point - origin).checked_normalize()?;

                Ok(Ray::new(origin, direction))
            }
            _ => Ok(Ray::new(self.position, direction)),
        }
    }

    fn set_sensor_width(&mut self, width: f64) -> Result<()> {
        if width <= 0.0 {
            return Err(self.invalid(format!("sensor width must be positive, got {}", width)));
        }

        let (x_max, y_max) = self.resolution;
        self.sensor = Vector2d::new(width, f64::from(y_max) * width / f64::from(x_max));
        Ok(())
    }

    fn invalid(&self, reason: String) -> RenderError {
        RenderError::InvalidParameter {
            name: self.name.clone(),
            reason,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use more_asserts::{assert_gt, assert_le, assert_lt};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const PRECISION: f64 = 1e-12;

    fn camera(resolution: (u32, u32)) -> Camera {
        Camera::new("main", Point3::new(0.0, 0.0, 5.0), resolution).unwrap()
    }

    #[test]
    fn it_uses_default_settings() {
        let camera = camera((640, 480));

        assert_eq!(camera.get_view(), Vector3::z());
        assert_eq!(camera.sensor, Vector2d::new(1.0, 0.75));
        assert_eq!(camera.depth, 3.0);
        assert_eq!(camera.pixel_position(320.0, 240.0), Point3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn it_rejects_an_empty_resolution() {
        assert!(matches!(
            Camera::new("empty", Point3::origin(), (0, 10)),
            Err(RenderError::InvalidParameter { .. })
        ));
        assert!(Camera::new("empty", Point3::origin(), (10, 0)).is_err());
    }

    #[test]
    fn it_maps_corner_pixels_to_opposite_corners() {
        let camera = camera((4, 4));

        let first = camera.primary_ray(0.0, 0.0).unwrap();
        let last = camera.primary_ray(3.0, 3.0).unwrap();

        assert_eq!(first.origin, camera.get_position());
        assert_lt!(first.direction.x, 0.0);
        assert_gt!(first.direction.y, 0.0);
        assert_gt!(last.direction.x, 0.0);
        assert_lt!(last.direction.y, 0.0);
        assert_le!((first.direction.norm() - 1.0).abs(), PRECISION);

        assert_eq!(camera.pixel_position(0.0, 0.0), Point3::new(-0.5, 0.5, 2.0));
    }

    #[test]
    fn it_looks_through_the_image_center() {
        let mut camera = camera((3, 2));
        camera
            .look_at(Point3::new(1.0, 2.0, -3.0), Vector3::y())
            .unwrap();

        let ray = camera.primary_ray(1.5, 1.0).unwrap();
        assert_le!((ray.direction + camera.get_view()).norm(), PRECISION);

        let expected = (Point3::new(1.0, 2.0, -3.0) - camera.get_position()).normalize();
        assert_le!((ray.direction - expected).norm(), PRECISION);
    }

    #[test]
    fn it_builds_an_orthonormal_frame() {
        let mut camera = camera((10, 10));
        camera
            .look_at(Point3::new(3.0, -1.0, 2.0), Vector3::new(0.0, 2.0, 0.0))
            .unwrap();

        for axis in &[camera.side, camera.up, camera.view] {
            assert_le!((axis.norm() - 1.0).abs(), PRECISION);
        }
        assert_le!(camera.side.dot(&camera.up).abs(), PRECISION);
        assert_le!(camera.side.dot(&camera.view).abs(), PRECISION);
        assert_le!(camera.up.dot(&camera.view).abs(), PRECISION);
    }

    #[test]
    fn it_rejects_degenerate_orientations() {
        let mut camera = camera((10, 10));
        let before = camera.clone();

        assert!(matches!(
            camera.look_at(camera.get_position(), Vector3::y()),
            Err(RenderError::DegenerateVector)
        ));
        assert!(matches!(
            camera.look_at(Point3::new(0.0, 10.0, 5.0), Vector3::y()),
            Err(RenderError::DegenerateVector)
        ));
        assert_eq!(camera, before);
    }

    #[test]
    fn it_validates_settings() {
        assert!(camera((10, 10)).with_depth(0.0).is_err());
        assert!(camera((10, 10)).with_sensor_width(-1.0).is_err());
        assert!(camera((10, 10))
            .with_depth_of_field(DepthOfField {
                radius: 0.1,
                focus: 0.0
            })
            .is_err());

        let camera = camera((10, 20)).with_sensor_width(2.0).unwrap();
        assert_eq!(camera.sensor, Vector2d::new(2.0, 4.0));
    }

    #[test]
    fn zero_aperture_matches_the_pinhole_ray() {
        let pinhole = camera((8, 8));
        let lens = pinhole
            .clone()
            .with_depth_of_field(DepthOfField {
                radius: 0.0,
                focus: 5.0,
            })
            .unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        for &(x, y) in &[(0.0, 0.0), (4.0, 4.0), (7.0, 1.0)] {
            assert_eq!(
                lens.primary_ray_with_rng(x, y, &mut rng).unwrap(),
                pinhole.primary_ray(x, y).unwrap()
            );
        }
    }

    #[test]
    fn depth_of_field_rays_converge_on_the_focal_point() {
        let pinhole = camera((8, 8));
        let focus = 4.0;
        let lens = pinhole
            .clone()
            .with_depth_of_field(DepthOfField { radius: 0.2, focus })
            .unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..16 {
            let reference = pinhole.primary_ray(2.0, 5.0).unwrap();
            let ray = lens.primary_ray_with_rng(2.0, 5.0, &mut rng).unwrap();
            let focal_point = reference.at(focus);

            let offset = ray.origin - pinhole.get_position();
            assert_le!(offset.x.abs(), 0.2 + PRECISION);
            assert_le!(offset.y.abs(), 0.2 + PRECISION);
            assert_le!(offset.z.abs(), PRECISION);

            let to_focus = (focal_point - ray.origin).normalize();
            assert_le!((ray.direction - to_focus).norm(), PRECISION);
        }
    }
}
