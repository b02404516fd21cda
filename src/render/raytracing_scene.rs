use super::{Camera, RenderOptions};
use crate::core::Color;
use crate::error::Result;
use crate::lights::Light;
use crate::primitives::Shape;
use crate::ray_intersection::{Intersectable, Intersection, Ray};
use image::{ImageFormat, RgbImage};
use indicatif::{ProgressBar, ProgressStyle};
use itertools::iproduct;
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Pixels rendered for one camera.
#[derive(Debug)]
pub struct RenderedImage {
    pub camera_name: String,
    pub image: RgbImage,
}

impl RenderedImage {
    /// Output file name for this camera, e.g. `main-render.png`.
    pub fn file_name(&self, base_name: &str) -> String {
        format!("{}-{}", self.camera_name, base_name)
    }

    /// Writes the image as PNG into `dir`, whatever the extension of
    /// `base_name`.
    pub fn save(&self, dir: &Path, base_name: &str) -> Result<PathBuf> {
        let path = dir.join(self.file_name(base_name));
        self.image.save_with_format(&path, ImageFormat::Png)?;
        Ok(path)
    }
}

#[derive(Debug)]
pub struct RaytracingScene {
    pub render_options: RenderOptions,
    cameras: Vec<Camera>,
    shapes: Vec<Shape>,
    lights: Vec<Light>,
}

impl RaytracingScene {
    pub fn new(
        render_options: RenderOptions,
        cameras: Vec<Camera>,
        shapes: Vec<Shape>,
        lights: Vec<Light>,
    ) -> Self {
        Self {
            render_options,
            cameras,
            shapes,
            lights,
        }
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    pub fn get_num_objects(&self) -> usize {
        self.shapes.len()
    }

    pub fn get_num_lights(&self) -> usize {
        self.lights.len()
    }

    // Shapes earlier in the list win exact ties.
    fn raycast(&self, ray: &Ray) -> Option<Intersection> {
        let mut nearest: Option<Intersection> = None;

        for shape in &self.shapes {
            if let Some(intersection) = shape.intersect(ray) {
                let is_nearer = nearest
                    .as_ref()
                    .map_or(true, |nearest| intersection.distance < nearest.distance);
                if is_nearer {
                    nearest = Some(intersection);
                }
            }
        }

        nearest
    }

    pub fn get_color(&self, ray: &Ray) -> Result<Color> {
        match self.raycast(ray) {
            Some(intersection) => intersection
                .object
                .shade(ray, &intersection, &self.lights),
            None => Ok(self.render_options.background),
        }
    }

    pub fn screen_raycast(&self, camera: &Camera, x: u32, y: u32) -> Result<Color> {
        let ray = camera.primary_ray(f64::from(x), f64::from(y))?;
        self.get_color(&ray)
    }

    fn build_progress_bar(camera: &Camera) -> ProgressBar {
        let width = camera.get_width();
        let height = camera.get_height();

        let progress = ProgressBar::new(u64::from(width) * u64::from(height));
        progress.set_draw_delta((u64::from(width) * u64::from(height) / 200).max(1));
        progress.set_style(ProgressStyle::default_bar().template(&format!(
            "{} {} {}",
            "{prefix} [{elapsed_precise} elapsed] [{eta_precise} left]",
            "{bar:40}",
            "{pos}/{len} pixels",
        )));
        progress.set_prefix(camera.get_name().to_string());

        progress
    }

    /// Renders a single camera. The first error aborts the camera and no
    /// partial image is returned.
    pub fn render_camera(&self, camera: &Camera, use_progress: bool) -> Result<RgbImage> {
        let (width, height) = camera.get_resolution();
        let mut image = RgbImage::new(width, height);

        let progress = if use_progress {
            Self::build_progress_bar(camera)
        } else {
            ProgressBar::hidden()
        };

        for (y, x) in iproduct!(0..height, 0..width) {
            let color = match self.screen_raycast(camera, x, y) {
                Ok(color) => color,
                Err(err) => {
                    progress.abandon();
                    return Err(err);
                }
            };

            image.put_pixel(x, y, color.to_rgb8());
            progress.inc(1);
        }
        progress.finish();

        Ok(image)
    }

    /// Renders every camera in order and hands each finished image to
    /// `on_rendered` before starting the next camera. Stops at the first
    /// error; images already handed over are kept by the caller.
    pub fn render_each<F>(&self, use_progress: bool, mut on_rendered: F) -> Result<()>
    where
        F: FnMut(RenderedImage) -> Result<()>,
    {
        for camera in &self.cameras {
            let now = Instant::now();
            let image = self.render_camera(camera, use_progress)?;
            info!(
                "Rendered camera {} ({}x{}) in {:.3?}",
                camera.get_name(),
                camera.get_width(),
                camera.get_height(),
                now.elapsed()
            );

            on_rendered(RenderedImage {
                camera_name: camera.get_name().to_string(),
                image,
            })?;
        }

        Ok(())
    }

    pub fn render(&self, use_progress: bool) -> Result<Vec<RenderedImage>> {
        let mut rendered = Vec::with_capacity(self.cameras.len());
        self.render_each(use_progress, |image| {
            rendered.push(image);
            Ok(())
        })?;

        Ok(rendered)
    }
}
