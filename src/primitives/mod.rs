mod plane;
mod sphere;

use crate::core::{CheckedNormalize, Color, Material};
use crate::error::Result;
use crate::lights::Light;
use crate::ray_intersection::{Intersectable, Intersection, Ray};
use crate::utils;
use nalgebra::{Point3, Vector3};

pub use plane::*;
pub use sphere::*;

pub(crate) trait Primitive {
    /// Distance along `ray` to the nearest non-negative hit, if any.
    fn ray_distance(&self, ray: &Ray) -> Option<f64>;

    /// Unit outward normal at a point on the surface.
    fn surface_normal(&self, hit_point: &Point3<f64>) -> Result<Vector3<f64>>;

    fn get_material(&self) -> &Material;
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

impl Shape {
    fn primitive(&self) -> &dyn Primitive {
        match self {
            Shape::Sphere(sphere) => sphere,
            Shape::Plane(plane) => plane,
        }
    }

    pub fn get_material(&self) -> &Material {
        self.primitive().get_material()
    }

    pub fn surface_normal(&self, hit_point: &Point3<f64>) -> Result<Vector3<f64>> {
        self.primitive().surface_normal(hit_point)
    }

    /// Sums the contribution of every light at the intersection.
    pub fn shade(&self, ray: &Ray, intersection: &Intersection, lights: &[Light]) -> Result<Color> {
        let hit_point = intersection.get_hit_point();
        let normal = self.surface_normal(&hit_point)?;
        let to_camera = (ray.origin - hit_point).checked_normalize()?;
        let camera_angle = normal.dot(&to_camera);
        let material = self.get_material();

        let mut color = Color::black();
        for light in lights {
            let light_dir = light.get_direction(&hit_point);
            let light_angle = normal.dot(&light_dir);
            let reflect_angle = utils::reflect(&-light_dir, &normal).dot(&to_camera);

            color += material.shade(light_angle, camera_angle, reflect_angle, light);
        }

        Ok(color)
    }
}

impl Intersectable for Shape {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        self.primitive()
            .ray_distance(ray)
            .map(|distance| Intersection::new(self, ray, distance))
    }
}
