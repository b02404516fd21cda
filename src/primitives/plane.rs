use super::Primitive;
use crate::core::{CheckedNormalize, Material};
use crate::error::Result;
use crate::ray_intersection::Ray;
use nalgebra::{Point3, Vector3};

#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    point: Point3<f64>,
    // in-plane axes followed by the unit normal
    axes: [Vector3<f64>; 3],
    material: Material,
}

impl Plane {
    pub fn new(point: Point3<f64>, normal: Vector3<f64>, material: Material) -> Result<Self> {
        let normal = normal.checked_normalize()?;

        let helper = if normal.x.abs() > 1.0 - f64::EPSILON {
            Vector3::y()
        } else {
            Vector3::x()
        };
        let x_axis = normal.cross(&helper);
        let y_axis = x_axis.cross(&normal).checked_normalize()?;
        let x_axis = normal.cross(&y_axis).checked_normalize()?;

        Ok(Self {
            point,
            axes: [x_axis, y_axis, normal],
            material,
        })
    }

    pub fn get_normal(&self) -> Vector3<f64> {
        self.axes[2]
    }

    pub fn get_axes(&self) -> &[Vector3<f64>; 3] {
        &self.axes
    }
}

impl Primitive for Plane {
    fn ray_distance(&self, ray: &Ray) -> Option<f64> {
        let normal = self.get_normal();
        let n_dot_d = normal.dot(&ray.direction);

        if n_dot_d.abs() < f64::EPSILON {
            return None;
        }

        let distance = normal.dot(&(self.point - ray.origin)) / n_dot_d;
        if distance >= 0.0 {
            return Some(distance);
        }

        None
    }

    fn surface_normal(&self, _hit_point: &Point3<f64>) -> Result<Vector3<f64>> {
        Ok(self.get_normal())
    }

    fn get_material(&self) -> &Material {
        &self.material
    }
}
