use super::Primitive;
use crate::core::{CheckedNormalize, Material};
use crate::error::Result;
use crate::ray_intersection::Ray;
use crate::utils::quadratic;
use itertools::izip;
use nalgebra::{Point3, Vector3};

/// Axis-aligned quadric surface. With unit weights and equal scales this is
/// a sphere; unequal scales give an ellipsoid.
///
/// A point p lies on the surface when
/// `sum(weights[i] * (axes[i] . (p - center) / scales[i])^2) + constant = 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Point3<f64>,
    axes: [Vector3<f64>; 3],
    scales: [f64; 3],
    weights: [f64; 3],
    constant: f64,
    material: Material,
}

impl Sphere {
    pub fn new(center: Point3<f64>, radius: f64, material: Material) -> Self {
        Self::ellipsoid(center, Vector3::repeat(radius), material)
    }

    pub fn ellipsoid(center: Point3<f64>, scales: Vector3<f64>, material: Material) -> Self {
        Self {
            center,
            axes: [Vector3::x(), Vector3::y(), Vector3::z()],
            scales: [scales.x, scales.y, scales.z],
            weights: [1.0; 3],
            constant: -1.0,
            material,
        }
    }
}

impl Primitive for Sphere {
    fn ray_distance(&self, ray: &Ray) -> Option<f64> {
        let offset = ray.origin - self.center;

        let (mut a, mut b, mut c) = (0.0, 0.0, self.constant);
        for (axis, scale, weight) in izip!(&self.axes, &self.scales, &self.weights) {
            let d = axis.dot(&ray.direction);
            let o = axis.dot(&offset);

            a += weight * (d / scale).powi(2);
            b += weight * 2.0 * d * o / scale.powi(2);
            c += weight * (o / scale).powi(2);
        }

        let (t0, t1) = quadratic(a, b, c)?;
        let t = if t0 < 0.0 { t1 } else { t0 };

        if t < 0.0 {
            return None;
        }

        Some(t)
    }

    fn surface_normal(&self, hit_point: &Point3<f64>) -> Result<Vector3<f64>> {
        let offset = hit_point - self.center;
        let gradient = izip!(&self.axes, &self.scales, &self.weights).fold(
            Vector3::zeros(),
            |gradient, (axis, scale, weight)| {
                gradient + axis * (2.0 * weight * axis.dot(&offset) / scale.powi(2))
            },
        );

        gradient.checked_normalize()
    }

    fn get_material(&self) -> &Material {
        &self.material
    }
}
