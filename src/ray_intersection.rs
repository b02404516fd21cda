use crate::primitives::Shape;
use nalgebra::{Point3, Vector3};

pub trait Intersectable {
    fn intersect(&self, ray: &Ray) -> Option<Intersection>;
}

/// Half-line starting at `origin`. Consumers expect `direction` to be unit
/// length; nothing here enforces it.
#[derive(Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3<f64>,
    pub direction: Vector3<f64>,
}

impl Ray {
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, distance: f64) -> Point3<f64> {
        self.origin + self.direction * distance
    }
}

/// Result of a successful intersection test. Shading reads everything it
/// needs from here, so shapes never hold per-ray state.
#[derive(Debug)]
pub struct Intersection<'a> {
    pub object: &'a Shape,
    pub distance: f64,
    hit_point: Point3<f64>,
}

impl<'a> Intersection<'a> {
    pub fn new(object: &'a Shape, ray: &Ray, distance: f64) -> Self {
        Self {
            object,
            distance,
            hit_point: ray.at(distance),
        }
    }

    pub fn get_hit_point(&self) -> Point3<f64> {
        self.hit_point
    }
}
