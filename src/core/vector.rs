use crate::error::{RenderError, Result};
use nalgebra::{Vector2, Vector3, Vector4};

pub type Vector2d = Vector2<f64>;
pub type Vector3d = Vector3<f64>;
pub type Vector4d = Vector4<f64>;

/// Normalization that refuses zero-length vectors instead of producing NaNs.
///
/// The check is an exact zero-magnitude test shared by every vector size.
pub trait CheckedNormalize: Sized {
    fn checked_normalize(&self) -> Result<Self>;

    fn checked_normalize_mut(&mut self) -> Result<()> {
        *self = self.checked_normalize()?;
        Ok(())
    }
}

macro_rules! impl_checked_normalize {
    ($($vector:ty),*) => {
        $(
            impl CheckedNormalize for $vector {
                fn checked_normalize(&self) -> Result<Self> {
                    self.try_normalize(0.0).ok_or(RenderError::DegenerateVector)
                }
            }
        )*
    };
}

impl_checked_normalize!(Vector2d, Vector3d, Vector4d);

#[cfg(test)]
mod test {
    use super::*;
    use more_asserts::assert_le;

    const PRECISION: f64 = 1e-12;

    #[test]
    fn it_rejects_zero_vectors_of_every_size() {
        assert!(matches!(
            Vector2d::zeros().checked_normalize(),
            Err(RenderError::DegenerateVector)
        ));
        assert!(matches!(
            Vector3d::zeros().checked_normalize(),
            Err(RenderError::DegenerateVector)
        ));
        assert!(matches!(
            Vector4d::zeros().checked_normalize(),
            Err(RenderError::DegenerateVector)
        ));
    }

    #[test]
    fn it_normalizes_tiny_but_nonzero_vectors() {
        let v = Vector3d::new(1e-150, 0.0, 0.0).checked_normalize().unwrap();
        assert_le!((v - Vector3d::x()).norm(), PRECISION);
    }

    #[test]
    fn it_normalizes_in_place() {
        let mut v = Vector4d::new(2.0, 0.0, 0.0, 0.0);
        v.checked_normalize_mut().unwrap();
        assert_eq!(v, Vector4d::new(1.0, 0.0, 0.0, 0.0));

        let mut v = Vector2d::new(3.0, 4.0);
        v.checked_normalize_mut().unwrap();
        assert_le!((v - Vector2d::new(0.6, 0.8)).norm(), PRECISION);
    }

    #[test]
    fn it_leaves_the_vector_untouched_when_normalizing_fails() {
        let mut v = Vector3d::zeros();
        assert!(v.checked_normalize_mut().is_err());
        assert_eq!(v, Vector3d::zeros());
    }

    #[test]
    fn normalize_is_idempotent() {
        let vectors = [
            Vector3d::new(1.0, 2.0, 3.0),
            Vector3d::new(-0.1, -0.2, -10.0),
            Vector3d::new(1e6, -3.0, 0.5),
        ];

        for v in &vectors {
            let once = v.checked_normalize().unwrap();
            let twice = once.checked_normalize().unwrap();

            assert_le!((once.norm() - 1.0).abs(), PRECISION);
            assert_le!((twice - once).norm(), PRECISION);
        }
    }

    #[test]
    fn it_supports_component_wise_operations() {
        let a = Vector3d::new(1.0, 2.0, 3.0);
        let b = Vector3d::new(2.0, 4.0, 6.0);

        assert_eq!(a.component_mul(&b), Vector3d::new(2.0, 8.0, 18.0));
        assert_eq!(b.component_div(&a), Vector3d::repeat(2.0));
        assert_eq!(a.cross(&b), Vector3d::zeros());
        assert_eq!(Vector3d::x().cross(&Vector3d::y()), Vector3d::z());
        assert_eq!(a.dot(&b), 28.0);
    }
}
