mod color;
mod material;
mod vector;

pub use color::*;
pub use material::*;
pub use vector::*;
