mod color;
mod vector;

pub use color::*;
pub use vector::*;
