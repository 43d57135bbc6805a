mod color;
mod misc;
mod vec;

pub use color::RGBColor;
pub use misc::Ray;
pub use vec::Vec3;
