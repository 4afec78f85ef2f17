pub mod color;
pub mod delta;
pub mod image;
pub mod info;
pub mod observation;

pub use color::*;
pub use delta::*;
pub use image::*;
pub use info::*;
pub use observation::*;
