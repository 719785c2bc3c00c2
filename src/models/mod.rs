pub mod dns;
pub mod image;
pub mod task;

pub use dns::*;
pub use image::*;
pub use task::*;
