pub mod destinations;
pub mod landing;

pub use destinations::*;
pub use landing::*;
