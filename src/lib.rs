pub mod error;
pub mod geometry;
pub mod math;
pub mod numeric;

pub use error::{GeonumError, Result};
