pub mod bounding_box;
pub mod clothoid;
pub mod interval;
pub mod plane;
pub mod triangle;

pub use bounding_box::{
    BoundingBox2, BoundingBox2d, BoundingBox2i, BoundingBox3, BoundingBox3d, BoundingBox3i,
};
pub use interval::Interval;
pub use plane::{Plane, PlaneSide};
pub use triangle::{Barycentric, Triangle};
