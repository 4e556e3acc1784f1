pub mod derivative;
pub mod fresnel;
pub mod roots;

pub use derivative::{central, left, right, Stencil, StencilKind};
pub use fresnel::{dfresnel, fresnel};
pub use roots::{brent, SolverOptions};
