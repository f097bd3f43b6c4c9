//! Numerical primitives for RadMap.

pub mod delaunay;
pub mod interp;
pub mod scatter;
pub mod stats;
