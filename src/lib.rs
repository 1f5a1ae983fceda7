//! A ray value type on top of `glam`: an origin, a direction, and the handful of
//! operations needed to move it between coordinate systems.

pub mod geometry;
pub mod vecmath;

pub use geometry::Ray;
