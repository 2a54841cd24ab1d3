pub mod aabb;
pub mod linsys;

pub use glam::{dvec2, DMat3, DVec2, DVec3};
pub use aabb::Aabb2;
pub use linsys::{Boundary, SplineSystem};

pub type Point2 = DVec2;
pub type Vector2 = DVec2;
