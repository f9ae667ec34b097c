//! Leaf helpers shared by the domain and simulation layers.

pub mod geometry;
pub mod random;
pub mod trail;
