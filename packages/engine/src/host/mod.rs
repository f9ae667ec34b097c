//! Browser wiring for a plain page: one canvas, window events, rAF loop.

mod browser;

pub use browser::{mount, mount_field};
