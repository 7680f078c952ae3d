//! Sprite - one floating visual element
//!
//! The sprite stores its physics state in viewport coordinates (origin
//! top-left, units px and px/frame) and knows nothing about the DOM; the
//! scene facade owns the element it maps to.

mod sprite;
mod vec2;

pub use sprite::{force_strength, Sprite};
pub use vec2::Vec2;
