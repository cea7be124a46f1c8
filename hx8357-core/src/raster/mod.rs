//! Rasterization
//!
//! Shapes are produced as point iterators so they can be checked without a
//! panel; [`GramExt`](crate::traits::GramExt) turns them into pixel writes.

pub mod circle;
pub mod line;

pub use circle::{octants, CircleStep, CircleSteps};
pub use line::Line;
