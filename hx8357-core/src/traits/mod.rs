//! Hardware abstraction traits
//!
//! [`Gram`] is the seam between the drawing code and a controller driver:
//! a window of graphics RAM plus a stream of pixels into it.

pub mod gram;

pub use gram::{Gram, GramExt};
