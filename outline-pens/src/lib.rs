//! Pens: consumers of streamed glyph outline commands.
//!
//! A [`Pen`] receives the commands that describe a glyph outline (move,
//! line, cubic and quadratic curves, close, end, and component references)
//! from a producer such as a glyph decoder, and does something with them:
//! records them, rasterizes them, writes them out, or transforms them and
//! hands them on.
//!
//! [`FilterPen`] is the building block for the last kind. On its own it
//! forwards every command unmodified to the pen it wraps; a [`PenFilter`]
//! overrides just the commands a transformation cares about.
//!
//! A `Vec<PenCommand<T>>` records everything drawn into it and can
//! [`replay`] it into another pen. With the `kurbo` feature (enabled by
//! default) `BezPathPen` builds a kurbo `BezPath`.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

#[cfg(feature = "kurbo")]
mod bez_path;
mod command;
#[cfg(feature = "kurbo")]
mod error;
mod filter;
mod pen;
mod point;
mod transform;


#[cfg(feature = "kurbo")]
pub use bez_path::{BezPathPen, Component};
pub use command::{replay, PenCommand};
#[cfg(feature = "kurbo")]
pub use error::PathError;
pub use filter::{FilterPen, Passthrough, PenFilter};
pub use pen::{NullPen, Pen};
pub use point::Point;
pub use transform::Transform;

#[cfg(feature = "kurbo")]
pub extern crate kurbo;
