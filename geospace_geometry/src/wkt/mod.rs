//! Well-known text, the protocol spoken with the geometry engine.
//!
//! - [`PolygonBuilder`] writes closed `POLYGON ((lat lng, ...))` text from open point sequences
//! - [`reader`] splits WKT envelopes and reads coordinate lists
//! - [`decode`] interprets a classified engine result as coordinate sequences

mod builder;
mod decode;
pub mod reader;

pub use builder::*;
pub use decode::*;
