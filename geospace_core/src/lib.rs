//! Core types and geodesy for geospace.
//!
//! This crate holds everything that does not depend on a geometry engine:
//! - [`GeoPoint`]: a latitude/longitude pair in decimal degrees
//! - [`GeospaceError`]: the error taxonomy shared by all geospace crates
//! - [`DiscOptions`]: precision settings threaded through disc generation
//! - [`geodesy`]: haversine and Vincenty solvers plus the disc generators built on them

pub mod config;
pub mod error;
pub mod geodesy;
pub mod types;

pub use config::*;
pub use error::*;
pub use geodesy::{DiscModel, generate_disc};
pub use types::*;
