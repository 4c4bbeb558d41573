//! Request files for the `geospace` binary.
//!
//! - [`Request`]: one intersection job, usually read from a YAML file
//! - [`ModelChoice`]: which disc models a job runs

mod model;
mod request;

pub use model::ModelChoice;
pub use request::Request;
