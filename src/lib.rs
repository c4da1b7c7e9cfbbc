//! Merit-order production planning for a heterogeneous power plant fleet.

#[cfg(feature = "api")]
pub mod api;
pub mod cli;
pub mod config;
pub mod io;
/// Log subscriber setup.
pub mod logging;
pub mod plan;
pub mod request;
