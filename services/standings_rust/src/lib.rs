//! Standings Service Library
//!
//! Exposes configuration, the load/report pipeline and table rendering for testing.

pub mod config;
pub mod pipeline;
pub mod table;

pub use config::{Config, OutputFormat};
pub use pipeline::{load_points_entry, League};
