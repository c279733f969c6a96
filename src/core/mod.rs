//! Core utilities for the hoops-stats client
//!
//! - `config`: API location and client identity
//! - `format`: display formatting for stat lines

pub mod config;
pub mod format;

pub use config::{ClientConfig, BDL_BASE_URL};
pub use format::{format_percent, format_stat};
