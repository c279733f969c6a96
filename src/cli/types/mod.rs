//! Type-safe wrappers for balldontlie identifiers.

pub mod ids;
