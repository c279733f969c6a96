//! Command implementations for the hoops-stats CLI

pub mod search;
pub mod stats;

#[cfg(test)]
mod tests;
