//! Core logic - record generation, CSV output and orchestration.

/// Incremental CSV sink and the value normalization policy
pub mod csv_sink;
/// Dataset orchestration
pub mod dataset;
/// Record generators
pub mod generators;
