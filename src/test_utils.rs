//! Shared test utilities for `pharma-synth`.
//!
//! Provides a seeded RNG, a fixed clock and throwaway output directories so
//! generator and sink tests are reproducible.

#![allow(clippy::expect_used)]

use chrono::{NaiveDate, NaiveDateTime};
use rand::{SeedableRng, rngs::StdRng};
use std::path::Path;
use tempfile::TempDir;

/// Seed shared by every test RNG.
pub const TEST_SEED: u64 = 0x5EED_F00D;

/// Returns an RNG seeded with [`TEST_SEED`].
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(TEST_SEED)
}

/// Returns the fixed "now" used by tests: 2024-03-15 10:30:00.
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .and_then(|date| date.and_hms_opt(10, 30, 0))
        .expect("valid fixed timestamp")
}

/// Creates a temporary directory removed when the handle drops.
pub fn temp_output_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Counts the data rows of a CSV file, excluding the header.
pub fn data_rows(path: &Path) -> usize {
    let mut reader = csv::Reader::from_path(path).expect("open csv");
    reader.records().map(|record| record.expect("read row")).count()
}
