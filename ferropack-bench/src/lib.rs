//! # FerroPack Bench
//!
//! Benchmarking utilities for FerroPack performance testing.

pub mod fixtures;
