//! Test fixtures for cluster-router.
//!
//! Real Las Vegas / Henderson coordinates for realistic pipeline runs.

#![allow(dead_code)]

pub mod las_vegas_stops;

pub use las_vegas_stops::*;
