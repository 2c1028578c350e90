//! Logic Module - Scoring Pipeline
//!
//! - `features/` - URL feature extraction and the numeric model layout
//! - `heuristics/` - simple and advanced rule sets
//! - `model/` - classifier contract, backends and the classifier adapter
//! - `risk` - aggregator producing the side-by-side report
//! - `dataset/` - labeled feature export for offline training

pub mod features;
pub mod heuristics;
pub mod model;
pub mod risk;
pub mod dataset;
