//! Core tree walking and playlist aggregation
//!
//! This module contains:
//! - The recursive directory walker that classifies entries
//! - The multilevel aggregation policy deciding which media bubbles up
//!   into ancestor playlists

mod walker;

pub use walker::{walk, WalkOptions, WalkOutcome};
