//! **warren-core** — grid-graph maze model (core types).
//!
//! This crate provides the foundational types used across the *warren*
//! ecosystem: row/column geometry and the [`GridGraph`] node arena whose
//! connectivity is carved by the generator crate and queried by the search
//! crate.

pub mod coord;
pub mod graph;

pub use coord::Coord;
pub use graph::{GridGraph, Walls};
