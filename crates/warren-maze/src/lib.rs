//! Maze generation for warren grid graphs.
//!
//! Turns a freshly built, fully walled
//! [`GridGraph`](warren_core::GridGraph) into a connected, partly-looped
//! maze in two passes: a randomized depth-first spanning-tree carve
//! followed by a braiding pass that adds loop edges.

pub mod mazegen;

pub use mazegen::{braid, carve_tree, generate};
