//! Step definitions for task update scenarios.

pub mod world;
