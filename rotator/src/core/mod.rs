//! Deterministic, pure rotation logic.
//!
//! Core modules are free of I/O and logging. They operate on borrowed slices
//! and return freshly allocated outputs.

pub mod rotation;
