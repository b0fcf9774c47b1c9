//! Fixed symbol tables and Morse sequence vocabulary.
//!
//! # Responsibility
//! - Define the alphabet shared by every transcoding direction.
//! - Define the result shape that exposes lossy substitutions.
//!
//! # Invariants
//! - Tables are process-wide, immutable, and built at most once.

pub mod alphabet;
pub mod morse;
