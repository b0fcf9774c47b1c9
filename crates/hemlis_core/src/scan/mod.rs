//! Host-text scanning for embedded payloads.
//!
//! This is the only part of core that performs I/O, and it only reads.

pub mod embedded;
