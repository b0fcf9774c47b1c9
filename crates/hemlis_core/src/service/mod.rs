//! Use-case entry points over the codec stages.
//!
//! # Responsibility
//! - Compose codecs into the encode/decode pipeline callers use.
//! - Keep CLI layers decoupled from stage ordering details.

pub mod pipeline;
