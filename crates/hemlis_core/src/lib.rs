//! Core transcoding logic for hemlis.
//!
//! Plaintext is mapped to Morse code, and Morse code to a payload made only
//! of whitespace characters, so a message can hide inside ordinary text.
//! The mapping is public and fixed; this is concealment, not encryption.

pub mod codec;
pub mod logging;
pub mod model;
pub mod scan;
pub mod service;

pub use codec::whitespace::MARKER;
pub use logging::{default_log_level, init_logging, logging_status, LogDestination};
pub use model::morse::{Fallback, Transcoded};
pub use scan::embedded::{
    extract_embedded, extract_from_path, resolve_messages, ScanError, ScanResult,
};
pub use service::pipeline::{
    decode, decode_report, encode, encode_report, self_check, transcode, transcode_report,
    Direction, SelfCheckReport,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
