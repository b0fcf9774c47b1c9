//! The two composable transcoding stages.
//!
//! `morse` maps plaintext to Morse tokens; `whitespace` hides those tokens
//! as blank-rendering characters. See `service::pipeline` for composition.

pub mod morse;
pub mod whitespace;
