//! Error types for twofin-channel

use thiserror::Error;

/// Errors that can occur when translating channel envelopes
#[derive(Debug, Error)]
pub enum ChannelError {
  /// The invocation envelope could not be parsed
  #[error("invalid invocation envelope: {0}")]
  Decode(#[source] serde_json::Error),

  /// The envelope could not be serialized
  #[error("failed to encode envelope: {0}")]
  Encode(#[source] serde_json::Error),
}
