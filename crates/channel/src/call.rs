use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ChannelError;

/// A single named invocation received over a method channel.
///
/// Mirrors the envelope the framework's JSON method codec produces:
/// `{"method": "...", "args": ...}`. The record is built once per incoming
/// call, consumed by dispatch, and discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
  /// Name of the invoked method
  pub method: String,

  /// Optional untyped argument payload
  #[serde(rename = "args", default, skip_serializing_if = "Option::is_none")]
  pub arguments: Option<Value>,
}

impl MethodCall {
  /// Create a call with no arguments
  pub fn new(method: impl Into<String>) -> Self {
    Self {
      method: method.into(),
      arguments: None,
    }
  }

  /// Create a call carrying an argument payload
  pub fn with_arguments(method: impl Into<String>, arguments: Value) -> Self {
    Self {
      method: method.into(),
      arguments: Some(arguments),
    }
  }

  /// Parse a call from its JSON envelope
  pub fn from_json(envelope: &str) -> Result<Self, ChannelError> {
    serde_json::from_str(envelope).map_err(ChannelError::Decode)
  }

  /// Serialize the call to its JSON envelope
  pub fn to_json(&self) -> Result<String, ChannelError> {
    serde_json::to_string(self).map_err(ChannelError::Encode)
  }
}
