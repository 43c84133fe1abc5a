use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ChannelError;

/// Outcome of dispatching a method call.
///
/// `NotImplemented` is a defined protocol response meaning the endpoint does
/// not answer to the invoked method. It is not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum MethodResult {
  /// The method was handled; carries the result value
  Success(Value),

  /// No handler answers to the invoked method
  NotImplemented,
}

impl MethodResult {
  /// Wrap a string result value
  pub fn success(value: impl Into<String>) -> Self {
    Self::Success(Value::String(value.into()))
  }

  /// True when this is the not-implemented sentinel
  pub fn is_not_implemented(&self) -> bool {
    matches!(self, Self::NotImplemented)
  }

  /// Returns the success value, if any
  pub fn value(&self) -> Option<&Value> {
    match self {
      Self::Success(value) => Some(value),
      Self::NotImplemented => None,
    }
  }

  /// Serialize the result to its JSON envelope
  pub fn to_json(&self) -> Result<String, ChannelError> {
    serde_json::to_string(self).map_err(ChannelError::Encode)
  }
}
