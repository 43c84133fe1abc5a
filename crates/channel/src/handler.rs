use tracing::debug;

use crate::call::MethodCall;
use crate::result::MethodResult;

/// Dispatch callback implemented by a plugin.
///
/// Implementations map a method name to a result and nothing more: no
/// retries, no suspension points, no state retained between calls. Unknown
/// method names must come back as `MethodResult::NotImplemented`.
pub trait MethodCallHandler {
  /// Handle one method call
  fn on_method_call(&self, call: &MethodCall) -> MethodResult;
}

/// A named channel bound to its handler.
///
/// Stands in for the framework's channel registration: whoever owns the
/// transport decodes incoming envelopes and feeds the calls through
/// `invoke`.
#[derive(Debug)]
pub struct MethodChannel<H> {
  name: String,
  handler: H,
}

impl<H: MethodCallHandler> MethodChannel<H> {
  /// Bind a handler to a channel name
  pub fn new(name: impl Into<String>, handler: H) -> Self {
    Self {
      name: name.into(),
      handler,
    }
  }

  /// Returns the channel name
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Dispatch one call to the bound handler
  pub fn invoke(&self, call: &MethodCall) -> MethodResult {
    let result = self.handler.on_method_call(call);
    debug!(
      channel = %self.name,
      method = %call.method,
      not_implemented = result.is_not_implemented(),
      "dispatched method call"
    );
    result
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Echoes the method name back; anything called "boom" is unanswered.
  struct EchoHandler;

  impl MethodCallHandler for EchoHandler {
    fn on_method_call(&self, call: &MethodCall) -> MethodResult {
      match call.method.as_str() {
        "boom" => MethodResult::NotImplemented,
        name => MethodResult::success(name),
      }
    }
  }

  #[test]
  fn invoke_delegates_to_handler() {
    let channel = MethodChannel::new("test_channel", EchoHandler);
    let result = channel.invoke(&MethodCall::new("hello"));
    assert_eq!(result, MethodResult::success("hello"));
  }

  #[test]
  fn invoke_passes_sentinel_through() {
    let channel = MethodChannel::new("test_channel", EchoHandler);
    assert!(channel.invoke(&MethodCall::new("boom")).is_not_implemented());
  }

  #[test]
  fn name_is_preserved() {
    let channel = MethodChannel::new("test_channel", EchoHandler);
    assert_eq!(channel.name(), "test_channel");
  }
}
