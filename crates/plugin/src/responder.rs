//! Method dispatch for the plugin's channel.

use twofin_channel::{MethodCall, MethodCallHandler, MethodChannel, MethodResult};
use twofin_platform::PlatformInfo;

/// Name of the method channel the plugin serves
pub const CHANNEL_NAME: &str = "two_finance_blockchain";

/// The one method this plugin answers to
pub const METHOD_GET_PLATFORM_VERSION: &str = "getPlatformVersion";

/// Responder for the two_finance_blockchain channel.
///
/// Stateless; each invocation is handled to completion and leaves nothing
/// behind for later calls to observe.
#[derive(Debug, Default, Clone, Copy)]
pub struct TwoFinancePlugin;

impl TwoFinancePlugin {
  /// Create the responder
  pub fn new() -> Self {
    Self
  }
}

impl MethodCallHandler for TwoFinancePlugin {
  fn on_method_call(&self, call: &MethodCall) -> MethodResult {
    // Match is exact and case-sensitive; arguments are accepted but unused
    match call.method.as_str() {
      METHOD_GET_PLATFORM_VERSION => {
        MethodResult::success(PlatformInfo::current().version_string())
      }
      _ => MethodResult::NotImplemented,
    }
  }
}

/// Bind the responder to its channel.
///
/// Re-expression of the framework's plugin registration: the returned channel
/// is what a transport layer feeds decoded calls into.
pub fn register() -> MethodChannel<TwoFinancePlugin> {
  MethodChannel::new(CHANNEL_NAME, TwoFinancePlugin::new())
}
