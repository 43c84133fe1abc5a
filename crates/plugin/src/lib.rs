//! twofin-plugin: native responder for the two_finance_blockchain channel
//!
//! The plugin answers exactly one method, `getPlatformVersion`, with the host
//! platform label and OS version (e.g., "macOS 14.2"). Every other method
//! name gets the not-implemented sentinel.

mod responder;

pub use responder::{CHANNEL_NAME, METHOD_GET_PLATFORM_VERSION, TwoFinancePlugin, register};
