//! Host platform identification for the two_finance_blockchain plugin
//!
//! This crate answers one question: which operating system is the plugin
//! running on, and which version of it. The composed version string
//! (e.g., "macOS 14.2") is what the `getPlatformVersion` channel method
//! reports.

mod info;
mod os;

pub use info::{PlatformInfo, os_version, version_string};
pub use os::Os;
