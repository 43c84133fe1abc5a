//! OS version lookup and the composed platform version string.

use serde::{Deserialize, Serialize};
use sysinfo::System;
use tracing::debug;

use crate::os::Os;

/// Returns the host OS version string (e.g., "14.2")
///
/// Falls back to `"unknown"` when the version cannot be determined, so the
/// lookup itself never fails.
pub fn os_version() -> String {
  System::os_version().unwrap_or_else(|| String::from("unknown"))
}

/// Returns the platform version string reported over the channel
/// (e.g., "macOS 14.2")
pub fn version_string() -> String {
  PlatformInfo::current().version_string()
}

/// Snapshot of host platform details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformInfo {
  /// Identified OS, `None` on hosts outside the identified set
  pub os: Option<Os>,
  /// Platform label used as the version string prefix
  pub label: String,
  /// OS version as reported by the host
  pub version: String,
}

impl PlatformInfo {
  /// Gather current platform information
  pub fn current() -> Self {
    let os = Os::current();
    let label = match os {
      Some(os) => os.label().to_string(),
      // Unidentified hosts still answer; the raw identifier stands in
      None => std::env::consts::OS.to_string(),
    };
    let version = os_version();
    debug!(label = %label, version = %version, "gathered platform info");
    Self { os, label, version }
  }

  /// Returns the `"<label> <version>"` string (e.g., "macOS 14.2")
  pub fn version_string(&self) -> String {
    format!("{} {}", self.label, self.version)
  }
}
