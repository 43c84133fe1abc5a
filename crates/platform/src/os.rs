use std::fmt;

use serde::{Deserialize, Serialize};

/// Operating systems the plugin can identify by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
  Linux,
  MacOs,
  Windows,
}

impl Os {
  /// Detect the current operating system at runtime
  ///
  /// Returns `None` on hosts outside the identified set
  pub fn current() -> Option<Self> {
    match std::env::consts::OS {
      "linux" => Some(Self::Linux),
      "macos" => Some(Self::MacOs),
      "windows" => Some(Self::Windows),
      _ => None,
    }
  }

  /// Returns the lowercase string identifier for this OS
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Linux => "linux",
      Self::MacOs => "macos",
      Self::Windows => "windows",
    }
  }

  /// Returns the label used as the platform prefix in reported version strings
  pub fn label(&self) -> &'static str {
    match self {
      Self::Linux => "Linux",
      Self::MacOs => "macOS",
      Self::Windows => "Windows",
    }
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn current_returns_identified_os() {
    // CI and dev hosts are all within the identified set
    assert!(Os::current().is_some(), "Current OS should be identified");
  }

  #[test]
  fn labels_match_marketing_names() {
    assert_eq!(Os::MacOs.label(), "macOS");
    assert_eq!(Os::Linux.label(), "Linux");
    assert_eq!(Os::Windows.label(), "Windows");
  }

  #[test]
  fn identifier_is_lowercase() {
    assert_eq!(Os::MacOs.as_str(), "macos");
    assert_eq!(Os::MacOs.to_string(), "macos");
  }
}
