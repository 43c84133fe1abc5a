use anyhow::{Context, Result};
use serde_json::Value;
use twofin_channel::{MethodCall, MethodResult};

use crate::output::{self, OutputFormat};

/// Send one method call through the registered channel and print the result.
pub fn cmd_call(method: &str, args: Option<&str>, format: OutputFormat, verbose: bool) -> Result<()> {
  let call = match args {
    Some(raw) => {
      let payload: Value = serde_json::from_str(raw).context("--args must be valid JSON")?;
      MethodCall::with_arguments(method, payload)
    }
    None => MethodCall::new(method),
  };

  let channel = twofin_plugin::register();

  if verbose {
    output::print_info(&format!("channel: {}", channel.name()));
    output::print_info(&format!("envelope: {}", call.to_json()?));
  }

  let result = channel.invoke(&call);

  if format.is_json() {
    // The sentinel is a defined protocol response, so JSON mode always
    // exits zero and lets the caller inspect the envelope
    return output::print_json(&result);
  }

  match result {
    MethodResult::Success(Value::String(text)) => {
      output::print_success(&text);
      Ok(())
    }
    MethodResult::Success(value) => {
      output::print_success(&value.to_string());
      Ok(())
    }
    MethodResult::NotImplemented => {
      output::print_error(&format!("method not implemented: {}", method));
      std::process::exit(1);
    }
  }
}
