use anyhow::Result;
use twofin_platform::PlatformInfo;

use crate::output;

pub fn cmd_info() -> Result<()> {
  let info = PlatformInfo::current();

  println!("Channel:");
  output::print_stat("name", twofin_plugin::CHANNEL_NAME);
  output::print_stat("methods", twofin_plugin::METHOD_GET_PLATFORM_VERSION);
  println!();
  println!("Host:");
  output::print_stat(
    "os",
    info.os.map(|os| os.as_str()).unwrap_or(std::env::consts::OS),
  );
  output::print_stat("version", &info.version);
  output::print_stat("reports", &info.version_string());

  Ok(())
}
