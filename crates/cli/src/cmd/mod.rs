mod call;
mod info;

pub use call::cmd_call;
pub use info::cmd_info;
