//! twofin-channel: method-channel convention for the two_finance_blockchain plugin
//!
//! This crate defines the seam between the host framework's transport and the
//! plugin's dispatch callback:
//! - `MethodCall`: one named invocation with an optional untyped payload
//! - `MethodResult`: a success value or the not-implemented sentinel
//! - `MethodCallHandler`: the callback a plugin implements
//! - `MethodChannel`: binds a channel name to its handler
//!
//! Transport and marshaling stay with the framework; everything here is
//! synchronous and holds no state across calls.

mod call;
mod error;
mod handler;
mod result;

pub use call::MethodCall;
pub use error::ChannelError;
pub use handler::{MethodCallHandler, MethodChannel};
pub use result::MethodResult;
