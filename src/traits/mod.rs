//! Extension traits bridging standard types and the rule algebra.
//!
//! - [`ResultExt`]: turns a `Result` into a [`Validated`](crate::Validated)
//!   so fallible conversions can be used inside rules.
pub mod result_ext;

pub use result_ext::ResultExt;
