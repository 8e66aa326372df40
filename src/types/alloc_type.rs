//! Heap-backed types used across the crate.
//!
//! `std` re-exports the very same items from `alloc`, so a single set of
//! paths serves both the `std` and the `no_std` + `alloc` builds.
pub use alloc::borrow::Cow;
pub use alloc::rc::Rc;
pub use alloc::string::String;
pub use alloc::vec::Vec;
