//! Helpers for testing code that uses this library.

#[cfg(any(feature = "std", test))]
mod multi_failure;
#[cfg(any(feature = "std", test))]
#[doc(hidden)]
pub use multi_failure::MultiFailure;
