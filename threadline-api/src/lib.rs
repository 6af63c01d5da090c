//! The Threadline threading abstraction API.
//!
//! Defines the identifier and name types shared by every Threadline implementation, together with the traits an
//! implementation provides to start naming, finding and suspending threads.

#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(test)]
extern crate std;

mod error;
pub mod thread;
pub mod time;

pub use error::{Error, Result};
