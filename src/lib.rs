#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod cli;
pub mod core;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
pub mod view;

pub use crate::core::*;
pub use view::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
