//! The `new` command: options, config assembly and the interactive wizard
//!
//! [`NewArgs`] and [`next_steps`] are always available. The cliclack wizard
//! and [`run`] are only available when the `tui` feature is enabled.

mod args;

#[cfg(feature = "tui")]
mod prompts;

pub use args::{next_steps, NewArgs, DEFAULT_MODULE_PREFIX};

#[cfg(feature = "tui")]
pub use prompts::run;
