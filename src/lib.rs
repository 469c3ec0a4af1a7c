//! Styled rich text trees with logging wired up.
//!
//! Re-exports the [`ekho`] builder and adds the file logger that receives its
//! diagnostics (for example the warning emitted when an RGB value does not fit
//! in 24 bits).
//!
//! ```no_run
//! use ekho_rs::{LogConfig, ekho, init_with_config};
//!
//! # fn main() -> ekho_rs::Result<()> {
//! init_with_config(&LogConfig::from_env()?)?;
//!
//! let text = ekho("status: ", |b| {
//!     b.child_with("ok", |b| {
//!         b.style(|s| {
//!             s.green().bold();
//!         });
//!     });
//! });
//! println!("{}", text.pretty());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
mod log_init;

pub use config::LogConfig;
pub use error::{EkhoError, Result};
pub use log_init::{init_logger, init_with_config};

pub use ekho::*;

// Re-export the log crate so users can use ekho_rs::log::info!, etc.
pub use log;
