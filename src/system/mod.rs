//! System utilities
//!
//! - `logging`: tracing subscriber setup
//! - `platform`: per-OS operations (opening URLs in a browser)

pub mod logging;
pub mod platform;

pub use logging::{LogTarget, init_logging};
pub use platform::{NoopLauncher, SystemLauncher, UrlLauncher};
