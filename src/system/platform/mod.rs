//! Platform abstraction layer
//!
//! Opening a URL "in a new browser context" differs per OS:
//! - `unix.rs`: `open` on macOS, `xdg-open` elsewhere
//! - `windows.rs`: `cmd /C start`
//!
//! Upper layers go through [`UrlLauncher`] so tests can swap in a recorder.

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::UnixPlatform as CurrentPlatform;
#[cfg(windows)]
pub use windows::WindowsPlatform as CurrentPlatform;

use crate::errors::{MinilinkerError, Result};
use tracing::{debug, warn};

/// Platform operations trait
pub trait PlatformOps {
    /// Hand `url` to the desktop's default browser without waiting for it.
    fn open_url(url: &str) -> std::io::Result<()>;
}

/// Something that can open a URL for the user.
pub trait UrlLauncher: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the platform's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl UrlLauncher for SystemLauncher {
    fn open(&self, url: &str) -> Result<()> {
        debug!("Opening {} on {}", url, platform_name());
        CurrentPlatform::open_url(url).map_err(|e| {
            warn!("Failed to open {}: {}", url, e);
            MinilinkerError::launch(format!("Failed to open {}: {}", url, e))
        })
    }
}

/// Launcher used when opening is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLauncher;

impl UrlLauncher for NoopLauncher {
    fn open(&self, url: &str) -> Result<()> {
        debug!("Browser launch disabled, skipping {}", url);
        Ok(())
    }
}

/// Get the platform name for logging/debugging
pub fn platform_name() -> &'static str {
    #[cfg(target_os = "macos")]
    return "macOS";
    #[cfg(all(unix, not(target_os = "macos")))]
    return "Unix/Linux";
    #[cfg(windows)]
    return "Windows";
}
