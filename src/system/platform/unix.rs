//! Unix/Linux platform implementation

use std::process::{Command, Stdio};

use super::PlatformOps;

/// Unix platform operations implementation
pub struct UnixPlatform;

impl UnixPlatform {
    fn opener() -> &'static str {
        if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        }
    }
}

impl PlatformOps for UnixPlatform {
    fn open_url(url: &str) -> std::io::Result<()> {
        // 不等待浏览器进程退出，输出全部丢弃以免污染终端界面
        Command::new(Self::opener())
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
    }
}
