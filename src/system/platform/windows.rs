//! Windows platform implementation

use std::process::{Command, Stdio};

use super::PlatformOps;

/// Windows platform operations implementation
pub struct WindowsPlatform;

impl PlatformOps for WindowsPlatform {
    fn open_url(url: &str) -> std::io::Result<()> {
        // start 的第一个带引号参数是窗口标题，这里传空串
        Command::new("cmd")
            .args(["/C", "start", "", url])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
    }
}
