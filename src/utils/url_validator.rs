//! URL 验证模块
//!
//! 只做格式上的接受检查：要求 http/https 协议和带点的主机名，不检查可达性。

use once_cell::sync::Lazy;
use regex::Regex;

/// `$-_` 是字符区间 (0x24..=0x5F)，保持原样
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(https?://)((([a-zA-Z0-9$-_@.&+!*"(),])+)(\.[a-zA-Z]{2,}))(/[a-zA-Z0-9$-_@.&+!*"(),]*)*$"#,
    )
    .expect("URL pattern must compile")
});

/// URL 验证错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    InvalidFormat,
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "Please enter a URL"),
            Self::InvalidFormat => write!(f, "Invalid URL!\nMust start with http:// or https://"),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 验证用户输入的 URL
///
/// 输入不做 trim：只有空字符串算作空输入，纯空白会被当作格式错误。
pub fn validate_url(url: &str) -> Result<(), UrlValidationError> {
    if url.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    if !is_valid_url(url) {
        return Err(UrlValidationError::InvalidFormat);
    }

    Ok(())
}

/// Whether `url` matches the accepted shape.
pub fn is_valid_url(url: &str) -> bool {
    URL_PATTERN.is_match(url)
}
