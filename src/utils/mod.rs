pub mod url_validator;

pub use url_validator::{UrlValidationError, is_valid_url, validate_url};

/// 36 进制数字表
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// 短码默认长度
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generate a random-looking short code.
///
/// Draws a uniform fraction in `[0, 1)` and keeps at most `max_len` of its
/// base-36 fractional digits. Nothing checks the result for uniqueness, and a
/// fraction with a short expansion yields a shorter code.
pub fn generate_short_code(max_len: usize) -> String {
    short_code_from_fraction(rand::random::<f64>(), max_len)
}

/// Write the fractional part of `fraction` in base 36, up to `max_len` digits.
///
/// Stops early once the remaining fraction is exactly zero, so `0.5` becomes
/// `"i"` rather than `"i00000"`.
pub fn short_code_from_fraction(fraction: f64, max_len: usize) -> String {
    let mut frac = if fraction.is_finite() {
        fraction.fract().abs()
    } else {
        0.0
    };

    let mut code = String::with_capacity(max_len);
    while code.len() < max_len && frac > 0.0 {
        frac *= 36.0;
        let digit = (frac.trunc() as usize).min(BASE36_DIGITS.len() - 1);
        code.push(BASE36_DIGITS[digit] as char);
        frac -= digit as f64;
    }
    code
}

/// 拼接展示用的短链接
pub fn build_short_link(prefix: &str, code: &str) -> String {
    format!("{}{}", prefix, code)
}
