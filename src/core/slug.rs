//! Key slug generation.
//!
//! Turns localized UI text into a short camel-case identifier usable as a
//! catalog key segment:
//!
//! ```
//! use glotsync::core::slug::generate_key;
//!
//! assert_eq!(generate_key("Bảng điều khiển", 4), "bangDieuKhien");
//! assert_eq!(generate_key("Xóa đơn hàng đã chọn ngay", 4), "xoaDonHangDa");
//! assert_eq!(generate_key("!!!", 4), "text");
//! ```

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Default cap on the number of words kept in a slug.
pub const DEFAULT_MAX_KEY_WORDS: usize = 4;

/// Returned when normalization strips everything from the input.
pub const SENTINEL_KEY: &str = "text";

/// Generate a deterministic camel-case key from `text`.
///
/// Only the first `max_words` words are kept (at least one). Never fails and
/// never returns an empty string.
pub fn generate_key(text: &str, max_words: usize) -> String {
    let folded = fold_to_ascii(&text.to_lowercase());

    let key = folded
        .split_whitespace()
        .take(max_words.max(1))
        .enumerate()
        .map(|(i, word)| if i == 0 { word.to_string() } else { capitalize(word) })
        .collect::<String>();

    if key.is_empty() {
        SENTINEL_KEY.to_string()
    } else {
        key
    }
}

/// Strip diacritics and drop everything outside `[a-z0-9\s]`.
fn fold_to_ascii(lowercase: &str) -> String {
    let mut out = String::with_capacity(lowercase.len());
    for c in lowercase.nfd().filter(|c| !is_combining_mark(*c)) {
        if let Some(mapped) = map_undecomposable(c) {
            out.push_str(mapped);
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
        } else if c.is_whitespace() {
            out.push(' ');
        }
    }
    out
}

/// Letters with a stroke or ligature have no canonical decomposition.
fn map_undecomposable(c: char) -> Option<&'static str> {
    let mapped = match c {
        'đ' | 'ð' => "d",
        'ø' => "o",
        'ł' => "l",
        'ħ' => "h",
        'ı' => "i",
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        'þ' => "th",
        _ => return None,
    };
    Some(mapped)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
