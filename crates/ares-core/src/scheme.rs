//! Activation URL handling: scheme prefix stripping and percent-coding.

use crate::config::scheme::PREFIX;

/// Remove the first occurrence of `avcks://` from an activation URL.
///
/// Later occurrences are kept, and input without the prefix comes back
/// unchanged.
pub fn strip_scheme(url: &str) -> String {
    url.replacen(PREFIX, "", 1)
}

/// Percent-decode an activation payload.
///
/// `+` is not a space here. Malformed escapes stay literal, and bytes that
/// do not form valid UTF-8 are replaced with U+FFFD.
pub fn decode_payload(encoded: &str) -> String {
    let bytes = urlencoding::decode_binary(encoded.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Strip the scheme prefix and decode what remains.
pub fn decode_activation(url: &str) -> String {
    decode_payload(&strip_scheme(url))
}

/// Build the activation URL that launches `target` through the handler.
pub fn encode_activation(target: &str) -> String {
    format!("{}{}", PREFIX, urlencoding::encode(target))
}
