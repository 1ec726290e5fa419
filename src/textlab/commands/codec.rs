//! Unicode-safe Base64.
//!
//! Text is encoded to UTF-8 before Base64, so any scalar value (emoji included)
//! survives the round trip. Decoding is lenient in the same ways a browser decoder
//! is: ASCII whitespace is ignored, trailing padding is optional and non-zero bits
//! in the last symbol are dropped.

use crate::error::{Result, TextlabError};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

pub fn base64_encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

pub fn base64_decode(input: &str) -> Result<String> {
    let compact: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = LENIENT
        .decode(compact.as_bytes())
        .map_err(|e| TextlabError::Decode(format!("invalid Base64: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| TextlabError::Decode(format!("decoded bytes are not UTF-8: {}", e)))
}
