//! Encoding detection and decoding
//!
//! Turns the raw bytes of the input file into a `String`. Strict UTF-8 is the
//! default; `auto` sniffs a BOM or guesses with chardetng, and any WHATWG label
//! selects an explicit encoding.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, WordFreqError};

/// How the input bytes should be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// Strict UTF-8 (a leading BOM is skipped)
    #[default]
    Utf8,
    /// BOM sniffing, falling back to chardetng detection
    Auto,
    /// A specific encoding chosen by label
    Label(&'static Encoding),
}

impl TextEncoding {
    /// Human-readable name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Auto => "auto",
            Self::Label(encoding) => encoding.name(),
        }
    }
}

impl FromStr for TextEncoding {
    type Err = WordFreqError;

    fn from_str(label: &str) -> Result<Self> {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        if trimmed.eq_ignore_ascii_case("utf8") {
            return Ok(Self::Utf8);
        }

        match Encoding::for_label(trimmed.as_bytes()) {
            Some(encoding) if encoding == encoding_rs::UTF_8 => Ok(Self::Utf8),
            // Labels mapped to "replacement" cannot decode anything
            Some(encoding) if encoding != encoding_rs::REPLACEMENT => Ok(Self::Label(encoding)),
            _ => Err(WordFreqError::UnknownEncoding {
                label: label.to_string(),
            }),
        }
    }
}

/// Result of decoding a byte buffer
#[derive(Debug, Clone)]
pub struct Decoded {
    /// The decoded text, without any byte-order mark
    pub text: String,
    /// Name of the encoding that was actually used
    pub encoding: &'static str,
}

/// Detect BOM (Byte Order Mark) at the start of content
///
/// Returns the encoding and the BOM length in bytes.
fn detect_bom(content: &[u8]) -> Option<(&'static Encoding, usize)> {
    Encoding::for_bom(content)
}

/// Guess the encoding of a sample using chardetng
pub fn guess_encoding(content: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(content, true);
    detector.guess(None, true)
}

/// Decode `bytes` read from `path` according to `mode`
pub fn decode(bytes: Vec<u8>, path: &Path, mode: TextEncoding) -> Result<Decoded> {
    match mode {
        TextEncoding::Utf8 => decode_utf8(bytes, path),
        TextEncoding::Auto => {
            let (encoding, bom_len) =
                detect_bom(&bytes).unwrap_or_else(|| (guess_encoding(&bytes), 0));
            log::debug!("Detected encoding {} for {:?}", encoding.name(), path);

            if encoding == encoding_rs::UTF_8 {
                return decode_utf8(bytes, path);
            }
            decode_with(encoding, &bytes[bom_len..], path)
        }
        TextEncoding::Label(encoding) => {
            let body = match detect_bom(&bytes) {
                Some((bom_encoding, bom_len)) if bom_encoding == encoding => &bytes[bom_len..],
                _ => &bytes[..],
            };
            decode_with(encoding, body, path)
        }
    }
}

fn decode_utf8(mut bytes: Vec<u8>, path: &Path) -> Result<Decoded> {
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        bytes.drain(..3);
    }

    match String::from_utf8(bytes) {
        Ok(text) => Ok(Decoded {
            text,
            encoding: encoding_rs::UTF_8.name(),
        }),
        Err(e) => Err(WordFreqError::Decode {
            path: path.to_path_buf(),
            encoding: encoding_rs::UTF_8.name(),
            detail: format!(
                "invalid byte sequence at offset {}",
                e.utf8_error().valid_up_to()
            ),
        }),
    }
}

fn decode_with(encoding: &'static Encoding, body: &[u8], path: &Path) -> Result<Decoded> {
    let (decoded, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        return Err(WordFreqError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name(),
            detail: "malformed byte sequence".to_string(),
        });
    }

    Ok(Decoded {
        text: decoded.into_owned(),
        encoding: encoding.name(),
    })
}
