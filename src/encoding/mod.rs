//! Charset detection for file contents.
//!
//! Files are first screened with [`is_binary`]; text is then decoded with the
//! best-ranked candidate charset that has a decoder. Detection is a pure
//! function of the bytes, so repeated runs always pick the same charset.

mod charsets;

pub use charsets::{Charset, lookup_charset};

use chardetng::EncodingDetector;
use thiserror::Error;

/// Charset name reported for files that are not text.
pub const BINARY_CHARSET: &str = "binary";

const CONFIDENCE_BOM: u8 = 100;
const CONFIDENCE_VALID_UTF8: u8 = 100;
const CONFIDENCE_DETECTED: u8 = 80;
const CONFIDENCE_GUESSED: u8 = 40;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unable to detect a charset")]
    NoCandidate,

    #[error("content is not valid {charset} text")]
    Malformed { charset: String },
}

/// Text decoded from raw file bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub charset: String,
}

impl Decoded {
    fn binary() -> Self {
        Self {
            text: String::new(),
            charset: BINARY_CHARSET.to_string(),
        }
    }

    #[must_use]
    pub fn is_binary(&self) -> bool {
        self.charset == BINARY_CHARSET
    }
}

/// A charset proposed by detection, with its confidence (0-100).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub confidence: u8,
}

impl Candidate {
    fn new(name: &str, confidence: u8) -> Self {
        Self {
            name: name.to_string(),
            confidence,
        }
    }
}

/// Returns true if `bytes` contain a control character that never occurs in
/// text. Tab, line feed, form feed and carriage return are allowed.
#[must_use]
pub fn is_binary(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .any(|&b| matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1F))
}

/// Decode raw bytes into text using the best-ranked detected charset.
///
/// Falls back to the binary heuristic when detection or decoding fails: binary
/// content yields a [`BINARY_CHARSET`] result instead of an error.
///
/// # Errors
/// Returns a [`DecodeError`] if the bytes look like text but cannot be decoded.
pub fn decode_bytes(bytes: &[u8]) -> Result<Decoded, DecodeError> {
    match try_decode(bytes) {
        Ok(decoded) => Ok(decoded),
        Err(_) if is_binary(bytes) => Ok(Decoded::binary()),
        Err(e) => Err(e),
    }
}

fn try_decode(bytes: &[u8]) -> Result<Decoded, DecodeError> {
    let candidates = detect_candidates(bytes);
    let charset = select_charset(&candidates).ok_or(DecodeError::NoCandidate)?;

    let malformed = || DecodeError::Malformed {
        charset: charset.name().to_string(),
    };
    let text = charset.decode(bytes).ok_or_else(malformed)?;
    if !is_well_formed(&text) {
        return Err(malformed());
    }

    Ok(Decoded {
        text: text.into_owned(),
        charset: charset.name().to_string(),
    })
}

/// Decoded text must not contain a control character that [`is_binary`]
/// rejects.
fn is_well_formed(text: &str) -> bool {
    !text
        .chars()
        .any(|c| matches!(c, '\u{0}'..='\u{8}' | '\u{B}' | '\u{E}'..='\u{1F}'))
}

/// Rank candidate charsets for `bytes`, most likely first.
#[must_use]
pub fn detect_candidates(bytes: &[u8]) -> Vec<Candidate> {
    if let Some(name) = sniff_bom(bytes) {
        return vec![Candidate::new(name, CONFIDENCE_BOM)];
    }

    let mut candidates = Vec::new();
    if std::str::from_utf8(bytes).is_ok() {
        candidates.push(Candidate::new("UTF-8", CONFIDENCE_VALID_UTF8));
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let (encoding, confident) = detector.guess_assess(None, true);
    let confidence = if confident {
        CONFIDENCE_DETECTED
    } else {
        CONFIDENCE_GUESSED
    };
    candidates.push(Candidate::new(encoding.name(), confidence));

    candidates.sort_by(|a, b| {
        b.confidence
            .cmp(&a.confidence)
            .then_with(|| a.name.cmp(&b.name))
    });
    candidates
}

/// Pick the decodable candidate with the highest confidence; ties go to the
/// lexicographically smallest name.
#[must_use]
pub fn select_charset(candidates: &[Candidate]) -> Option<Charset> {
    candidates
        .iter()
        .filter_map(|c| lookup_charset(&c.name).map(|charset| (c, charset)))
        .min_by(|(a, _), (b, _)| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.name.cmp(&b.name))
        })
        .map(|(_, charset)| charset)
}

fn sniff_bom(bytes: &[u8]) -> Option<&'static str> {
    // UTF-32LE shares its first two bytes with the UTF-16LE mark.
    if bytes.starts_with(&[0xFF, 0xFE, 0x00, 0x00]) {
        Some("UTF-32LE")
    } else if bytes.starts_with(&[0x00, 0x00, 0xFE, 0xFF]) {
        Some("UTF-32BE")
    } else if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        Some("UTF-8")
    } else if bytes.starts_with(&[0xFF, 0xFE]) {
        Some("UTF-16LE")
    } else if bytes.starts_with(&[0xFE, 0xFF]) {
        Some("UTF-16BE")
    } else {
        None
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
