use std::borrow::Cow;

use encoding_rs::Encoding;

/// How a charset turns bytes into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decoder {
    Encoding(&'static Encoding),
    Utf32Le,
    Utf32Be,
    Hz,
}

/// A charset with a known decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    name: &'static str,
    decoder: Decoder,
}

impl Charset {
    fn encoding(name: &'static str, encoding: &'static Encoding) -> Self {
        Self {
            name,
            decoder: Decoder::Encoding(encoding),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Decode `bytes` strictly. Returns `None` when the input is malformed
    /// for this charset. A byte order mark is kept as U+FEFF.
    #[must_use]
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        match self.decoder {
            Decoder::Encoding(encoding) => {
                encoding.decode_without_bom_handling_and_without_replacement(bytes)
            }
            Decoder::Utf32Le => decode_utf32(bytes, u32::from_le_bytes).map(Cow::Owned),
            Decoder::Utf32Be => decode_utf32(bytes, u32::from_be_bytes).map(Cow::Owned),
            Decoder::Hz => decode_hz(bytes).map(Cow::Owned),
        }
    }
}

fn decode_utf32(bytes: &[u8], to_u32: fn([u8; 4]) -> u32) -> Option<String> {
    let chunks = bytes.chunks_exact(4);
    if !chunks.remainder().is_empty() {
        return None;
    }
    chunks
        .map(|chunk| {
            let unit = [chunk[0], chunk[1], chunk[2], chunk[3]];
            char::from_u32(to_u32(unit))
        })
        .collect()
}

/// HZ (RFC 1843): 7-bit ASCII with `~{` ... `~}` spans of GB2312 byte
/// pairs stored with the high bits cleared. `~~` is a tilde and `~` before a
/// line feed is a line continuation.
fn decode_hz(bytes: &[u8]) -> Option<String> {
    let mut text = String::with_capacity(bytes.len());
    let mut in_gb = false;
    let mut iter = bytes.iter().copied();
    while let Some(byte) = iter.next() {
        if byte == b'~' {
            match iter.next()? {
                b'~' if !in_gb => text.push('~'),
                b'\n' if !in_gb => {}
                b'{' if !in_gb => in_gb = true,
                b'}' if in_gb => in_gb = false,
                _ => return None,
            }
        } else if in_gb {
            let trail = iter.next()?;
            if !(0x21..=0x7E).contains(&byte) || !(0x21..=0x7E).contains(&trail) {
                return None;
            }
            let pair = [byte | 0x80, trail | 0x80];
            let ch = encoding_rs::GBK
                .decode_without_bom_handling_and_without_replacement(&pair)?;
            text.push_str(&ch);
        } else if byte.is_ascii() {
            text.push(char::from(byte));
        } else {
            return None;
        }
    }
    Some(text)
}

/// Resolve a normalized charset name to its canonical name and decoder.
fn resolve(key: &str) -> Option<Charset> {
    let charset = match key {
        "utf8" | "utf8bom" | "unicode11utf8" => Charset::encoding("UTF-8", encoding_rs::UTF_8),
        "utf16le" | "utf16" => Charset::encoding("UTF-16LE", encoding_rs::UTF_16LE),
        "utf16be" => Charset::encoding("UTF-16BE", encoding_rs::UTF_16BE),
        "utf32le" | "utf32" => Charset {
            name: "UTF-32LE",
            decoder: Decoder::Utf32Le,
        },
        "utf32be" => Charset {
            name: "UTF-32BE",
            decoder: Decoder::Utf32Be,
        },
        "usascii"
        | "ascii"
        | "latin1"
        | "iso88591"
        | "windows1252"
        | "cp1252" => {
            Charset::encoding("windows-1252", encoding_rs::WINDOWS_1252)
        }
        "iso88592" | "latin2" => Charset::encoding("ISO-8859-2", encoding_rs::ISO_8859_2),
        "iso88593" => Charset::encoding("ISO-8859-3", encoding_rs::ISO_8859_3),
        "iso88594" => Charset::encoding("ISO-8859-4", encoding_rs::ISO_8859_4),
        "iso88595" => Charset::encoding("ISO-8859-5", encoding_rs::ISO_8859_5),
        "iso88596" => Charset::encoding("ISO-8859-6", encoding_rs::ISO_8859_6),
        "iso88597" => Charset::encoding("ISO-8859-7", encoding_rs::ISO_8859_7),
        "iso88598" => Charset::encoding("ISO-8859-8", encoding_rs::ISO_8859_8),
        "iso88598i" => Charset::encoding("ISO-8859-8-I", encoding_rs::ISO_8859_8_I),
        "iso88599" | "windows1254" => Charset::encoding("windows-1254", encoding_rs::WINDOWS_1254),
        "iso885910" => Charset::encoding("ISO-8859-10", encoding_rs::ISO_8859_10),
        "iso885911" | "windows874" => Charset::encoding("windows-874", encoding_rs::WINDOWS_874),
        "iso885913" => Charset::encoding("ISO-8859-13", encoding_rs::ISO_8859_13),
        "iso885914" => Charset::encoding("ISO-8859-14", encoding_rs::ISO_8859_14),
        "iso885915" | "latin9" => Charset::encoding("ISO-8859-15", encoding_rs::ISO_8859_15),
        "iso885916" => Charset::encoding("ISO-8859-16", encoding_rs::ISO_8859_16),
        "windows1250" | "cp1250" => Charset::encoding("windows-1250", encoding_rs::WINDOWS_1250),
        "windows1251" | "cp1251" => Charset::encoding("windows-1251", encoding_rs::WINDOWS_1251),
        "windows1253" => Charset::encoding("windows-1253", encoding_rs::WINDOWS_1253),
        "windows1255" => Charset::encoding("windows-1255", encoding_rs::WINDOWS_1255),
        "windows1256" => Charset::encoding("windows-1256", encoding_rs::WINDOWS_1256),
        "windows1257" => Charset::encoding("windows-1257", encoding_rs::WINDOWS_1257),
        "windows1258" => Charset::encoding("windows-1258", encoding_rs::WINDOWS_1258),
        "ibm866" | "cp866" => Charset::encoding("IBM866", encoding_rs::IBM866),
        "koi8r" => Charset::encoding("KOI8-R", encoding_rs::KOI8_R),
        "koi8u" => Charset::encoding("KOI8-U", encoding_rs::KOI8_U),
        "macintosh" | "macroman" => Charset::encoding("macintosh", encoding_rs::MACINTOSH),
        "xmaccyrillic" => Charset::encoding("x-mac-cyrillic", encoding_rs::X_MAC_CYRILLIC),
        "shiftjis"
        | "sjis"
        | "windows31j" => {
            Charset::encoding("Shift_JIS", encoding_rs::SHIFT_JIS)
        }
        "eucjp" => Charset::encoding("EUC-JP", encoding_rs::EUC_JP),
        "iso2022jp" => Charset::encoding("ISO-2022-JP", encoding_rs::ISO_2022_JP),
        "euckr" | "windows949" => Charset::encoding("EUC-KR", encoding_rs::EUC_KR),
        "gb18030" => Charset::encoding("gb18030", encoding_rs::GB18030),
        "gbk" | "gb2312" => Charset::encoding("GBK", encoding_rs::GBK),
        "big5" | "big5hkscs" => Charset::encoding("Big5", encoding_rs::BIG5),
        "hzgb2312" | "hz" => Charset {
            name: "HZ-GB-2312",
            decoder: Decoder::Hz,
        },
        _ => return None,
    };
    Some(charset)
}

/// Find a decoder for `name`, ignoring case, `-` and `_`.
#[must_use]
pub fn lookup_charset(name: &str) -> Option<Charset> {
    let key = normalize_name(name);
    resolve(&key)
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
#[path = "charsets_tests.rs"]
mod tests;
