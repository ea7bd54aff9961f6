//! # Single-Byte Code Pages
//!
//! Byte/text conversion for the legacy 8-bit encoding the record files are
//! stored in. The lower half (0x00-0x7F) is ASCII in every supported page;
//! each page supplies a 128-entry table for the upper half.
//!
//! Only the load and write boundaries touch a `CodePage`. Rules, statistics
//! and sorting operate on decoded `String`s.

use crate::error::EncodingError;

/// A single-byte character encoding with an ASCII lower half.
#[derive(Debug)]
pub struct CodePage {
    /// Canonical name, e.g. `"windows-1251"`.
    pub name: &'static str,
    /// Alternative spellings accepted by [`CodePage::by_label`].
    aliases: &'static [&'static str],
    /// Characters for bytes 0x80..=0xFF. `None` marks an unassigned byte.
    upper: [Option<char>; 128],
}

/// Windows Cyrillic (CP1251), the encoding of the personnel record files.
#[rustfmt::skip]
pub static WINDOWS_1251: CodePage = CodePage {
    name: "windows-1251",
    aliases: &["cp1251", "windows1251", "x-cp1251"],
    upper: [
    Some('\u{0402}'), Some('\u{0403}'), Some('\u{201A}'), Some('\u{0453}'), Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{20AC}'), Some('\u{2030}'), Some('\u{0409}'), Some('\u{2039}'), Some('\u{040A}'), Some('\u{040C}'), Some('\u{040B}'), Some('\u{040F}'),
    Some('\u{0452}'), Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'), Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    None, Some('\u{2122}'), Some('\u{0459}'), Some('\u{203A}'), Some('\u{045A}'), Some('\u{045C}'), Some('\u{045B}'), Some('\u{045F}'),
    Some('\u{00A0}'), Some('\u{040E}'), Some('\u{045E}'), Some('\u{0408}'), Some('\u{00A4}'), Some('\u{0490}'), Some('\u{00A6}'), Some('\u{00A7}'),
    Some('\u{0401}'), Some('\u{00A9}'), Some('\u{0404}'), Some('\u{00AB}'), Some('\u{00AC}'), Some('\u{00AD}'), Some('\u{00AE}'), Some('\u{0407}'),
    Some('\u{00B0}'), Some('\u{00B1}'), Some('\u{0406}'), Some('\u{0456}'), Some('\u{0491}'), Some('\u{00B5}'), Some('\u{00B6}'), Some('\u{00B7}'),
    Some('\u{0451}'), Some('\u{2116}'), Some('\u{0454}'), Some('\u{00BB}'), Some('\u{0458}'), Some('\u{0405}'), Some('\u{0455}'), Some('\u{0457}'),
    Some('\u{0410}'), Some('\u{0411}'), Some('\u{0412}'), Some('\u{0413}'), Some('\u{0414}'), Some('\u{0415}'), Some('\u{0416}'), Some('\u{0417}'),
    Some('\u{0418}'), Some('\u{0419}'), Some('\u{041A}'), Some('\u{041B}'), Some('\u{041C}'), Some('\u{041D}'), Some('\u{041E}'), Some('\u{041F}'),
    Some('\u{0420}'), Some('\u{0421}'), Some('\u{0422}'), Some('\u{0423}'), Some('\u{0424}'), Some('\u{0425}'), Some('\u{0426}'), Some('\u{0427}'),
    Some('\u{0428}'), Some('\u{0429}'), Some('\u{042A}'), Some('\u{042B}'), Some('\u{042C}'), Some('\u{042D}'), Some('\u{042E}'), Some('\u{042F}'),
    Some('\u{0430}'), Some('\u{0431}'), Some('\u{0432}'), Some('\u{0433}'), Some('\u{0434}'), Some('\u{0435}'), Some('\u{0436}'), Some('\u{0437}'),
    Some('\u{0438}'), Some('\u{0439}'), Some('\u{043A}'), Some('\u{043B}'), Some('\u{043C}'), Some('\u{043D}'), Some('\u{043E}'), Some('\u{043F}'),
    Some('\u{0440}'), Some('\u{0441}'), Some('\u{0442}'), Some('\u{0443}'), Some('\u{0444}'), Some('\u{0445}'), Some('\u{0446}'), Some('\u{0447}'),
    Some('\u{0448}'), Some('\u{0449}'), Some('\u{044A}'), Some('\u{044B}'), Some('\u{044C}'), Some('\u{044D}'), Some('\u{044E}'), Some('\u{044F}'),
    ],
};

static REGISTRY: &[&CodePage] = &[&WINDOWS_1251];

impl CodePage {
    /// Look up a code page by name or alias, ignoring ASCII case.
    pub fn by_label(label: &str) -> Option<&'static CodePage> {
        let label = label.trim();
        REGISTRY.iter().copied().find(|page| {
            page.name.eq_ignore_ascii_case(label)
                || page.aliases.iter().any(|a| a.eq_ignore_ascii_case(label))
        })
    }

    /// Names of every registered code page.
    pub fn available() -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|page| page.name)
    }

    /// Decode bytes to a `String`.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::Undefined` for the first byte with no
    /// assigned character.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, EncodingError> {
        let mut out = String::with_capacity(bytes.len());
        for (offset, &byte) in bytes.iter().enumerate() {
            if byte.is_ascii() {
                out.push(char::from(byte));
                continue;
            }
            match self.upper[usize::from(byte - 0x80)] {
                Some(ch) => out.push(ch),
                None => {
                    return Err(EncodingError::Undefined {
                        code_page: self.name,
                        byte,
                        offset,
                    })
                }
            }
        }
        Ok(out)
    }

    /// Encode text to bytes.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::Unmappable` for the first character the
    /// page cannot represent.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        let mut out = Vec::with_capacity(text.len());
        for (offset, ch) in text.chars().enumerate() {
            match self.encode_char(ch) {
                Some(byte) => out.push(byte),
                None => {
                    return Err(EncodingError::Unmappable {
                        code_page: self.name,
                        ch,
                        offset,
                    })
                }
            }
        }
        Ok(out)
    }

    fn encode_char(&self, ch: char) -> Option<u8> {
        if ch.is_ascii() {
            return u8::try_from(ch).ok();
        }
        let pos = self.upper.iter().position(|c| *c == Some(ch))?;
        u8::try_from(pos + 0x80).ok()
    }
}
