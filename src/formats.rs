//! Output formats: how the codec's symbols are rendered as text or bytes.
//!
//! | Format | Bits per symbol | Rendering |
//! |---|---|---|
//! | Base64 | 6 | [`crate::alphabet::BASE64`], `=` padded |
//! | Encoded URI component | 6 | [`crate::alphabet::URI_SAFE`], unpadded |
//! | UTF-16 | 15 | one `char` per symbol, offset by 32, trailing space |
//! | Raw | 16 | `u16` code units |
//! | Uint8 array | 16 | raw units as big-endian byte pairs |
//!
//! Empty input always compresses to empty output, and empty encodings always
//! decompress to an empty string.

use std::fmt;
use std::str::FromStr;

use byteorder::{BigEndian, ByteOrder};

use crate::alphabet::{Alphabet, BASE64, URI_SAFE};
use crate::codec::config::CodecConfiguration;
use crate::codec::{compress_units, decompress_units, SymbolSink};
use crate::error::{CodecError, Result};

const UTF16_BITS_PER_CHAR: u32 = 15;
const UTF16_OFFSET: u32 = 32;
const RAW_BITS_PER_CHAR: u32 = 16;

/// Text formats selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Base64,
    EncodedUriComponent,
    Utf16,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base64 => write!(f, "base64"),
            Self::EncodedUriComponent => write!(f, "uri"),
            Self::Utf16 => write!(f, "utf16"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "base64" => Ok(Self::Base64),
            "uri" | "encodeduricomponent" => Ok(Self::EncodedUriComponent),
            "utf16" => Ok(Self::Utf16),
            other => Err(format!("Unknown format: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Sinks
// ---------------------------------------------------------------------------

struct AlphabetSink {
    alphabet: &'static Alphabet,
    out: String,
}

impl SymbolSink for AlphabetSink {
    fn push_symbol(&mut self, value: u32) {
        self.out.push(self.alphabet.symbol(value));
    }
}

struct Utf16Sink(String);

impl SymbolSink for Utf16Sink {
    fn push_symbol(&mut self, value: u32) {
        // 15-bit values plus the offset stay below the surrogate range.
        let c = char::from_u32((value & 0x7FFF) + UTF16_OFFSET)
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        self.0.push(c);
    }
}

fn compress_with_alphabet(units: &[u16], alphabet: &'static Alphabet) -> String {
    if units.is_empty() {
        return String::new();
    }
    let sink = AlphabetSink {
        alphabet,
        out: String::with_capacity(units.len()),
    };
    let mut out = compress_units(units, Alphabet::BITS_PER_CHAR, sink).out;
    alphabet.pad(&mut out);
    out
}

fn compress_utf16(units: &[u16]) -> String {
    if units.is_empty() {
        return String::new();
    }
    let Utf16Sink(mut out) = compress_units(units, UTF16_BITS_PER_CHAR, Utf16Sink(String::new()));
    out.push(' ');
    out
}

pub(crate) fn compress_units_to(format: Format, units: &[u16]) -> String {
    match format {
        Format::Base64 => compress_with_alphabet(units, &BASE64),
        Format::EncodedUriComponent => compress_with_alphabet(units, &URI_SAFE),
        Format::Utf16 => compress_utf16(units),
    }
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

fn units_to_string(units: Vec<u16>) -> Result<String> {
    String::from_utf16(&units).map_err(|_| CodecError::InvalidUtf16)
}

/// Symbol values of `input`, one per UTF-16 code unit.
fn alphabet_values(input: &str, alphabet: &Alphabet) -> Vec<u32> {
    input
        .encode_utf16()
        .map(|unit| alphabet.value_or_zero(unit))
        .collect()
}

pub(crate) fn decompress_from(format: Format, input: &str, max_output_units: usize) -> Result<String> {
    if input.is_empty() {
        return Ok(String::new());
    }
    let (symbols, bits_per_char): (Vec<u32>, u32) = match format {
        Format::Base64 => (alphabet_values(input, &BASE64), Alphabet::BITS_PER_CHAR),
        Format::EncodedUriComponent => {
            // Form encoding turns '+' into a space.
            let symbols = input
                .encode_utf16()
                .map(|unit| if unit == u16::from(b' ') { u16::from(b'+') } else { unit })
                .map(|unit| URI_SAFE.value_or_zero(unit))
                .collect();
            (symbols, Alphabet::BITS_PER_CHAR)
        }
        Format::Utf16 => {
            let symbols = input
                .encode_utf16()
                .map(|unit| u32::from(unit).wrapping_sub(UTF16_OFFSET) & 0x7FFF)
                .collect();
            (symbols, UTF16_BITS_PER_CHAR)
        }
    };
    units_to_string(decompress_units(symbols.as_slice(), bits_per_char, max_output_units)?)
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Compress into padded Base64 text.
pub fn compress_to_base64(input: &str) -> String {
    let units: Vec<u16> = input.encode_utf16().collect();
    compress_units_to(Format::Base64, &units)
}

/// Decompress padded (or unpadded) Base64 text.
pub fn decompress_from_base64(input: &str) -> Result<String> {
    decompress_from(
        Format::Base64,
        input,
        CodecConfiguration::DEFAULT_MAX_OUTPUT_UNITS,
    )
}

/// Compress into text that is safe inside a URI component.
pub fn compress_to_encoded_uri_component(input: &str) -> String {
    let units: Vec<u16> = input.encode_utf16().collect();
    compress_units_to(Format::EncodedUriComponent, &units)
}

pub fn decompress_from_encoded_uri_component(input: &str) -> Result<String> {
    decompress_from(
        Format::EncodedUriComponent,
        input,
        CodecConfiguration::DEFAULT_MAX_OUTPUT_UNITS,
    )
}

/// Compress into valid UTF-16 text, 15 bits per character.
pub fn compress_to_utf16(input: &str) -> String {
    let units: Vec<u16> = input.encode_utf16().collect();
    compress_units_to(Format::Utf16, &units)
}

pub fn decompress_from_utf16(input: &str) -> Result<String> {
    decompress_from(
        Format::Utf16,
        input,
        CodecConfiguration::DEFAULT_MAX_OUTPUT_UNITS,
    )
}

/// Compress into raw 16-bit units. The result is generally not valid UTF-16.
pub fn compress(input: &str) -> Vec<u16> {
    let units: Vec<u16> = input.encode_utf16().collect();
    compress_units(&units, RAW_BITS_PER_CHAR, Vec::new())
}

pub fn decompress(compressed: &[u16]) -> Result<String> {
    units_to_string(decompress_units(
        compressed,
        RAW_BITS_PER_CHAR,
        CodecConfiguration::DEFAULT_MAX_OUTPUT_UNITS,
    )?)
}

/// Compress into bytes: each raw unit as a big-endian pair.
pub fn compress_to_uint8_array(input: &str) -> Vec<u8> {
    let units = compress(input);
    let mut bytes = vec![0u8; units.len() * 2];
    BigEndian::write_u16_into(&units, &mut bytes);
    bytes
}

/// Decompress bytes produced by [`compress_to_uint8_array`].
///
/// A dangling final byte is read as the high byte of a last unit. lz-string
/// itself throws on odd-length input, so such bytes never come from it.
pub fn decompress_from_uint8_array(compressed: &[u8]) -> Result<String> {
    let units: Vec<u16> = compressed
        .chunks(2)
        .map(|pair| match pair {
            [hi, lo] => BigEndian::read_u16(&[*hi, *lo]),
            [hi] => u16::from(*hi) << 8,
            _ => 0,
        })
        .collect();
    decompress(&units)
}
