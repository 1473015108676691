//! LZ78-family bit-stream codec.
//!
//! The codec builds its dictionary incrementally while scanning the input
//! and writes variable-width codes into fixed-width output symbols:
//! - **Compress**: longest previously seen sequence plus one new unit
//! - **Decompress**: the mirror image, rebuilding the same dictionary
//!
//! Codes 0, 1 and 2 are control codes. Code widths start narrow and grow as
//! the dictionary fills; both directions share [`CodeWidth`] so the growth
//! schedule is identical on each side.
//!
//! The codec works on UTF-16 code units. Rendering symbols as text (or bytes)
//! is the job of a [`SymbolSink`] / [`SymbolSource`] pair, see
//! [`crate::formats`].

pub mod bit_reader;
pub mod bit_writer;
pub mod compress;
pub mod config;
pub mod decompress;

pub use compress::compress_units;
pub use config::{CodecConfiguration, LzCodec};
pub use decompress::decompress_units;

/// Control code: an 8-bit literal follows.
pub const LITERAL_8: u32 = 0;
/// Control code: a 16-bit literal follows.
pub const LITERAL_16: u32 = 1;
/// Control code: end of stream.
pub const END_OF_STREAM: u32 = 2;
/// First code available for dictionary content.
pub const FIRST_DICTIONARY_CODE: u32 = 3;

/// Receives packed symbols from the compressor.
pub trait SymbolSink {
    /// Accept one symbol holding `bits_per_char` significant bits.
    fn push_symbol(&mut self, value: u32);
}

/// Random-access source of packed symbols for the decompressor.
pub trait SymbolSource {
    /// Number of symbols in the source.
    fn len(&self) -> usize;

    /// Symbol at `index`. Indices past the end must read as 0.
    fn symbol_at(&self, index: usize) -> u32;

    /// Whether the source holds no symbols.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SymbolSink for Vec<u16> {
    fn push_symbol(&mut self, value: u32) {
        self.push(value as u16);
    }
}

impl SymbolSink for Vec<u32> {
    fn push_symbol(&mut self, value: u32) {
        self.push(value);
    }
}

impl SymbolSource for [u16] {
    fn len(&self) -> usize {
        <[u16]>::len(self)
    }

    fn symbol_at(&self, index: usize) -> u32 {
        self.get(index).copied().map_or(0, u32::from)
    }
}

impl SymbolSource for [u32] {
    fn len(&self) -> usize {
        <[u32]>::len(self)
    }

    fn symbol_at(&self, index: usize) -> u32 {
        self.get(index).copied().unwrap_or(0)
    }
}

/// Width of the next code and the countdown until it grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeWidth {
    num_bits: u32,
    enlarge_in: u32,
}

impl CodeWidth {
    /// Initial state of the compressor.
    pub const fn for_compress() -> Self {
        Self {
            num_bits: 2,
            enlarge_in: 2,
        }
    }

    /// Initial state of the decompressor.
    ///
    /// One step ahead of the compressor: the first literal has already been
    /// read by the time codes are decoded at this width.
    pub const fn for_decompress() -> Self {
        Self {
            num_bits: 3,
            enlarge_in: 4,
        }
    }

    /// Current code width in bits.
    #[inline]
    pub fn num_bits(&self) -> u32 {
        self.num_bits
    }

    /// Count one dictionary insertion, widening codes when the countdown ends.
    #[inline]
    pub fn grow(&mut self) {
        self.enlarge_in -= 1;
        if self.enlarge_in == 0 {
            self.enlarge_in = 1 << self.num_bits;
            self.num_bits += 1;
        }
    }
}

/// Payload width of a literal introduced by `control_code`.
#[inline]
pub(crate) fn literal_width(control_code: u32) -> u32 {
    if control_code == LITERAL_8 {
        8
    } else {
        16
    }
}
