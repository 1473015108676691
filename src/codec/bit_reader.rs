//! Unpacks variable-width codes from fixed-width symbols.

use super::SymbolSource;

/// Bit reader over a [`SymbolSource`].
///
/// Mirrors [`super::bit_writer::BitWriter`]: symbols are consumed from their
/// most significant bit down, and codes are assembled least significant bit
/// first.
pub struct BitReader<'a, S: ?Sized> {
    source: &'a S,
    reset_value: u32,
    value: u32,
    mask: u32,
    index: usize,
}

impl<'a, S: SymbolSource + ?Sized> BitReader<'a, S> {
    /// Create a reader and load the first symbol.
    pub fn new(bits_per_char: u32, source: &'a S) -> Self {
        debug_assert!((1..=16).contains(&bits_per_char));
        let reset_value = 1 << (bits_per_char - 1);
        Self {
            source,
            reset_value,
            value: source.symbol_at(0),
            mask: reset_value,
            index: 1,
        }
    }

    /// Index of the next symbol to be loaded.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether every symbol of the source has been loaded and more were asked for.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.index > self.source.len()
    }

    /// Read a `width`-bit code.
    pub fn read_bits(&mut self, width: u32) -> u32 {
        let mut bits = 0;
        for shift in 0..width {
            let bit = self.value & self.mask;
            self.mask >>= 1;
            if self.mask == 0 {
                self.mask = self.reset_value;
                self.value = self.source.symbol_at(self.index);
                self.index += 1;
            }
            if bit != 0 {
                bits |= 1 << shift;
            }
        }
        bits
    }
}
