//! Packs variable-width codes into fixed-width symbols.

use super::SymbolSink;

/// Bit accumulator feeding a [`SymbolSink`].
///
/// Codes are written least significant bit first; within a symbol the first
/// bit written ends up in the most significant position.
pub struct BitWriter<S> {
    sink: S,
    bits_per_char: u32,
    value: u32,
    position: u32,
}

impl<S: SymbolSink> BitWriter<S> {
    pub fn new(bits_per_char: u32, sink: S) -> Self {
        debug_assert!((1..=16).contains(&bits_per_char));
        Self {
            sink,
            bits_per_char,
            value: 0,
            position: 0,
        }
    }

    #[inline]
    fn push_bit(&mut self, bit: u32) {
        self.value = (self.value << 1) | bit;
        if self.position == self.bits_per_char - 1 {
            self.position = 0;
            self.sink.push_symbol(self.value);
            self.value = 0;
        } else {
            self.position += 1;
        }
    }

    /// Write the low `width` bits of `value`.
    pub fn write_bits(&mut self, mut value: u32, width: u32) {
        for _ in 0..width {
            self.push_bit(value & 1);
            value >>= 1;
        }
    }

    /// Pad with zero bits through the next symbol boundary and return the sink.
    ///
    /// Always emits one more symbol, even when the register is empty.
    pub fn finish(mut self) -> S {
        loop {
            self.value <<= 1;
            if self.position == self.bits_per_char - 1 {
                self.sink.push_symbol(self.value);
                break;
            }
            self.position += 1;
        }
        self.sink
    }
}
