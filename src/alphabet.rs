//! Character alphabets for rendering the code stream as text.
//!
//! Each alphabet maps 6-bit symbol values to printable ASCII characters.
//! The tables and their reverse lookups are built at compile time and never
//! change, so they can be shared freely across threads.

use std::fmt;

/// Sentinel in the reverse table for bytes outside the alphabet.
const NOT_IN_ALPHABET: u8 = 0xFF;

/// A 64-symbol alphabet with an optional padding character.
#[derive(Clone)]
pub struct Alphabet {
    name: &'static str,
    symbols: &'static [u8; 64],
    reverse: [u8; 256],
    padding: Option<u8>,
}

impl Alphabet {
    /// Bits carried by one symbol.
    pub const BITS_PER_CHAR: u32 = 6;

    /// Build an alphabet.
    ///
    /// Panics at compile time if a symbol repeats, a symbol is not ASCII,
    /// or the padding character is also a data symbol.
    pub const fn new(name: &'static str, symbols: &'static [u8; 64], padding: Option<u8>) -> Self {
        let mut reverse = [NOT_IN_ALPHABET; 256];
        let mut i = 0;
        while i < symbols.len() {
            let symbol = symbols[i];
            assert!(symbol.is_ascii(), "alphabet symbols must be ASCII");
            assert!(
                reverse[symbol as usize] == NOT_IN_ALPHABET,
                "alphabet symbols must be unique"
            );
            reverse[symbol as usize] = i as u8;
            i += 1;
        }
        if let Some(pad) = padding {
            assert!(
                reverse[pad as usize] == NOT_IN_ALPHABET,
                "padding must not be a data symbol"
            );
        }

        Self {
            name,
            symbols,
            reverse,
            padding,
        }
    }

    /// Character for a symbol value. Only the low 6 bits are used.
    #[inline]
    pub fn symbol(&self, value: u32) -> char {
        self.symbols[(value & 0x3F) as usize] as char
    }

    /// Symbol value of a UTF-16 code unit, if it belongs to the alphabet.
    #[inline]
    pub fn value_of(&self, unit: u16) -> Option<u32> {
        if unit > 0xFF {
            return None;
        }
        match self.reverse[unit as usize] {
            NOT_IN_ALPHABET => None,
            value => Some(value as u32),
        }
    }

    /// Symbol value of a code unit, reading unknown characters as 0.
    ///
    /// Padding is never a data symbol, so it also reads as 0.
    #[inline]
    pub fn value_or_zero(&self, unit: u16) -> u32 {
        self.value_of(unit).unwrap_or(0)
    }

    /// The padding character, if this alphabet pads its output.
    pub fn padding(&self) -> Option<char> {
        self.padding.map(|p| p as char)
    }

    /// Pad `encoded` on the right to a multiple of 4 characters.
    ///
    /// The legacy format pads a remainder of 1 with three characters even
    /// though no 6-bit encoder produces such a length from whole bytes.
    pub fn pad(&self, encoded: &mut String) {
        let Some(pad) = self.padding else {
            return;
        };
        let count = match encoded.len() % 4 {
            0 => 0,
            1 => 3,
            2 => 2,
            _ => 1,
        };
        encoded.extend(std::iter::repeat(pad as char).take(count));
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("name", &self.name)
            .field("padding", &self.padding())
            .finish()
    }
}

/// Standard Base64 alphabet, padded with `=`.
pub static BASE64: Alphabet = Alphabet::new(
    "base64",
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
    Some(b'='),
);

/// URI-safe alphabet, unpadded. `$` is not a data symbol and reads as 0.
pub static URI_SAFE: Alphabet = Alphabet::new(
    "uri",
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+-",
    None,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(BASE64.symbol(0), 'A');
        assert_eq!(BASE64.symbol(26), 'a');
        assert_eq!(BASE64.symbol(62), '+');
        assert_eq!(BASE64.symbol(63), '/');
        assert_eq!(URI_SAFE.symbol(62), '+');
        assert_eq!(URI_SAFE.symbol(63), '-');
    }

    #[test]
    fn test_reverse_lookup() {
        for value in 0..64 {
            let c = BASE64.symbol(value);
            assert_eq!(BASE64.value_of(c as u16), Some(value));
            let c = URI_SAFE.symbol(value);
            assert_eq!(URI_SAFE.value_of(c as u16), Some(value));
        }
    }

    #[test]
    fn test_unknown_reads_as_zero() {
        assert_eq!(BASE64.value_of(b'=' as u16), None);
        assert_eq!(BASE64.value_or_zero(b'=' as u16), 0);
        assert_eq!(BASE64.value_or_zero(b'-' as u16), 0);
        assert_eq!(BASE64.value_or_zero(0x3042), 0);
        assert_eq!(URI_SAFE.value_or_zero(b'/' as u16), 0);
        assert_eq!(URI_SAFE.value_of(b'$' as u16), None);
        assert_eq!(URI_SAFE.value_or_zero(b'$' as u16), 0);
        assert_eq!(URI_SAFE.value_of(b'-' as u16), Some(63));
    }

    #[test]
    fn test_padding() {
        let cases = [("", ""), ("A", "A==="), ("AB", "AB=="), ("ABC", "ABC="), ("ABCD", "ABCD")];
        for (input, expected) in cases {
            let mut s = input.to_string();
            BASE64.pad(&mut s);
            assert_eq!(s, expected);
        }
    }

    #[test]
    fn test_uri_safe_is_unpadded() {
        let mut s = "ABC".to_string();
        URI_SAFE.pad(&mut s);
        assert_eq!(s, "ABC");
        assert_eq!(URI_SAFE.padding(), None);
        assert_eq!(BASE64.padding(), Some('='));
    }
}
