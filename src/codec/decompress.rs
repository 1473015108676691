//! Decompression: rebuilds the compressor's dictionary from the code stream.

use std::ops::Range;

use super::bit_reader::BitReader;
use super::{
    literal_width, CodeWidth, SymbolSource, END_OF_STREAM, FIRST_DICTIONARY_CODE, LITERAL_16,
    LITERAL_8,
};
use crate::error::{CodecError, Result};

/// Decompress `bits_per_char`-wide symbols into UTF-16 code units.
///
/// Every dictionary entry is a range of the output produced so far: an entry
/// is always the previous sequence followed by the first unit of the next
/// one, and those two sit next to each other in the output.
///
/// Fails if the output grows beyond `max_output_units`.
pub fn decompress_units<S: SymbolSource + ?Sized>(
    source: &S,
    bits_per_char: u32,
    max_output_units: usize,
) -> Result<Vec<u16>> {
    if source.is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = BitReader::new(bits_per_char, source);

    // The first control code is written while codes are still 2 bits wide.
    let first = match reader.read_bits(2) {
        END_OF_STREAM => return Ok(Vec::new()),
        code @ (LITERAL_8 | LITERAL_16) => reader.read_bits(literal_width(code)) as u16,
        code => return Err(CodecError::InvalidControlCode(code)),
    };

    // Codes 0..=2 are control codes and never hold content.
    let mut dictionary: Vec<Range<usize>> = vec![0..0; FIRST_DICTIONARY_CODE as usize];
    let mut output = vec![first];
    dictionary.push(0..1);

    let mut w = 0..1;
    let mut width = CodeWidth::for_decompress();

    loop {
        if reader.is_exhausted() {
            return Err(CodecError::Truncated);
        }

        let code = reader.read_bits(width.num_bits());
        let start = output.len();

        match code {
            END_OF_STREAM => return Ok(output),
            LITERAL_8 | LITERAL_16 => {
                let unit = reader.read_bits(literal_width(code)) as u16;
                output.push(unit);
                dictionary.push(start..start + 1);
                width.grow();
            }
            _ => {
                let index = code as usize;
                if let Some(entry) = dictionary.get(index) {
                    output.extend_from_within(entry.clone());
                } else if index == dictionary.len() {
                    // The entry being defined by this very code: w + w[0].
                    output.extend_from_within(w.clone());
                    output.push(output[w.start]);
                } else {
                    return Err(CodecError::InvalidCode {
                        code,
                        next: dictionary.len() as u32,
                    });
                }
            }
        }

        if output.len() > max_output_units {
            return Err(CodecError::OutputTooLarge {
                max: max_output_units,
            });
        }

        // w + entry[0]; `w` ends exactly where this entry starts.
        dictionary.push(w.start..start + 1);
        width.grow();
        w = start..output.len();
    }
}
