//! Compression: longest-match incremental dictionary, single forward scan.

use ahash::{AHashMap, AHashSet};

use super::bit_writer::BitWriter;
use super::{CodeWidth, SymbolSink, END_OF_STREAM, FIRST_DICTIONARY_CODE, LITERAL_16, LITERAL_8};

/// The sequence matched so far, identified by its dictionary code.
#[derive(Debug, Clone, Copy)]
struct Match {
    code: u32,
    /// First code unit of the sequence, needed for the literal escape.
    lead: u16,
}

/// Sequence-to-code dictionary.
///
/// Single units are keyed by the unit. Longer sequences are keyed by the code
/// of their prefix plus their last unit, which identifies them uniquely since
/// every prefix was itself registered before its extensions.
struct Dictionary {
    literals: AHashMap<u16, u32>,
    phrases: AHashMap<(u32, u16), u32>,
    /// Literal codes registered but not yet written to the stream.
    pending: AHashSet<u32>,
    next_code: u32,
}

impl Dictionary {
    fn new() -> Self {
        Self {
            literals: AHashMap::new(),
            phrases: AHashMap::new(),
            pending: AHashSet::new(),
            next_code: FIRST_DICTIONARY_CODE,
        }
    }

    fn next(&mut self) -> u32 {
        let code = self.next_code;
        self.next_code += 1;
        code
    }

    /// Code for a single unit, registering it as pending on first sight.
    fn literal(&mut self, unit: u16) -> u32 {
        if let Some(&code) = self.literals.get(&unit) {
            return code;
        }
        let code = self.next();
        self.literals.insert(unit, code);
        self.pending.insert(code);
        code
    }
}

struct Compressor<S> {
    writer: BitWriter<S>,
    dictionary: Dictionary,
    width: CodeWidth,
}

impl<S: SymbolSink> Compressor<S> {
    fn new(bits_per_char: u32, sink: S) -> Self {
        Self {
            writer: BitWriter::new(bits_per_char, sink),
            dictionary: Dictionary::new(),
            width: CodeWidth::for_compress(),
        }
    }

    /// Write `w`: a literal escape on its first use, its code otherwise.
    fn emit(&mut self, w: Match) {
        if self.dictionary.pending.remove(&w.code) {
            let lead = u32::from(w.lead);
            if lead < 256 {
                self.writer.write_bits(LITERAL_8, self.width.num_bits());
                self.writer.write_bits(lead, 8);
            } else {
                self.writer.write_bits(LITERAL_16, self.width.num_bits());
                self.writer.write_bits(lead, 16);
            }
            self.width.grow();
        } else {
            self.writer.write_bits(w.code, self.width.num_bits());
        }
        self.width.grow();
    }

    fn run(mut self, units: &[u16]) -> S {
        let mut w: Option<Match> = None;

        for &c in units {
            let c_code = self.dictionary.literal(c);
            let single = Match { code: c_code, lead: c };

            let Some(current) = w else {
                w = Some(single);
                continue;
            };

            if let Some(&code) = self.dictionary.phrases.get(&(current.code, c)) {
                w = Some(Match {
                    code,
                    lead: current.lead,
                });
            } else {
                self.emit(current);
                let code = self.dictionary.next();
                self.dictionary.phrases.insert((current.code, c), code);
                w = Some(single);
            }
        }

        if let Some(current) = w {
            self.emit(current);
        }

        self.writer.write_bits(END_OF_STREAM, self.width.num_bits());
        self.writer.finish()
    }
}

/// Compress UTF-16 code units into `bits_per_char`-wide symbols.
///
/// Empty input produces no symbols at all. Otherwise the stream ends with the
/// end-of-stream code and is zero-padded to a whole symbol.
pub fn compress_units<S: SymbolSink>(units: &[u16], bits_per_char: u32, sink: S) -> S {
    if units.is_empty() {
        return sink;
    }
    Compressor::new(bits_per_char, sink).run(units)
}
