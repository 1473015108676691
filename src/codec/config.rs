//! Resource ceilings and the configured codec facade.

use crate::error::{CodecError, Result};
use crate::formats::{self, Format};

/// Limits applied by [`LzCodec`].
///
/// The dictionary grows with the input, and a hostile encoded payload can
/// expand far beyond its own size, so production callers should keep both
/// ceilings finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfiguration {
    /// Largest input, in UTF-16 code units, accepted for compression.
    ///
    /// Default: 16 Mi units.
    pub max_input_units: usize,

    /// Largest output, in UTF-16 code units, produced by decompression.
    ///
    /// Default: 64 Mi units.
    pub max_output_units: usize,
}

impl CodecConfiguration {
    pub const DEFAULT_MAX_INPUT_UNITS: usize = 16 * 1024 * 1024;
    pub const DEFAULT_MAX_OUTPUT_UNITS: usize = 64 * 1024 * 1024;

    /// No ceilings at all.
    pub fn unlimited() -> Self {
        Self {
            max_input_units: usize::MAX,
            max_output_units: usize::MAX,
        }
    }

    pub fn with_max_input_units(mut self, max: usize) -> Self {
        self.max_input_units = max;
        self
    }

    pub fn with_max_output_units(mut self, max: usize) -> Self {
        self.max_output_units = max;
        self
    }
}

impl Default for CodecConfiguration {
    fn default() -> Self {
        Self {
            max_input_units: Self::DEFAULT_MAX_INPUT_UNITS,
            max_output_units: Self::DEFAULT_MAX_OUTPUT_UNITS,
        }
    }
}

/// Codec bound to a [`CodecConfiguration`] and an output [`Format`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LzCodec {
    config: CodecConfiguration,
    format: Format,
}

impl LzCodec {
    pub fn new(config: CodecConfiguration) -> Self {
        Self {
            config,
            format: Format::default(),
        }
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn config(&self) -> &CodecConfiguration {
        &self.config
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Compress `input` into the configured text format.
    pub fn compress(&self, input: &str) -> Result<String> {
        let units: Vec<u16> = input.encode_utf16().collect();
        if units.len() > self.config.max_input_units {
            return Err(CodecError::InputTooLarge {
                len: units.len(),
                max: self.config.max_input_units,
            });
        }
        Ok(formats::compress_units_to(self.format, &units))
    }

    /// Decompress text in the configured format.
    pub fn decompress(&self, input: &str) -> Result<String> {
        formats::decompress_from(self.format, input, self.config.max_output_units)
    }

    /// Compress into the Base64 format regardless of the configured format.
    pub fn compress_to_base64(&self, input: &str) -> Result<String> {
        self.with_format(Format::Base64).compress(input)
    }

    /// Decompress from the Base64 format regardless of the configured format.
    pub fn decompress_from_base64(&self, input: &str) -> Result<String> {
        self.with_format(Format::Base64).decompress(input)
    }
}
