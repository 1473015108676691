//! # lzcodec
//!
//! A pure Rust implementation of the lz-string text compression format.
//!
//! The codec is an LZ78-family, dictionary-based compressor that packs
//! variable-width codes into fixed-width symbols and renders them through a
//! character alphabet. Payloads produced by browser content round-trip
//! through this crate unchanged.
//!
//! ## Quick Start
//!
//! ```rust
//! use lzcodec::{compress_to_base64, decompress_from_base64};
//!
//! let packed = compress_to_base64("The quick brown fox");
//! assert_eq!(packed.len() % 4, 0);
//! assert_eq!(decompress_from_base64(&packed)?, "The quick brown fox");
//! # Ok::<(), lzcodec::CodecError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`codec`] - compress/decompress over abstract symbol sinks and sources
//! - [`alphabet`] - Base64 and URI-safe symbol tables
//! - [`formats`] - Base64, URI component, UTF-16, raw and byte renderings
//! - [`patch`] - resume position patcher for compressed progress payloads
//!
//! ## Limitations
//!
//! Text is compressed as UTF-16 code units, so every literal fits the
//! format's 16-bit ceiling. Characters outside the Basic Multilingual Plane
//! are carried as surrogate pairs.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod alphabet;
pub mod codec;
pub mod error;
pub mod formats;
pub mod patch;

pub use alphabet::{Alphabet, BASE64, URI_SAFE};
pub use codec::{CodecConfiguration, LzCodec};
pub use error::{CodecError, PatchError, Result};
pub use formats::{
    compress, compress_to_base64, compress_to_encoded_uri_component, compress_to_uint8_array,
    compress_to_utf16, decompress, decompress_from_base64, decompress_from_encoded_uri_component,
    decompress_from_uint8_array, decompress_from_utf16, Format,
};
pub use patch::{
    reposition_field, FieldKind, FieldKinds, PatchOutcome, PatchReport, PatcherConfiguration,
    PayloadPatcher,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
