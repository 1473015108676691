//! Resume position patcher for compressed progress payloads.
//!
//! A progress payload (e.g. SCORM `cmi.suspend_data`) is Base64 lz-string
//! text. The patcher decompresses it, points every resume field at a new
//! slide and compresses it again:
//!
//! ```rust
//! use lzcodec::{compress_to_base64, decompress_from_base64, reposition_field};
//!
//! let payload = compress_to_base64(r#"{"l":5,"v":1}"#);
//! let moved = reposition_field(&payload, 3).unwrap();
//! assert_eq!(decompress_from_base64(&moved).unwrap(), r#"{"l":2,"v":1}"#);
//! ```

pub mod fields;
pub mod report;

pub use fields::{rewrite_fields, FieldKind, FieldKinds};
pub use report::{FieldRewrite, PatchReport};

use tracing::debug;

use crate::codec::{CodecConfiguration, LzCodec};
use crate::error::PatchError;

/// Configuration for [`PayloadPatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatcherConfiguration {
    /// Rules to apply. Default: all of them.
    pub fields: FieldKinds,

    /// Ceilings for decompressing and re-compressing the payload.
    pub codec: CodecConfiguration,
}

impl PatcherConfiguration {
    pub fn with_fields(mut self, fields: FieldKinds) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_codec(mut self, codec: CodecConfiguration) -> Self {
        self.codec = codec;
        self
    }
}

/// Result of a successful patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// At least one field changed; `payload` is the re-compressed text.
    Repositioned { payload: String, report: PatchReport },
    /// Every matched field already held the target value.
    Unchanged(PatchReport),
}

impl PatchOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Repositioned { .. })
    }

    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Repositioned { payload, .. } => Some(payload),
            Self::Unchanged(_) => None,
        }
    }

    pub fn into_payload(self) -> Option<String> {
        match self {
            Self::Repositioned { payload, .. } => Some(payload),
            Self::Unchanged(_) => None,
        }
    }

    pub fn report(&self) -> &PatchReport {
        match self {
            Self::Repositioned { report, .. } | Self::Unchanged(report) => report,
        }
    }
}

/// Rewrites the resume position inside Base64 compressed payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadPatcher {
    config: PatcherConfiguration,
}

impl PayloadPatcher {
    pub fn new(config: PatcherConfiguration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PatcherConfiguration {
        &self.config
    }

    /// Point every enabled resume field at `target_slide` (1-indexed).
    ///
    /// Fields store the 0-indexed slide, so they are written as
    /// `target_slide - 1`. Nothing outside the field values is touched.
    pub fn reposition(&self, compressed: &str, target_slide: u32) -> Result<PatchOutcome, PatchError> {
        if target_slide == 0 {
            return Err(PatchError::InvalidTarget(target_slide));
        }

        let codec = LzCodec::new(self.config.codec);
        let payload = codec.decompress_from_base64(compressed)?;

        let (rewritten, report) = rewrite_fields(&payload, self.config.fields, target_slide - 1);
        if report.is_empty() {
            debug!(target_slide, "no resume field found in payload");
            return Err(PatchError::FieldNotFound);
        }

        for rewrite in &report {
            debug!(
                kind = %rewrite.kind,
                offset = rewrite.offset,
                old = %rewrite.old_value,
                new = %rewrite.new_value,
                "rewrote resume field"
            );
        }

        if rewritten == payload {
            debug!(target_slide, fields = report.len(), "payload already at target slide");
            return Ok(PatchOutcome::Unchanged(report));
        }

        let payload = codec.compress_to_base64(&rewritten)?;
        Ok(PatchOutcome::Repositioned { payload, report })
    }
}

/// Reposition a payload with the default patcher.
///
/// Returns `Some` only when the payload changed. A payload that fails to
/// decompress, has no resume field, or is already at the target all yield
/// `None`; use [`PayloadPatcher::reposition`] to tell those apart.
pub fn reposition_field(compressed: &str, target_slide: u32) -> Option<String> {
    PayloadPatcher::default()
        .reposition(compressed, target_slide)
        .ok()
        .and_then(PatchOutcome::into_payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::{compress_to_base64, decompress_from_base64};

    #[test]
    fn test_reposition_location() {
        let payload = compress_to_base64(r#"{"l":5}"#);
        let outcome = PayloadPatcher::default().reposition(&payload, 3).unwrap();
        assert!(outcome.is_changed());
        assert_eq!(outcome.report().changed(), 1);
        let text = decompress_from_base64(outcome.payload().unwrap()).unwrap();
        assert_eq!(text, r#"{"l":2}"#);
    }

    #[test]
    fn test_unchanged() {
        let payload = compress_to_base64(r#"{"l":2}"#);
        let outcome = PayloadPatcher::default().reposition(&payload, 3).unwrap();
        assert!(!outcome.is_changed());
        assert_eq!(outcome.report().len(), 1);
        assert_eq!(outcome.payload(), None);
    }

    #[test]
    fn test_zero_target() {
        let payload = compress_to_base64(r#"{"l":2}"#);
        assert_eq!(
            PayloadPatcher::default().reposition(&payload, 0),
            Err(PatchError::InvalidTarget(0))
        );
    }

    #[test]
    fn test_field_not_found() {
        let payload = compress_to_base64(r#"{"v":1}"#);
        assert_eq!(
            PayloadPatcher::default().reposition(&payload, 3),
            Err(PatchError::FieldNotFound)
        );
        assert_eq!(
            PayloadPatcher::default().reposition("", 3),
            Err(PatchError::FieldNotFound)
        );
    }

    #[test]
    fn test_undecodable_payload() {
        // Control code 3 in the first symbol.
        let result = PayloadPatcher::default().reposition("w===", 3);
        assert!(matches!(result, Err(PatchError::Codec(_))));
    }

    #[test]
    fn test_restricted_fields() {
        let payload = compress_to_base64(r#"{"l":5,"scene_slide":"0_5"}"#);
        let patcher =
            PayloadPatcher::new(PatcherConfiguration::default().with_fields(FieldKinds::LOCATION));
        let outcome = patcher.reposition(&payload, 1).unwrap();
        let text = decompress_from_base64(outcome.payload().unwrap()).unwrap();
        assert_eq!(text, r#"{"l":0,"scene_slide":"0_5"}"#);
    }

    #[test]
    fn test_legacy_entry_point() {
        let payload = compress_to_base64(r#"{"l":5}"#);
        assert!(reposition_field(&payload, 3).is_some());
        assert!(reposition_field(&payload, 6).is_none());
        assert!(reposition_field("", 3).is_none());
    }
}
