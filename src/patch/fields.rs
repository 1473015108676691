//! Resume position field rules.
//!
//! A progress payload records the slide to resume at in up to four places:
//!
//! | Kind | Example | Rewritten part |
//! |---|---|---|
//! | [`FieldKind::Location`] | `"l":5` | `5` |
//! | [`FieldKind::SceneSlide`] | `"scene_slide":"1_5"` | `5` |
//! | [`FieldKind::ListLocation`] | `["l",5]` | `5` |
//! | [`FieldKind::ListSceneSlide`] | `["scene_slide","1_5"]` | `5` |
//!
//! Rules run in the order of that table and each one sees the text produced
//! by the previous rule.

use std::fmt;

use bitflags::bitflags;
use once_cell::sync::Lazy;
use regex::Regex;

use super::report::{FieldRewrite, PatchReport};

bitflags! {
    /// Set of field rules a patcher applies.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FieldKinds: u8 {
        /// `"l":N`
        const LOCATION = 0x1;
        /// `"scene_slide":"S_N"`
        const SCENE_SLIDE = 0x2;
        /// `["l",N]`
        const LIST_LOCATION = 0x4;
        /// `["scene_slide","S_N"]`
        const LIST_SCENE_SLIDE = 0x8;
    }
}

impl Default for FieldKinds {
    fn default() -> Self {
        Self::all()
    }
}

/// A single field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Location,
    SceneSlide,
    ListLocation,
    ListSceneSlide,
}

impl FieldKind {
    /// All rules, in application order.
    pub const ORDER: [FieldKind; 4] = [
        FieldKind::Location,
        FieldKind::SceneSlide,
        FieldKind::ListLocation,
        FieldKind::ListSceneSlide,
    ];

    /// The flag enabling this rule.
    pub fn flag(self) -> FieldKinds {
        match self {
            Self::Location => FieldKinds::LOCATION,
            Self::SceneSlide => FieldKinds::SCENE_SLIDE,
            Self::ListLocation => FieldKinds::LIST_LOCATION,
            Self::ListSceneSlide => FieldKinds::LIST_SCENE_SLIDE,
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Location => &*LOCATION,
            Self::SceneSlide => &*SCENE_SLIDE,
            Self::ListLocation => &*LIST_LOCATION,
            Self::ListSceneSlide => &*LIST_SCENE_SLIDE,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Location => write!(f, "l"),
            Self::SceneSlide => write!(f, "scene_slide"),
            Self::ListLocation => write!(f, "list:l"),
            Self::ListSceneSlide => write!(f, "list:scene_slide"),
        }
    }
}

// `prefix` is kept verbatim; only `value` is replaced.
static LOCATION: Lazy<Regex> = Lazy::new(|| compile(r#"(?P<prefix>"l"\s*:\s*"?)(?P<value>\d+)"#));
static SCENE_SLIDE: Lazy<Regex> =
    Lazy::new(|| compile(r#"(?P<prefix>"scene_slide"\s*:\s*"?\d+_)(?P<value>\d+)"#));
static LIST_LOCATION: Lazy<Regex> =
    Lazy::new(|| compile(r#"(?P<prefix>\[\s*"l"\s*,\s*"?)(?P<value>\d+)"#));
static LIST_SCENE_SLIDE: Lazy<Regex> =
    Lazy::new(|| compile(r#"(?P<prefix>\[\s*"scene_slide"\s*,\s*"?\d+_)(?P<value>\d+)"#));

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => panic!("invalid field pattern {pattern}: {e}"),
    }
}

/// Apply one rule, appending its rewrites to `report`.
fn apply(kind: FieldKind, text: &str, value: &str, report: &mut PatchReport) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in kind.pattern().captures_iter(text) {
        let Some(old) = caps.name("value") else {
            continue;
        };
        out.push_str(&text[last..old.start()]);
        report.push(FieldRewrite {
            kind,
            offset: out.len(),
            old_value: old.as_str().to_string(),
            new_value: value.to_string(),
        });
        out.push_str(value);
        last = old.end();
    }

    out.push_str(&text[last..]);
    out
}

/// Rewrite every enabled resume field in `text` to `slide_index`.
///
/// Offsets in the report point into the text as it stood after that rule ran.
pub fn rewrite_fields(text: &str, kinds: FieldKinds, slide_index: u32) -> (String, PatchReport) {
    let value = slide_index.to_string();
    let mut report = PatchReport::new();
    let mut current = text.to_string();

    for kind in FieldKind::ORDER {
        if kinds.contains(kind.flag()) {
            current = apply(kind, &current, &value, &mut report);
        }
    }

    (current, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location() {
        let (out, report) = rewrite_fields(r#"{"l":5,"x":7}"#, FieldKinds::all(), 2);
        assert_eq!(out, r#"{"l":2,"x":7}"#);
        assert_eq!(report.len(), 1);
        let rewrite = report.iter().next().unwrap();
        assert_eq!(rewrite.kind, FieldKind::Location);
        assert_eq!(rewrite.old_value, "5");
        assert_eq!(rewrite.new_value, "2");
        assert_eq!(rewrite.offset, 5);
    }

    #[test]
    fn test_whitespace_and_quotes_preserved() {
        let (out, _) = rewrite_fields(r#"{ "l" :  "12" }"#, FieldKinds::all(), 0);
        assert_eq!(out, r#"{ "l" :  "0" }"#);
    }

    #[test]
    fn test_scene_slide_keeps_scene() {
        let (out, report) = rewrite_fields(r#""scene_slide":"3_14""#, FieldKinds::all(), 6);
        assert_eq!(out, r#""scene_slide":"3_6""#);
        assert_eq!(report.iter().next().unwrap().old_value, "14");
    }

    #[test]
    fn test_list_variants() {
        let text = r#"{"v":[["l",4],["scene_slide","0_4"],["x",4]]}"#;
        let (out, report) = rewrite_fields(text, FieldKinds::all(), 1);
        assert_eq!(out, r#"{"v":[["l",1],["scene_slide","0_1"],["x",4]]}"#);
        let kinds: Vec<FieldKind> = report.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![FieldKind::ListLocation, FieldKind::ListSceneSlide]);
    }

    #[test]
    fn test_disabled_rules_are_skipped() {
        let text = r#"{"l":5,"scene_slide":"0_5"}"#;
        let (out, report) = rewrite_fields(text, FieldKinds::SCENE_SLIDE, 0);
        assert_eq!(out, r#"{"l":5,"scene_slide":"0_0"}"#);
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_rule_order_not_text_order() {
        // The scene_slide field comes first in the text, but the location rule
        // runs first.
        let text = r#"{"scene_slide":"0_5","l":5}"#;
        let (_, report) = rewrite_fields(text, FieldKinds::all(), 2);
        let kinds: Vec<FieldKind> = report.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![FieldKind::Location, FieldKind::SceneSlide]);
    }

    #[test]
    fn test_no_match() {
        let (out, report) = rewrite_fields(r#"{"lx":5,"ll":3}"#, FieldKinds::all(), 2);
        assert_eq!(out, r#"{"lx":5,"ll":3}"#);
        assert!(report.is_empty());
    }

    #[test]
    fn test_default_kinds_is_all() {
        assert_eq!(FieldKinds::default(), FieldKinds::all());
    }
}
