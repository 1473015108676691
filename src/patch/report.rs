//! Record of the field rewrites made while patching a payload.
//!
//! The patcher never fails on a field it could rewrite, so the report is how
//! a caller learns what actually happened: which rules matched, where, and
//! what the previous values were.

use std::fmt;

use super::fields::FieldKind;

/// A single rewritten field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRewrite {
    /// The rule that matched.
    pub kind: FieldKind,
    /// Byte offset of the new value in the rewritten text.
    pub offset: usize,
    /// The value before the rewrite, as written in the payload.
    pub old_value: String,
    /// The value written in its place.
    pub new_value: String,
}

impl FieldRewrite {
    /// Whether the rewrite changed the text.
    pub fn is_change(&self) -> bool {
        self.old_value != self.new_value
    }
}

impl fmt::Display for FieldRewrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] @{}: {} -> {}",
            self.kind, self.offset, self.old_value, self.new_value
        )
    }
}

/// Rewrites in the order they were applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchReport {
    items: Vec<FieldRewrite>,
}

impl PatchReport {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, rewrite: FieldRewrite) {
        self.items.push(rewrite);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldRewrite> {
        self.items.iter()
    }

    /// Rewrites made by one rule.
    pub fn of_kind(&self, kind: FieldKind) -> Vec<&FieldRewrite> {
        self.items.iter().filter(|r| r.kind == kind).collect()
    }

    /// Number of rewrites that changed a value.
    pub fn changed(&self) -> usize {
        self.items.iter().filter(|r| r.is_change()).count()
    }

    pub fn into_vec(self) -> Vec<FieldRewrite> {
        self.items
    }
}

impl IntoIterator for PatchReport {
    type Item = FieldRewrite;
    type IntoIter = std::vec::IntoIter<FieldRewrite>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a PatchReport {
    type Item = &'a FieldRewrite;
    type IntoIter = std::slice::Iter<'a, FieldRewrite>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(kind: FieldKind, old: &str, new: &str) -> FieldRewrite {
        FieldRewrite {
            kind,
            offset: 0,
            old_value: old.to_string(),
            new_value: new.to_string(),
        }
    }

    #[test]
    fn test_report_counts() {
        let mut report = PatchReport::new();
        assert!(report.is_empty());
        report.push(rewrite(FieldKind::Location, "5", "2"));
        report.push(rewrite(FieldKind::SceneSlide, "2", "2"));
        assert_eq!(report.len(), 2);
        assert_eq!(report.changed(), 1);
        assert_eq!(report.of_kind(FieldKind::SceneSlide).len(), 1);
        assert!(report.of_kind(FieldKind::ListLocation).is_empty());
    }

    #[test]
    fn test_rewrite_display() {
        let r = rewrite(FieldKind::ListSceneSlide, "14", "6");
        assert_eq!(r.to_string(), "[list:scene_slide] @0: 14 -> 6");
    }

    #[test]
    fn test_into_iter_preserves_order() {
        let mut report = PatchReport::new();
        report.push(rewrite(FieldKind::Location, "1", "0"));
        report.push(rewrite(FieldKind::ListLocation, "1", "0"));
        let kinds: Vec<FieldKind> = report.into_iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![FieldKind::Location, FieldKind::ListLocation]);
    }
}
