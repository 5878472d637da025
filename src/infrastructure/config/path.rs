//! Dotted field paths used in error messages.

use std::fmt;

/// Location of a value inside a sync document.
///
/// Rendered as keys joined with `.` and sequence indices as `[i]`, e.g.
/// `sync.collections[0].batch.maxRecords`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    /// The document root.
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Path of the child `key` of this mapping.
    #[must_use]
    pub fn key(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(key.to_owned())
        } else {
            Self(format!("{}.{key}", self.0))
        }
    }

    /// Path of element `index` of this sequence.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    /// Whether this is the document root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Rendered path; empty for the root.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("document root")
        } else {
            f.write_str(&self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_path_rendering() {
        let path = FieldPath::root()
            .key("sync")
            .key("collections")
            .index(0)
            .key("batch")
            .key("maxRecords");
        assert_eq!(path.to_string(), "sync.collections[0].batch.maxRecords");
    }

    #[test]
    fn test_root_rendering() {
        assert!(FieldPath::root().is_root());
        assert_eq!(FieldPath::root().to_string(), "document root");
        assert_eq!(FieldPath::root().key("mongodb").as_str(), "mongodb");
    }
}
