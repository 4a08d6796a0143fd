//! Markdown syntax settings shared by the editor.
//!
//! Every [`Editor`](crate::Editor) built with `Editor::new()` holds a handle
//! to one process-wide [`MarkdownSettings`] value, so a change made through
//! any editor is seen by all of them. Call [`SharedMarkdown::detach`] for an
//! independent copy. A handle produced by deserialization is always detached.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::{Arc, LazyLock};

/// Inline Markdown syntax toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownSettings {
    /// `*emphasis*` with asterisks
    #[serde(default = "crate::defaults::bool_true")]
    pub inline_asterisk: bool,
    /// `_emphasis_` with underscores
    #[serde(default = "crate::defaults::bool_true")]
    pub inline_underscore: bool,
    /// `^superscript^`
    #[serde(default = "crate::defaults::bool_true")]
    pub inline_sup: bool,
    /// `~subscript~`
    #[serde(default = "crate::defaults::bool_true")]
    pub inline_sub: bool,
    /// `#tag#`
    #[serde(default = "crate::defaults::bool_true")]
    pub inline_tag: bool,
    /// `$math$`
    #[serde(default = "crate::defaults::bool_true")]
    pub inline_math: bool,
    /// `~~strikethrough~~`
    #[serde(default = "crate::defaults::bool_true")]
    pub inline_strikethrough: bool,
    /// `==mark==`
    #[serde(default = "crate::defaults::bool_true")]
    pub inline_mark: bool,
}

impl Default for MarkdownSettings {
    fn default() -> Self {
        Self {
            inline_asterisk: true,
            inline_underscore: true,
            inline_sup: true,
            inline_sub: true,
            inline_tag: true,
            inline_math: true,
            inline_strikethrough: true,
            inline_mark: true,
        }
    }
}

static DEFAULT_SETTINGS: LazyLock<SharedMarkdown> =
    LazyLock::new(|| SharedMarkdown::new(MarkdownSettings::default()));

/// The process-wide Markdown settings every new editor starts from.
pub fn default_settings() -> SharedMarkdown {
    DEFAULT_SETTINGS.clone()
}

/// Cheap-clone handle to a [`MarkdownSettings`] value.
///
/// Cloning shares the value; equality compares contents.
#[derive(Clone)]
pub struct SharedMarkdown(Arc<RwLock<MarkdownSettings>>);

impl SharedMarkdown {
    pub fn new(settings: MarkdownSettings) -> Self {
        Self(Arc::new(RwLock::new(settings)))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, MarkdownSettings> {
        self.0.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, MarkdownSettings> {
        self.0.write()
    }

    /// Copy of the current settings.
    pub fn snapshot(&self) -> MarkdownSettings {
        self.0.read().clone()
    }

    /// Deep copy into a handle no other holder sees.
    pub fn detach(&self) -> Self {
        Self::new(self.snapshot())
    }

    /// Whether both handles point at the same settings value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for SharedMarkdown {
    fn default() -> Self {
        default_settings()
    }
}

impl PartialEq for SharedMarkdown {
    fn eq(&self, other: &Self) -> bool {
        // Never hold both locks at once.
        self.ptr_eq(other) || self.snapshot() == *other.0.read()
    }
}

impl std::fmt::Debug for SharedMarkdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedMarkdown")
            .field(&*self.0.read())
            .finish()
    }
}

impl Serialize for SharedMarkdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.read().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SharedMarkdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        MarkdownSettings::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_shared() {
        let a = default_settings();
        let b = default_settings();
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_detach_breaks_aliasing() {
        let shared = SharedMarkdown::new(MarkdownSettings::default());
        let alias = shared.clone();
        let copy = shared.detach();

        shared.write().inline_tag = false;

        assert!(!alias.read().inline_tag);
        assert!(copy.read().inline_tag);
        assert!(!copy.ptr_eq(&shared));
    }

    #[test]
    fn test_equality_across_threads() {
        let a = SharedMarkdown::new(MarkdownSettings::default());
        let b = SharedMarkdown::new(MarkdownSettings::default());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let (x, y) = if i % 2 == 0 {
                    (a.clone(), b.clone())
                } else {
                    (b.clone(), a.clone())
                };
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        x.write().inline_mark = true;
                        assert!(x == y);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        b.write().inline_mark = false;
        assert_ne!(a, b);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let shared = SharedMarkdown::new(MarkdownSettings {
            inline_math: false,
            ..Default::default()
        });
        let value = serde_json::to_value(&shared).unwrap();
        assert_eq!(value["inlineMath"], false);
        assert_eq!(value["inlineStrikethrough"], true);
    }

    #[test]
    fn test_partial_object_fills_defaults() {
        let shared: SharedMarkdown = serde_json::from_str(r#"{"inlineSup": false}"#).unwrap();
        assert!(!shared.read().inline_sup);
        assert!(shared.read().inline_sub);
        assert!(!shared.ptr_eq(&default_settings()));
    }
}
