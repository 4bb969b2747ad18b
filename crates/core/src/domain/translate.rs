use std::collections::HashMap;

/// Source of translated strings. `None` means the key has no translation
/// and the caller should fall back.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> Option<String>;
}

/// Translator that never translates. Every label falls back to catalog
/// data or derived text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslations;

impl Translator for NoTranslations {
    fn translate(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Map-backed translator for embedders that carry a string table.
#[derive(Debug, Clone, Default)]
pub struct StaticTranslations {
    entries: HashMap<String, String>,
}

impl StaticTranslations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl Translator for StaticTranslations {
    fn translate(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
