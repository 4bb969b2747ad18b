use promptforge_core::domain::catalog::{OptionCatalogs, OptionGroup};
use promptforge_core::domain::translate::Translator;

/// Resolves option ids to display text.
///
/// Resolution order: translation table, then catalog label (with the
/// description appended when one exists), then a label derived from the
/// id itself. The same chain runs everywhere an id becomes text, so the
/// preview and the final document always agree.
pub struct LabelResolver<'a> {
    catalogs: &'a dyn OptionCatalogs,
    translator: &'a dyn Translator,
}

impl<'a> LabelResolver<'a> {
    pub fn new(catalogs: &'a dyn OptionCatalogs, translator: &'a dyn Translator) -> Self {
        Self {
            catalogs,
            translator,
        }
    }

    pub fn resolve(&self, group: OptionGroup, id: &str) -> String {
        let key = format!("options.{}.{}", group.as_str(), id);
        if let Some(translated) = self.translator.translate(&key) {
            return translated;
        }
        if let Some(option) = self.catalogs.find(group, id) {
            let label = option.label.trim();
            if !label.is_empty() {
                return match option.description.as_deref().map(str::trim) {
                    Some(description) if !description.is_empty() => {
                        format!("{label} - {description}")
                    }
                    _ => label.to_string(),
                };
            }
        }
        humanize_identifier(id)
    }
}

/// Derive a readable label from a camelCase identifier: insert a space
/// before each internal uppercase character and uppercase the first one.
pub fn humanize_identifier(id: &str) -> String {
    let mut out = String::with_capacity(id.len() + 4);
    for (i, ch) in id.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else {
            if ch.is_uppercase() {
                out.push(' ');
            }
            out.push(ch);
        }
    }
    out
}
