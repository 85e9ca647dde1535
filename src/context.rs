use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::design_system::{DesignSystem, SelectorSource};
use crate::errors::{Result, SuggestError};

pub const DEFAULT_SEPARATOR: &str = ":";

/// A named modifier that can prefix a class name.
#[derive(Clone)]
pub struct Variant {
    pub name: String,
    pub is_arbitrary: bool,
    /// Whether values attach as `name-value` rather than `namevalue`.
    pub has_dash: bool,
    /// May contain the [`DEFAULT_VALUE`](crate::design_system::DEFAULT_VALUE) sentinel.
    pub values: Vec<String>,
    pub selectors: Arc<dyn SelectorSource>,
}

impl Variant {
    pub fn new(name: impl Into<String>, selectors: Arc<dyn SelectorSource>) -> Self {
        Self {
            name: name.into(),
            is_arbitrary: false,
            has_dash: false,
            values: Vec::new(),
            selectors,
        }
    }

    pub fn arbitrary(mut self, has_dash: bool) -> Self {
        self.is_arbitrary = true;
        self.has_dash = has_dash;
        self
    }

    pub fn with_dash(mut self, has_dash: bool) -> Self {
        self.has_dash = has_dash;
        self
    }

    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variant")
            .field("name", &self.name)
            .field("is_arbitrary", &self.is_arbitrary)
            .field("has_dash", &self.has_dash)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

/// A literal class name plus whatever metadata the design system attached to it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ClassEntry {
    Name(String),
    WithMeta(String, Value),
}

impl ClassEntry {
    pub fn name(&self) -> &str {
        match self {
            ClassEntry::Name(name) | ClassEntry::WithMeta(name, _) => name,
        }
    }
}

impl From<&str> for ClassEntry {
    fn from(name: &str) -> Self {
        ClassEntry::Name(name.to_string())
    }
}

/// Read-only inputs for one completion session.
#[derive(Clone)]
pub struct Context {
    separator: String,
    /// Declaration order is the ranking order.
    pub variants: Vec<Variant>,
    pub class_list: Vec<ClassEntry>,
    pub blocklist: Option<HashSet<String>>,
    pub design_system: Option<Arc<dyn DesignSystem>>,
}

impl Context {
    pub fn new(variants: Vec<Variant>, class_list: Vec<ClassEntry>) -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            variants,
            class_list,
            blocklist: None,
            design_system: None,
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Result<Self> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(SuggestError::EmptySeparator);
        }
        self.separator = separator;
        Ok(self)
    }

    pub fn with_blocklist<I, S>(mut self, blocklist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocklist = Some(blocklist.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_design_system(mut self, design_system: Arc<dyn DesignSystem>) -> Self {
        self.design_system = Some(design_system);
        self
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// The character the tokenizer splits on.
    pub(crate) fn separator_char(&self) -> char {
        // Construction guarantees a non-empty separator.
        self.separator.chars().next().unwrap_or(':')
    }

    pub(crate) fn is_blocked(&self, key: &str) -> bool {
        self.blocklist
            .as_ref()
            .is_some_and(|blocked| blocked.contains(key))
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("separator", &self.separator)
            .field("variants", &self.variants)
            .field("class_list", &self.class_list.len())
            .field("blocklist", &self.blocklist)
            .field("design_system", &self.design_system.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design_system::StaticSelectors;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_to_colon_separator() {
        let ctx = Context::new(Vec::new(), Vec::new());
        assert_eq!(ctx.separator(), ":");
        assert!(ctx.design_system.is_none());
        assert!(!ctx.is_blocked("hover:flex"));
    }

    #[test]
    fn rejects_empty_separator() {
        let err = Context::new(Vec::new(), Vec::new()).with_separator("");
        assert!(matches!(err, Err(SuggestError::EmptySeparator)));
    }

    #[test]
    fn class_entries_deserialize_with_or_without_metadata() {
        let entries: Vec<ClassEntry> =
            serde_json::from_str(r#"["flex", ["hidden", {"color": null}]]"#).unwrap();
        let names: Vec<&str> = entries.iter().map(ClassEntry::name).collect();
        assert_eq!(names, vec!["flex", "hidden"]);
    }

    #[test]
    fn variant_builder() {
        let v = Variant::new("aria", Arc::new(StaticSelectors::new("aria")))
            .arbitrary(true)
            .with_values(["busy", "checked"]);
        assert!(v.is_arbitrary && v.has_dash);
        assert_eq!(v.values, vec!["busy", "checked"]);
    }
}
