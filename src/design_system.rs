use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::errors::{Result, SuggestError};
use crate::parser::segment;

/// Sentinel value meaning "the variant itself, without a value suffix".
pub const DEFAULT_VALUE: &str = "DEFAULT";

/// Utility appended to a variant name when probing whether it compiles.
pub const PROBE_UTILITY: &str = "[color:red]";

/// A variant's selectors capability.
///
/// `value` is `None` for the bare variant. Implementations may fail; the
/// suggestion engine treats a failure like an empty list.
pub trait SelectorSource: Send + Sync {
    fn selectors(&self, value: Option<&str>) -> Result<Vec<String>>;
}

/// The CSS-compilation side of a design system.
///
/// Returns one entry per candidate, `None` for candidates that produce no CSS.
pub trait DesignSystem: Send + Sync {
    fn compile(&self, candidates: &[String]) -> Vec<Option<String>>;
}

/// Selectors known up front: a bare list, a `{value}` template, and per-value overrides.
#[derive(Debug, Clone, Default)]
pub struct StaticSelectors {
    variant: String,
    bare: Vec<String>,
    template: Vec<String>,
    overrides: HashMap<String, Vec<String>>,
}

impl StaticSelectors {
    pub fn new(variant: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            ..Self::default()
        }
    }

    pub fn with_bare<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bare = selectors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_template<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.template = selectors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_override<I, S>(mut self, value: impl Into<String>, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overrides
            .insert(value.into(), selectors.into_iter().map(Into::into).collect());
        self
    }
}

impl SelectorSource for StaticSelectors {
    fn selectors(&self, value: Option<&str>) -> Result<Vec<String>> {
        let Some(value) = value else {
            if self.bare.is_empty() && !self.template.is_empty() {
                return Err(SuggestError::Selector {
                    variant: self.variant.clone(),
                    reason: "variant requires a value".into(),
                });
            }
            return Ok(self.bare.clone());
        };
        if let Some(found) = self.overrides.get(value) {
            return Ok(found.clone());
        }
        if value == DEFAULT_VALUE && self.template.is_empty() {
            return Ok(self.bare.clone());
        }
        Ok(self
            .template
            .iter()
            .map(|t| t.replace("{value}", value))
            .collect())
    }
}

/// Selector source that always fails. Handy for variants whose selectors
/// cannot be computed in the current environment.
#[derive(Debug, Clone)]
pub struct FailingSelectors {
    pub variant: String,
    pub reason: String,
}

impl SelectorSource for FailingSelectors {
    fn selectors(&self, _value: Option<&str>) -> Result<Vec<String>> {
        Err(SuggestError::Selector {
            variant: self.variant.clone(),
            reason: self.reason.clone(),
        })
    }
}

/// Compiles candidates against a fixed catalog of variants and classes.
///
/// A candidate is `part<sep>part<sep>...<sep>utility`. Every leading part must be
/// a known variant, a functional form (`root-value`, `root-[...]`) of a dashed
/// variant or arbitrary root, or a bracketed selector like `[&:hover]`. The
/// utility must be a known class or an arbitrary property `[prop:value]`.
#[derive(Debug, Clone)]
pub struct CatalogDesignSystem {
    separator: String,
    variants: HashSet<String>,
    // Variants that accept `name-value`, with their allowed values.
    functional: HashMap<String, HashSet<String>>,
    arbitrary_roots: HashSet<String>,
    classes: HashSet<String>,
}

impl CatalogDesignSystem {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            variants: HashSet::new(),
            functional: HashMap::new(),
            arbitrary_roots: HashSet::new(),
            classes: HashSet::new(),
        }
    }

    pub fn add_variant(&mut self, name: &str, has_dash: bool, values: &[String]) {
        self.variants.insert(name.to_string());
        if has_dash {
            self.functional
                .entry(name.to_string())
                .or_default()
                .extend(values.iter().cloned());
        }
    }

    pub fn add_arbitrary_root(&mut self, root: &str) {
        self.arbitrary_roots.insert(root.to_string());
    }

    pub fn add_class(&mut self, class_name: &str) {
        self.classes.insert(class_name.to_string());
    }

    pub fn into_shared(self) -> Arc<dyn DesignSystem> {
        Arc::new(self)
    }

    fn compile_one(&self, candidate: &str) -> Option<String> {
        let sep = self.separator.chars().next()?;
        let parts = segment(candidate, sep).ok()?;
        let (utility, variants) = parts.split_last()?;
        if utility.is_empty() || !variants.iter().all(|v| self.accepts_variant(v)) {
            return None;
        }
        let declaration = self.declaration(utility)?;
        let selector = variants.iter().map(|v| format!("[{v}]")).collect::<String>();
        Some(format!(".{selector}{utility} {{ {declaration} }}"))
    }

    fn accepts_variant(&self, part: &str) -> bool {
        if self.variants.contains(part) || is_bracketed(part) {
            return true;
        }
        let Some((root, value)) = split_functional(part) else {
            return false;
        };
        if self.arbitrary_roots.contains(root) {
            return true;
        }
        match self.functional.get(root) {
            Some(values) => is_bracketed(value) || values.contains(value),
            None => false,
        }
    }

    fn declaration(&self, utility: &str) -> Option<String> {
        if self.classes.contains(utility) {
            return Some(format!("/* {utility} */"));
        }
        let inner = utility.strip_prefix('[')?.strip_suffix(']')?;
        let (prop, value) = inner.split_once(':')?;
        if prop.is_empty() || value.is_empty() {
            return None;
        }
        Some(format!("{prop}: {value};"))
    }
}

impl DesignSystem for CatalogDesignSystem {
    fn compile(&self, candidates: &[String]) -> Vec<Option<String>> {
        candidates.iter().map(|c| self.compile_one(c)).collect()
    }
}

fn is_bracketed(part: &str) -> bool {
    part.len() > 2 && part.starts_with('[') && part.ends_with(']')
}

// `aria-[busy]` -> (`aria`, `[busy]`), `data-open` -> (`data`, `open`).
fn split_functional(part: &str) -> Option<(&str, &str)> {
    if let Some(open) = part.find("-[") {
        return Some((&part[..open], &part[open + 1..]));
    }
    part.split_once('-').filter(|(root, value)| !root.is_empty() && !value.is_empty())
}
