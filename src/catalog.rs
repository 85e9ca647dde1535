use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::context::{ClassEntry, Context, Variant, DEFAULT_SEPARATOR};
use crate::design_system::{CatalogDesignSystem, StaticSelectors};
use crate::errors::{Result, SuggestError};

/// A design system's variants and classes, as loaded from JSON.
///
/// ```json
/// {
///   "separator": ":",
///   "variants": [
///     { "name": "hover", "selectors": ["&:hover"] },
///     { "name": "aria", "isArbitrary": true, "hasDash": true,
///       "values": ["busy"], "template": ["&[aria-{value}=\"true\"]"] }
///   ],
///   "classList": ["flex", ["hidden", { "display": "none" }]],
///   "blocklist": ["hover:hidden"],
///   "arbitraryRoots": ["data", "supports"]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default)]
    pub variants: Vec<VariantSpec>,
    #[serde(default)]
    pub class_list: Vec<ClassEntry>,
    #[serde(default)]
    pub blocklist: Option<Vec<String>>,
    #[serde(default)]
    pub arbitrary_roots: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantSpec {
    pub name: String,
    #[serde(default)]
    pub is_arbitrary: bool,
    #[serde(default)]
    pub has_dash: bool,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub selectors: Vec<String>,
    #[serde(default)]
    pub template: Vec<String>,
    #[serde(default)]
    pub value_selectors: HashMap<String, Vec<String>>,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(SuggestError::EmptySeparator);
        }
        if let Some(spec) = self.variants.iter().find(|v| v.name.is_empty()) {
            return Err(SuggestError::Catalog(format!(
                "variant with empty name (values: {:?})",
                spec.values
            )));
        }
        Ok(())
    }

    /// Build the read-only context for a completion session. With `probe`, unknown
    /// variant names are validated by compiling them against this catalog.
    pub fn into_context(self, probe: bool) -> Result<Context> {
        let design_system = probe.then(|| self.design_system());
        let variants = self.variants.into_iter().map(VariantSpec::into_variant).collect();
        let mut ctx = Context::new(variants, self.class_list).with_separator(self.separator)?;
        if let Some(blocklist) = self.blocklist {
            ctx = ctx.with_blocklist(blocklist);
        }
        if let Some(design_system) = design_system {
            ctx = ctx.with_design_system(design_system.into_shared());
        }
        Ok(ctx)
    }

    fn design_system(&self) -> CatalogDesignSystem {
        let mut ds = CatalogDesignSystem::new(self.separator.clone());
        for v in &self.variants {
            ds.add_variant(&v.name, v.has_dash, &v.values);
        }
        for root in &self.arbitrary_roots {
            ds.add_arbitrary_root(root);
        }
        for entry in &self.class_list {
            ds.add_class(entry.name());
        }
        ds
    }
}

impl VariantSpec {
    fn into_variant(self) -> Variant {
        let mut selectors = StaticSelectors::new(self.name.clone())
            .with_bare(self.selectors)
            .with_template(self.template);
        for (value, list) in self.value_selectors {
            selectors = selectors.with_override(value, list);
        }
        let variant = Variant::new(self.name, Arc::new(selectors))
            .with_dash(self.has_dash)
            .with_values(self.values);
        if self.is_arbitrary {
            variant.arbitrary(self.has_dash)
        } else {
            variant
        }
    }
}
