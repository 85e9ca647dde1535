use itertools::Itertools;
use serde::Serialize;
use tracing::{trace, warn};

use crate::context::{Context, Variant};
use crate::design_system::DEFAULT_VALUE;
use crate::filter::filter_class_list;
use crate::format::option_value;
use crate::ordered_set::OrderedSet;
use crate::variants::variants_from_class_name;

/// Default cap on the number of suggestions returned.
pub const LIMIT_SUGGESTIONS: usize = 100;

#[derive(Debug, Clone)]
pub struct ProcessorOptions {
    pub limit: usize,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            limit: LIMIT_SUGGESTIONS,
        }
    }
}

/// One completion entry. `label` and `value` are currently identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuggestionList {
    pub classes: Vec<Suggestion>,
}

#[derive(Debug, Clone, Default)]
pub struct ClassListProcessor {
    opts: ProcessorOptions,
}

impl ClassListProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, opts: ProcessorOptions) -> Self {
        self.opts = opts;
        self
    }

    pub fn limit(&self) -> usize {
        self.opts.limit
    }

    /// Suggest completions for a partially typed class chain.
    ///
    /// Variant candidates come first, in declaration order, each bare form ahead
    /// of its value forms; literal class names follow in catalog order.
    pub fn process(&self, ctx: &Context, query: &str) -> SuggestionList {
        let mut chain: Vec<&str> = query.split(':').collect();
        let fragment = chain.pop().unwrap_or_default();
        let modifiers = chain;

        let existing = variants_from_class_name(ctx, typed_chain(ctx, query, fragment)).variants;
        let mut items = variant_candidates(ctx, &existing);
        let variant_count = items.len();

        items.extend(ctx.class_list.iter().filter_map(|entry| {
            let name = entry.name();
            let key = existing.iter().map(String::as_str).chain([name]).join(ctx.separator());
            (!ctx.is_blocked(&key)).then(|| name.to_string())
        }));

        let filtered = filter_class_list(items, query, self.opts.limit);
        trace!(
            query,
            fragment,
            existing = ?existing,
            variant_count,
            matched = filtered.len(),
            "computed suggestions"
        );

        let classes = filtered
            .iter()
            .take(self.opts.limit)
            .map(|class_name| {
                let value = option_value(class_name, &modifiers);
                Suggestion {
                    label: value.clone(),
                    value,
                }
            })
            .collect();
        SuggestionList { classes }
    }
}

// The text holding already-typed variants. With the default separator the
// fragment can never contain one, so the completed part of the query (up to
// and including the last `:`) is scanned instead.
fn typed_chain<'a>(ctx: &Context, query: &'a str, fragment: &'a str) -> &'a str {
    if ctx.separator() == ":" {
        &query[..query.len() - fragment.len()]
    } else {
        fragment
    }
}

// Remaining variants and variant/value pairs not already typed.
fn variant_candidates(ctx: &Context, existing: &[String]) -> Vec<String> {
    let sep = ctx.separator();
    let dash = |v: &Variant| if v.has_dash { "-" } else { "" };
    let existing: OrderedSet = existing.iter().collect();
    let already_typed = |key: &str| existing.contains(key);

    let mut seen = OrderedSet::new();
    let mut items = Vec::new();
    for variant in &ctx.variants {
        if already_typed(&variant.name) || !seen.insert(variant.name.as_str()) {
            continue;
        }

        if variant.is_arbitrary {
            items.push(format!("{}{}[]{sep}", variant.name, dash(variant)));
        } else if selectors_for(variant, None).is_empty() {
            // Not usable here at all, values included.
            continue;
        } else {
            items.push(format!("{}{sep}", variant.name));
        }

        for value in &variant.values {
            let key = format!("{}-{value}", variant.name);
            if already_typed(&key) || !seen.insert(key) {
                continue;
            }
            if selectors_for(variant, Some(value)).is_empty() {
                continue;
            }
            if value == DEFAULT_VALUE {
                items.push(format!("{}{sep}", variant.name));
            } else {
                items.push(format!("{}{}{value}{sep}", variant.name, dash(variant)));
            }
        }
    }
    items
}

fn selectors_for(variant: &Variant, value: Option<&str>) -> Vec<String> {
    variant.selectors.selectors(value).unwrap_or_else(|err| {
        warn!(variant = %variant.name, value = ?value, error = %err, "failed to compute variant selectors");
        Vec::new()
    })
}
