pub mod errors;
pub mod context;
pub mod engine;
pub mod design_system; // selector / compile capabilities
pub mod catalog;
pub mod parser;
pub mod variants;
mod filter;
mod format;
mod ordered_set;

pub use catalog::Catalog;
pub use context::{ClassEntry, Context, Variant};
pub use design_system::{DesignSystem, SelectorSource};
pub use engine::{ClassListProcessor, ProcessorOptions, Suggestion, SuggestionList, LIMIT_SUGGESTIONS};
pub use errors::{Result, SuggestError};
pub use filter::filter_class_list;
pub use format::option_value;
pub use ordered_set::OrderedSet;
pub use parser::{segment, MAX_NESTING_DEPTH};
pub use variants::{is_valid_variant, variants_from_class_name, VariantPrefix};

/// Convenience: suggest completions with the default options.
pub fn suggest(ctx: &Context, query: &str) -> SuggestionList {
    ClassListProcessor::new().process(ctx, query)
}
