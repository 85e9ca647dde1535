use tracing::debug;

use crate::context::Context;
use crate::design_system::PROBE_UTILITY;
use crate::ordered_set::OrderedSet;
use crate::parser::segment;

/// Leading variants recognised in a class chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantPrefix {
    /// Deduplicated, in the order they were typed.
    pub variants: Vec<String>,
    /// Byte offset where the non-variant remainder starts.
    pub offset: usize,
}

/// True when `part` is a declared variant name, or when the design system
/// compiles `part<sep>[color:red]` to something.
pub fn is_valid_variant(part: &str, ctx: &Context) -> bool {
    if ctx.variants.iter().any(|v| v.name == part) {
        return true;
    }
    let Some(design_system) = ctx.design_system.as_ref() else {
        return false;
    };
    let probe = format!("{part}{}{PROBE_UTILITY}", ctx.separator());
    let compiled = design_system.compile(std::slice::from_ref(&probe));
    debug!(probe = %probe, compiled = ?compiled, "probed variant");
    matches!(compiled.as_slice(), [Some(_)])
}

pub fn variants_from_class_name(ctx: &Context, class_name: &str) -> VariantPrefix {
    let parts = match segment(class_name, ctx.separator_char()) {
        Ok(parts) => parts,
        Err(err) => {
            debug!(class_name, error = %err, "not scanning for variants");
            return VariantPrefix::default();
        }
    };
    // A lone token is a bare class name.
    if parts.len() < 2 {
        return VariantPrefix::default();
    }

    let mut offset = 0;
    let mut variants = OrderedSet::new();
    for part in parts.into_iter().filter(|p| !p.is_empty()) {
        if !is_valid_variant(part, ctx) {
            break;
        }
        variants.insert(part);
        offset += part.len() + ctx.separator().len();
    }
    VariantPrefix {
        variants: variants.into_vec(),
        offset,
    }
}
