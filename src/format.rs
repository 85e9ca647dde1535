use itertools::Itertools;

/// Reattach the typed modifier chain to a bare candidate: `["hover", "md"]` +
/// `flex` gives `hover:md:flex`.
pub fn option_value<S: AsRef<str>>(class_name: &str, modifiers: &[S]) -> String {
    if modifiers.is_empty() {
        return class_name.to_string();
    }
    format!(
        "{}:{class_name}",
        modifiers.iter().map(AsRef::<str>::as_ref).join(":")
    )
}
