/// Keep the candidates matching the fragment after the last `:` in `query`.
///
/// A candidate matches when it starts with the fragment, or contains it right
/// after a dash (so `red` finds `bg-red-500`). At most `limit` survivors are
/// returned, in their original order. An empty query returns `list` untouched.
pub fn filter_class_list(list: Vec<String>, query: &str, limit: usize) -> Vec<String> {
    if query.is_empty() {
        return list;
    }
    let fragment = query.rsplit(':').next().unwrap_or(query);
    let dashed = format!("-{fragment}");
    list.into_iter()
        .filter(|item| item.starts_with(fragment) || item.contains(&dashed))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn list() -> Vec<String> {
        ["bg-red-500", "bg-blue-500", "text-red-500"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn prefix_match() {
        assert_eq!(filter_class_list(list(), "bg-r", 100), vec!["bg-red-500"]);
    }

    #[test]
    fn empty_query_is_identity() {
        assert_eq!(filter_class_list(list(), "", 1), list());
    }

    #[test]
    fn dash_suffix_match() {
        assert_eq!(
            filter_class_list(list(), "red", 100),
            vec!["bg-red-500", "text-red-500"]
        );
    }

    #[test]
    fn uses_text_after_last_colon() {
        assert_eq!(filter_class_list(list(), "hover:md:text", 100), vec!["text-red-500"]);
        // A trailing colon leaves an empty fragment, which matches everything.
        assert_eq!(filter_class_list(list(), "hover:", 100), list());
    }

    #[test]
    fn caps_to_limit() {
        assert_eq!(filter_class_list(list(), "bg", 1), vec!["bg-red-500"]);
        assert!(filter_class_list(list(), "bg", 0).is_empty());
    }
}
