use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Everything that can go wrong while building a context or computing suggestions
#[derive(Debug, Error)]
pub enum SuggestError {
    // A variant's selectors capability failed; callers treat this as "no selectors"
    #[error("selector error for variant `{variant}`: {reason}")]
    Selector { variant: String, reason: String },

    // The tokenizer ran out of scope stack
    #[error("nesting deeper than {max} open scopes")]
    NestingTooDeep { max: usize },

    #[error("separator must not be empty")]
    EmptySeparator,

    // Catalog data that deserialized fine but makes no sense
    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

// Type alias for results that use `SuggestError` as the error type
pub type Result<T> = std::result::Result<T, SuggestError>;
