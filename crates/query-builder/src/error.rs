use thiserror::Error;

/// Errors raised while turning a query AST into SQL text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A fragment references `:name` but no parameter of that name is bound.
    #[error("No value bound for parameter `{0}`")]
    UnboundParameter(String),

    /// A list parameter was bound without a type telling how to expand it.
    #[error("Parameter `{0}` holds a list but has no array type")]
    UntypedList(String),
}
