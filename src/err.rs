use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors raised while measuring or rendering a segment chain.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum RenderError {
    /// XPath 1.0 string literals have no escape syntax, so a literal
    /// containing both quote characters cannot be wrapped by either of them.
    #[error("string literal contains both quote kinds and cannot be rendered: `{text}`")]
    MixedQuotes { text: String },
}
