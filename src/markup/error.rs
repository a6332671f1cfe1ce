use thiserror::Error;

/// Shown to the user whenever pasted markup cannot be used.
pub const INVALID_HTML_MESSAGE: &str = "invalid HTML";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The document body has no element child (plain text, `<<<`, empty input)
    #[error("markup does not contain an element")]
    NoElement,

    /// The first element is foreign content (SVG, MathML) rather than an HTML element
    #[error("<{tag}> is not an HTML element (namespace {namespace})")]
    NotHtmlElement { tag: String, namespace: String },
}

impl ParseError {
    pub fn user_message(&self) -> &'static str {
        INVALID_HTML_MESSAGE
    }
}
