use scraper::{ElementRef, Html};

use crate::markup::{error::ParseError, node::ElementNode};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Parse a pasted fragment as a full HTML document and return the first
/// element child of `<body>`.
///
/// Every call parses from scratch. Leading text is skipped, so
/// `"hello <b>x</b>"` yields the `<b>`; input with no element at all is a
/// [`ParseError::NoElement`].
pub fn parse(markup: &str) -> Result<ElementNode, ParseError> {
    let document = Html::parse_document(markup);

    let body = document
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "body")
        .ok_or(ParseError::NoElement)?;

    let first = body
        .children()
        .find_map(ElementRef::wrap)
        .ok_or(ParseError::NoElement)?;

    let element = first.value();
    let namespace: &str = &element.name.ns;
    if namespace != HTML_NAMESPACE {
        return Err(ParseError::NotHtmlElement {
            tag: element.name().to_string(),
            namespace: namespace.to_string(),
        });
    }

    Ok(ElementNode {
        tag: element.name().to_string(),
        attributes: element
            .attrs()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
    })
}
