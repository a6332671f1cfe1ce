use trackdiff::markup::{
    error::{INVALID_HTML_MESSAGE, ParseError},
    parser::parse,
};

// =========================================================================
// Successful parses
// =========================================================================

#[test]
fn parses_first_body_element() {
    let node = parse(r#"<button class="btn" data-trackid="x">Fav</button>"#).unwrap();

    assert_eq!(node.tag, "button");
    assert_eq!(node.attr("class"), Some("btn"));
    assert_eq!(node.attr("data-trackid"), Some("x"));
    assert_eq!(node.attr("id"), None);
}

#[test]
fn only_the_first_top_level_element_is_used() {
    let node = parse("<span>a</span><div>b</div>").unwrap();
    assert_eq!(node.tag, "span");
}

#[test]
fn leading_text_is_skipped() {
    let node = parse("  some text <a href=\"/x\">link</a>").unwrap();
    assert_eq!(node.tag, "a");
}

#[test]
fn unclosed_element_still_parses() {
    let node = parse(r#"<span aria-pressed="true">"#).unwrap();
    assert_eq!(node.tag, "span");
    assert_eq!(node.attr("aria-pressed"), Some("true"));
}

#[test]
fn attribute_names_are_lowercased() {
    let node = parse(r#"<div DATA-Item="1" Aria-Pressed="true"></div>"#).unwrap();
    assert_eq!(node.attr("data-item"), Some("1"));
    assert_eq!(node.attr("aria-pressed"), Some("true"));
}

#[test]
fn attributes_keep_document_order() {
    let node = parse(r#"<i data-z="1" data-a="2" aria-b="3"></i>"#).unwrap();
    let names: Vec<&str> = node.attributes.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["data-z", "data-a", "aria-b"]);
}

// =========================================================================
// Failures
// =========================================================================

#[test]
fn malformed_markup_is_rejected() {
    assert_eq!(parse("<<<"), Err(ParseError::NoElement));
}

#[test]
fn empty_and_text_only_input_is_rejected() {
    assert_eq!(parse(""), Err(ParseError::NoElement), "Empty input");
    assert_eq!(parse("   \n"), Err(ParseError::NoElement), "Whitespace only");
    assert_eq!(parse("just text"), Err(ParseError::NoElement), "Text only");
}

#[test]
fn foreign_elements_are_rejected() {
    match parse(r#"<svg class="icon"></svg>"#) {
        Err(ParseError::NotHtmlElement { tag, .. }) => assert_eq!(tag, "svg"),
        other => panic!("Expected NotHtmlElement, got {:?}", other),
    }
}

#[test]
fn every_error_maps_to_the_same_user_message() {
    let errors = [
        ParseError::NoElement,
        ParseError::NotHtmlElement {
            tag: "svg".into(),
            namespace: "http://www.w3.org/2000/svg".into(),
        },
    ];
    for e in errors {
        assert_eq!(e.user_message(), INVALID_HTML_MESSAGE);
    }
}
