use indentx::XmlIndentFormatter;

fn indent(text: &str) -> String {
    XmlIndentFormatter::new("\t").indent(text)
}

fn unindent(text: &str) -> String {
    XmlIndentFormatter::unindenting().indent(text)
}

#[test]
fn indents_nested_elements() {
    assert_eq!(
        indent("<root><child></child></root>"),
        "<root>\n\t<child></child>\n</root>"
    );
    assert_eq!(
        indent("<a><b><c></c></b></a>"),
        "<a>\n\t<b>\n\t\t<c></c>\n\t</b>\n</a>"
    );
}

#[test]
fn keeps_text_content_inline() {
    assert_eq!(indent("<a>hello</a>"), "<a>hello</a>");
    assert_eq!(indent("<a>x<b>y</b></a>"), "<a>x\n\t<b>y</b>\n</a>");
}

#[test]
fn self_closing_tags_do_not_push_the_stack() {
    assert_eq!(
        indent("<a><b/><c/></a>"),
        "<a>\n\t<b/>\n\t<c/>\n</a>"
    );
}

#[test]
fn declarations_do_not_push_the_stack() {
    assert_eq!(
        indent("<?xml version=\"1.0\"?><root></root>"),
        "<?xml version=\"1.0\"?>\n<root></root>"
    );
}

#[test]
fn comment_content_passes_through_unmodified() {
    assert_eq!(
        indent("<a><!-- keep  <spacing>  --></a>"),
        "<a>\n\t<!-- keep  <spacing>  -->\n</a>"
    );
}

#[test]
fn bracket_inside_attribute_does_not_close_the_tag() {
    assert_eq!(
        indent("<a b=\"x > y\"><c></c></a>"),
        "<a b=\"x > y\">\n\t<c></c>\n</a>"
    );
}

#[test]
fn mismatched_closing_tag_never_fails() {
    // Best effort: the unmatched close is emitted and formatting goes on.
    assert_eq!(indent("<a><b></a>"), "<a>\n\t<b></a>");
    assert_eq!(indent("</a><b></b>"), "</a>\n<b></b>");
}

#[test]
fn indenting_keeps_attribute_regions_verbatim() {
    assert_eq!(
        indent("<a  b=\"1\"><c/></a>"),
        "<a  b=\"1\">\n\t<c/>\n</a>"
    );
    assert_eq!(
        indent("<child\na=\"123\"></child>"),
        "<child\na=\"123\"></child>"
    );
}

#[test]
fn unindents_nested_elements() {
    assert_eq!(
        unindent("<root>\n\t<child\na=\"123\"></child>\n</root>"),
        "<root><child a=\"123\"></child></root>"
    );
}

#[test]
fn unindent_keeps_text_content() {
    assert_eq!(unindent("<a>\n  hello\n</a>"), "<a>hello</a>");
}

#[test]
fn unindent_keeps_comments() {
    assert_eq!(
        unindent("<a>\n\t<!-- note -->\n</a>"),
        "<a><!-- note --></a>"
    );
}

#[test]
fn indentation_is_idempotent() {
    let inputs = [
        "<root><child></child></root>",
        "<a>x<b>y</b><c/></a>",
        "<?xml version=\"1.0\"?><a><!-- n --><b></b></a>",
    ];
    for input in inputs {
        let once = indent(input);
        assert_eq!(indent(&once), once, "for input {:?}", input);
    }
}

#[test]
fn unindent_then_indent_round_trips() {
    let pretty = "<root>\n\t<child></child>\n</root>";
    assert_eq!(indent(&unindent(pretty)), pretty);
}
