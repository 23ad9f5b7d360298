use indentx::Formatter;

#[test]
fn identifies_and_formats_basic_xml() {
    let formatter = Formatter::new();
    assert_eq!(
        formatter.format("<root><child></child></root>").as_deref(),
        Some("<root>\n\t<child></child>\n</root>")
    );
}

#[test]
fn identifies_and_formats_basic_json() {
    let formatter = Formatter::new();
    assert_eq!(
        formatter.format("{\"hello\":\"world\" ,\"value\":123}").as_deref(),
        Some("{\n\t\"hello\": \"world\",\n\t\"value\": 123\n}")
    );
}

#[test]
fn leading_whitespace_does_not_affect_dispatch() {
    let formatter = Formatter::new();
    assert_eq!(
        formatter.format("  {\"hello\":\"world\" ,\"value\":123}").as_deref(),
        Some("{\n\t\"hello\": \"world\",\n\t\"value\": 123\n}")
    );
    assert_eq!(
        formatter.format(" \n<a></a>").as_deref(),
        Some("<a></a>")
    );
}

#[test]
fn blank_input_produces_no_result() {
    let formatter = Formatter::new();
    assert_eq!(formatter.format(""), None);
    assert_eq!(formatter.format(" "), None);
    assert_eq!(formatter.format(" \t\n "), None);
    assert_eq!(formatter.unindent(""), None);
    assert_eq!(formatter.unindent("   "), None);
}

#[test]
fn identifies_and_unindents_basic_xml() {
    let formatter = Formatter::new();
    assert_eq!(
        formatter.unindent("<root>\n\t<child\na=\"123\"></child>\n</root>").as_deref(),
        Some("<root><child a=\"123\"></child></root>")
    );
}

#[test]
fn identifies_and_unindents_basic_json() {
    let formatter = Formatter::new();
    assert_eq!(
        formatter.unindent("{\n\t\"hello\": \"world\",\n\t\"value\": 123\n}").as_deref(),
        Some("{\"hello\":\"world\",\"value\":123}")
    );
}

#[test]
fn reminifying_minified_text_is_stable() {
    let formatter = Formatter::new();
    let inputs = [
        "{a:'b', c:[1, // note\n2]}",
        "<root>\n\t<child></child>\n</root>",
    ];
    for input in inputs {
        let once = formatter.unindent(input).unwrap();
        assert_eq!(formatter.unindent(&once).unwrap(), once, "for input {:?}", input);
    }
}
