use indentx::{build, FormatOptions, Formatter, JsonFormatter, JsonReader};
use serde::Serialize;

fn format(text: &str) -> String {
    Formatter::new().format(text).expect("non-blank input")
}

fn unindent(text: &str) -> String {
    Formatter::new().unindent(text).expect("non-blank input")
}

#[test]
fn formats_basic_object() {
    assert_eq!(
        format("{\"hello\":\"world\" ,\"value\":123}"),
        "{\n\t\"hello\": \"world\",\n\t\"value\": 123\n}"
    );
}

#[test]
fn formats_with_custom_indent() {
    let formatter = Formatter::with_indent("  ");
    assert_eq!(
        formatter.format("{\"a\":[1,2]}").unwrap(),
        "{\n  \"a\": [\n    1,\n    2\n  ]\n}"
    );
}

#[test]
fn empty_containers_render_inline() {
    assert_eq!(
        format("{\"a\":{},\"b\":[]}"),
        "{\n\t\"a\": {},\n\t\"b\": []\n}"
    );
    assert_eq!(format("{}"), "{}");
    assert_eq!(format("[]"), "[]");
}

#[test]
fn preserves_source_quoting_when_pretty_printing() {
    assert_eq!(
        format("{a:'x', \"b\":2}"),
        "{\n\ta: 'x',\n\t\"b\": 2\n}"
    );
}

#[test]
fn renders_standalone_comments_on_their_own_line() {
    assert_eq!(
        format("{// note\na:1}"),
        "{\n\t// note\n\ta: 1\n}"
    );
    assert_eq!(
        format("[1,\n// middle\n2]"),
        "[\n\t1,\n\t// middle\n\t2\n]"
    );
}

#[test]
fn renders_name_comments_between_colon_and_value() {
    assert_eq!(
        format("{a:/* why */5.5}"),
        "{\n\ta: /* why */ 5.5\n}"
    );
    assert_eq!(
        format("{a:// why\n5.5}"),
        "{\n\ta: // why\n\t5.5\n}"
    );
}

#[test]
fn renders_trailing_comments_after_the_comma() {
    assert_eq!(
        format("[1,2 // two\n,3]"),
        "[\n\t1,\n\t2, // two\n\t3\n]"
    );
    assert_eq!(
        format("{a: true /* note */}"),
        "{\n\ta: true /* note */\n}"
    );
}

#[test]
fn standalone_comment_after_last_element_keeps_its_own_line() {
    let once = format("{a:1,\n// c\n}");
    assert_eq!(once, "{\n\ta: 1\n\t// c\n}");
    assert_eq!(format(&once), once);

    let once = format("[1,\n// c\n]");
    assert_eq!(once, "[\n\t1\n\t// c\n]");
    assert_eq!(format(&once), once);
}

#[test]
fn remove_comments_option_drops_every_comment() {
    let mut reader = JsonReader::new("{// gone\na:/* gone */1 /* gone */}");
    let root = build(&mut reader).unwrap();
    let options = FormatOptions {
        remove_comments: true,
        ..FormatOptions::default()
    };
    assert_eq!(JsonFormatter::new(options).format(&root), "{\n\ta: 1\n}");
}

#[test]
fn comment_only_document_minifies_to_empty_braces() {
    assert_eq!(unindent("{// just a note\n}"), "{}");
}

#[test]
fn minifies_basic_object() {
    assert_eq!(
        unindent("{\n\t\"hello\": \"world\",\n\t\"value\": 123\n}"),
        "{\"hello\":\"world\",\"value\":123}"
    );
}

#[test]
fn minify_normalizes_quoting() {
    assert_eq!(unindent("{a:'b c', d:\"e\"}"), "{\"a\":\"b c\",\"d\":\"e\"}");
    assert_eq!(unindent("[x]"), "[\"x\"]");
    assert_eq!(unindent("{'it\\'s': 1}"), "{\"it's\":1}");
}

#[test]
fn minify_copies_literals_verbatim() {
    // No numeric re-normalization and no case changes.
    assert_eq!(
        unindent("[1.50, -0.3e2, true, null]"),
        "[1.50,-0.3e2,true,null]"
    );
}

#[test]
fn minify_drops_comments() {
    assert_eq!(
        unindent("{// lead\na: 1, /* trail */\nb: [2, // two\n3]}"),
        "{\"a\":1,\"b\":[2,3]}"
    );
}

#[test]
fn pretty_printing_is_idempotent() {
    let inputs = [
        "{\"hello\":\"world\" ,\"value\":123}",
        "{a:1, // one\nb:[2,3], /* two */\nc:{d:true}}",
        "[// lead\n1,\n// middle\n{x:'y'}]",
        "{a:/* why */5.5}",
    ];
    for input in inputs {
        let once = format(input);
        assert_eq!(format(&once), once, "for input {:?}", input);
    }
}

#[test]
fn minification_is_idempotent() {
    let inputs = [
        "{\n\t\"hello\": \"world\",\n\t\"value\": 123\n}",
        "{a:'x', b:[1, 2., // c\n3]}",
    ];
    for input in inputs {
        let once = unindent(input);
        assert_eq!(unindent(&once), once, "for input {:?}", input);
    }
}

#[test]
fn serializes_rust_types() {
    #[derive(Serialize)]
    struct Player {
        name: String,
        scores: Vec<i32>,
    }

    let player = Player { name: "Alice".into(), scores: vec![95, 87] };
    let output = Formatter::new().serialize(&player).unwrap();
    assert_eq!(
        output,
        "{\n\t\"name\": \"Alice\",\n\t\"scores\": [\n\t\t95,\n\t\t87\n\t]\n}"
    );
}
