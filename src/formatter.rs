use serde::Serialize;

use crate::buffer::TextBuffer;
use crate::builder::build;
use crate::convert::value_to_node;
use crate::error::IndentError;
use crate::model::{
    Collection, CollectionChild, Comment, CommentType, Document, DocumentChild, Node, Payload,
    Property, PropertyName, Value, ValueType,
};
use crate::options::FormatOptions;
use crate::tokenizer::JsonReader;
use crate::xml::XmlIndentFormatter;

const SERIALIZE_RECURSION_LIMIT: usize = 100;

/// Renders a parsed tree back to text under the configured layout.
///
/// The same renderer handles pretty-printing and minification; the two
/// differ only in the [`FormatOptions`] they are given.
pub struct JsonFormatter {
    options: FormatOptions,
}

impl JsonFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn format(&self, root: &Node) -> String {
        let mut buf = TextBuffer::default();
        self.write_node(root, 0, &mut buf);
        buf.flush();
        buf.as_string()
    }

    fn write_node(&self, node: &Node, depth: usize, buf: &mut TextBuffer) {
        match node {
            Node::Document(doc) => self.write_document(doc, depth, buf),
            Node::Collection(collection) => self.write_collection(collection, depth, buf),
        }
    }

    fn write_document(&self, doc: &Document, depth: usize, buf: &mut TextBuffer) {
        let children: Vec<&DocumentChild> = doc
            .children
            .iter()
            .filter(|child| !self.options.remove_comments || !matches!(child, DocumentChild::Comment(_)))
            .collect();

        if children.is_empty() {
            buf.add("{}");
            return;
        }

        let last_element = children
            .iter()
            .rposition(|child| matches!(child, DocumentChild::Property(_)));

        buf.add("{").end_line(&self.options.newline);
        for (i, child) in children.iter().enumerate() {
            buf.add(&self.indent(depth + 1));
            match child {
                DocumentChild::Comment(comment) => {
                    buf.add(&render_comment(comment));
                }
                DocumentChild::Property(property) => {
                    self.write_property(property, depth + 1, buf);
                    if Some(i) != last_element {
                        buf.add(",");
                    }
                    self.write_trailing_comments(&property.value.comments, buf);
                }
            }
            buf.end_line(&self.options.newline);
        }
        buf.add(&self.indent(depth)).add("}");
    }

    fn write_collection(&self, collection: &Collection, depth: usize, buf: &mut TextBuffer) {
        let children: Vec<&CollectionChild> = collection
            .children
            .iter()
            .filter(|child| !self.options.remove_comments || !matches!(child, CollectionChild::Comment(_)))
            .collect();

        if children.is_empty() {
            buf.add("[]");
            return;
        }

        let last_element = children
            .iter()
            .rposition(|child| matches!(child, CollectionChild::Value(_)));

        buf.add("[").end_line(&self.options.newline);
        for (i, child) in children.iter().enumerate() {
            buf.add(&self.indent(depth + 1));
            match child {
                CollectionChild::Comment(comment) => {
                    buf.add(&render_comment(comment));
                }
                CollectionChild::Value(value) => {
                    self.write_value(value, depth + 1, buf);
                    if Some(i) != last_element {
                        buf.add(",");
                    }
                    self.write_trailing_comments(&value.comments, buf);
                }
            }
            buf.end_line(&self.options.newline);
        }
        buf.add(&self.indent(depth)).add("]");
    }

    fn write_property(&self, property: &Property, depth: usize, buf: &mut TextBuffer) {
        buf.add(&self.name_text(&property.name));
        buf.add(":").add(&self.options.spacer);

        if !self.options.remove_comments {
            for comment in &property.name.comments {
                buf.add(&render_comment(comment));
                match comment.comment_type {
                    CommentType::Block => {
                        buf.add(&self.options.spacer);
                    }
                    // A line comment swallows the rest of the line, so the
                    // value continues on the next one.
                    CommentType::Line => {
                        buf.add(&self.options.newline).add(&self.indent(depth));
                    }
                }
            }
        }

        self.write_value(&property.value, depth, buf);
    }

    fn write_value(&self, value: &Value, depth: usize, buf: &mut TextBuffer) {
        match &value.payload {
            Payload::Container(node) => self.write_node(node, depth, buf),
            Payload::Literal(raw) => {
                buf.add(&self.literal_text(raw, value.value_type));
            }
        }
    }

    fn write_trailing_comments(&self, comments: &[Comment], buf: &mut TextBuffer) {
        if self.options.remove_comments {
            return;
        }
        for comment in comments {
            buf.add(&self.options.spacer).add(&render_comment(comment));
        }
    }

    fn name_text(&self, name: &PropertyName) -> String {
        if self.options.normalize_quotes {
            ensure_double_quotes(&name.raw)
        } else {
            name.raw.clone()
        }
    }

    fn literal_text(&self, raw: &str, value_type: ValueType) -> String {
        let is_stringish = matches!(value_type, ValueType::String | ValueType::Unknown);
        if self.options.normalize_quotes && is_stringish && !raw.is_empty() {
            ensure_double_quotes(raw)
        } else {
            raw.to_string()
        }
    }

    fn indent(&self, depth: usize) -> String {
        self.options.indent_character.repeat(depth)
    }
}

fn render_comment(comment: &Comment) -> String {
    match comment.comment_type {
        CommentType::Line => format!("// {}", comment.value),
        CommentType::Block => format!("/* {} */", comment.value),
    }
}

/// Rewrites a key or string literal with double-quote delimiters.
/// Already double-quoted text passes through verbatim.
fn ensure_double_quotes(raw: &str) -> String {
    let bytes = raw.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"' {
        return raw.to_string();
    }

    let inner = if bytes.len() >= 2 && bytes[0] == b'\'' && bytes[bytes.len() - 1] == b'\'' {
        raw[1..raw.len() - 1].replace("\\'", "'")
    } else {
        raw.to_string()
    };

    let mut quoted = String::with_capacity(inner.len() + 2);
    quoted.push('"');
    for ch in inner.chars() {
        if ch == '"' {
            quoted.push_str("\\\"");
        } else {
            quoted.push(ch);
        }
    }
    quoted.push('"');
    quoted
}

/// Reformats lenient JSON or XML text, picking the path from the first
/// non-whitespace character (`<` means XML, anything else JSON).
///
/// Empty or whitespace-only input yields `None`, which callers should treat
/// as "leave the existing text unchanged", never as an error.
///
/// # Example
///
/// ```rust
/// use indentx::Formatter;
///
/// let formatter = Formatter::new();
/// let pretty = formatter.format("{\"hello\":\"world\" ,\"value\":123}").unwrap();
/// assert_eq!(pretty, "{\n\t\"hello\": \"world\",\n\t\"value\": 123\n}");
///
/// let minified = formatter.unindent(&pretty).unwrap();
/// assert_eq!(minified, "{\"hello\":\"world\",\"value\":123}");
/// ```
pub struct Formatter {
    /// String repeated once per nesting depth when pretty-printing.
    pub indent_character: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self { indent_character: "\t".to_string() }
    }

    pub fn with_indent(indent_character: impl Into<String>) -> Self {
        Self { indent_character: indent_character.into() }
    }

    /// Pretty-prints the input. Returns `None` for blank input.
    pub fn format(&self, text: &str) -> Option<String> {
        let first = first_significant_char(text)?;
        if first == '<' {
            return Some(XmlIndentFormatter::new(&self.indent_character).indent(text));
        }

        let mut reader = JsonReader::new(text);
        let root = build(&mut reader)?;
        let options = FormatOptions {
            indent_character: self.indent_character.clone(),
            ..FormatOptions::default()
        };
        Some(JsonFormatter::new(options).format(&root))
    }

    /// Minifies the input. Returns `None` for blank input.
    pub fn unindent(&self, text: &str) -> Option<String> {
        let first = first_significant_char(text)?;
        if first == '<' {
            return Some(XmlIndentFormatter::unindenting().indent(text));
        }

        let mut reader = JsonReader::new(text);
        let root = build(&mut reader)?;
        Some(JsonFormatter::new(FormatOptions::minified()).format(&root))
    }

    /// Pretty-prints any serializable value.
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String, IndentError> {
        let json = serde_json::to_value(value)
            .map_err(|e| IndentError::simple(format!("Serialization failed: {}", e)))?;
        let root = value_to_node(&json, SERIALIZE_RECURSION_LIMIT)?;
        let options = FormatOptions {
            indent_character: self.indent_character.clone(),
            ..FormatOptions::default()
        };
        Ok(JsonFormatter::new(options).format(&root))
    }
}

fn first_significant_char(text: &str) -> Option<char> {
    text.chars().find(|c| !c.is_whitespace())
}
