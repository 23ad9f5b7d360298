/// A position within the input text.
///
/// All values are zero-indexed. `index` counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputPosition {
    /// Character offset from the start of the input.
    pub index: usize,
    /// Line number (first line is 0).
    pub row: usize,
    /// Column number within the line.
    pub column: usize,
}

impl InputPosition {
    pub(crate) fn start() -> Self {
        Self { index: 0, row: 0, column: 0 }
    }
}

/// The lexical class of a token produced by the tokenizer.
///
/// The tokenizer is deliberately coarse: numbers, booleans, `null`, and
/// unquoted keys all come out as [`TokenType::Word`]. Classification into
/// value types happens later, in the document builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    BeginObject,
    EndObject,
    BeginArray,
    EndArray,
    Colon,
    Comma,
    /// A single- or double-quoted string, delimiters included in the text.
    String,
    /// A run of non-whitespace, non-structural characters.
    Word,
    /// A `//` comment, delimiters included in the text.
    LineComment,
    /// A `/* */` comment, delimiters included in the text.
    BlockComment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonToken {
    pub token_type: TokenType,
    /// Verbatim source text of the token.
    pub text: String,
    pub input_position: InputPosition,
}

/// The semantic kind of a value, assigned by grammar matching over its
/// raw text rather than by parsing it into a native type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    String,
    Number,
    Boolean,
    Null,
    Object,
    Array,
    /// Anything that matched no literal grammar, such as `2.` or a bare word.
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentType {
    Line,
    Block,
}

/// A comment with its delimiters stripped and surrounding whitespace trimmed.
///
/// Block comment values may span multiple lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub comment_type: CommentType,
    pub value: String,
}

impl Comment {
    pub(crate) fn from_token(token: &JsonToken) -> Self {
        match token.token_type {
            TokenType::BlockComment => {
                let inner = token.text.strip_prefix("/*").unwrap_or(&token.text);
                let inner = inner.strip_suffix("*/").unwrap_or(inner);
                Comment {
                    comment_type: CommentType::Block,
                    value: inner.trim().to_string(),
                }
            }
            _ => {
                let inner = token.text.strip_prefix("//").unwrap_or(&token.text);
                Comment {
                    comment_type: CommentType::Line,
                    value: inner.trim().to_string(),
                }
            }
        }
    }
}

/// The root of a parsed tree: a JSON object or a JSON array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Document(Document),
    Collection(Collection),
}

/// A JSON object: an ordered sequence of properties and standalone comments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub children: Vec<DocumentChild>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentChild {
    Property(Property),
    Comment(Comment),
}

/// A JSON array: an ordered sequence of values and standalone comments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    pub children: Vec<CollectionChild>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionChild {
    Value(Value),
    Comment(Comment),
}

/// A single `name: value` entry inside a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: PropertyName,
    pub value: Value,
}

/// A property key, stored verbatim (quotes included, if any).
///
/// Comments that appear between the name and its value, on either side of
/// the colon, bind here rather than to the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyName {
    pub raw: String,
    pub comments: Vec<Comment>,
}

impl PropertyName {
    pub(crate) fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into(), comments: Vec::new() }
    }

    /// The key text with any matching quote delimiters stripped.
    pub fn text(&self) -> &str {
        strip_quotes(&self.raw)
    }
}

/// Either a verbatim literal or an owned nested container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Literal(String),
    Container(Box<Node>),
}

/// A value node. Comments that appear between the value and its terminator
/// (comma or closing bracket) bind here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    pub payload: Payload,
    pub value_type: ValueType,
    pub comments: Vec<Comment>,
}

impl Value {
    pub(crate) fn literal(raw: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            payload: Payload::Literal(raw.into()),
            value_type,
            comments: Vec::new(),
        }
    }

    pub(crate) fn container(node: Node) -> Self {
        let value_type = match node {
            Node::Document(_) => ValueType::Object,
            Node::Collection(_) => ValueType::Array,
        };
        Self {
            payload: Payload::Container(Box::new(node)),
            value_type,
            comments: Vec::new(),
        }
    }

    /// The literal text with any matching quote delimiters stripped.
    /// Empty for container values.
    pub fn text(&self) -> &str {
        match &self.payload {
            Payload::Literal(raw) => strip_quotes(raw),
            Payload::Container(_) => "",
        }
    }

    /// The nested container, if this value is an object or array.
    pub fn as_container(&self) -> Option<&Node> {
        match &self.payload {
            Payload::Container(node) => Some(node),
            Payload::Literal(_) => None,
        }
    }
}

fn strip_quotes(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}
