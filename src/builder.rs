use crate::model::{
    Collection, CollectionChild, Comment, Document, DocumentChild, Node, Property, PropertyName,
    TokenType, Value, ValueType,
};
use crate::tokenizer::JsonReader;

/// Builds a comment-preserving tree from the reader's token stream.
///
/// Returns `None` only when the stream holds no tokens at all. Structurally
/// invalid input (missing commas, mismatched brackets, stray tokens, text
/// mid-edit) never fails; the builder produces a best-effort tree and keeps
/// going to the next recognizable boundary.
///
/// The root is a [`Collection`] when the first significant token is `[`,
/// otherwise a [`Document`].
pub fn build(reader: &mut JsonReader) -> Option<Node> {
    match reader.peek_type()? {
        TokenType::BeginArray => Some(Node::Collection(parse_collection(reader))),
        _ => Some(Node::Document(parse_document(reader))),
    }
}

/// The most recent element child, still eligible to adopt trailing comments.
///
/// A comment attaches to it only when it starts on the same source row as
/// the element's last token; a comment on a later row is a standalone
/// sibling. Row equality survives a render round trip, so attachment stays
/// put when formatted output is parsed again.
struct TrailingTarget {
    index: usize,
    row: usize,
}

fn parse_document(reader: &mut JsonReader) -> Document {
    if reader.peek_type() == Some(TokenType::BeginObject) {
        reader.skip();
    }

    let mut doc = Document::default();
    let mut trailing: Option<TrailingTarget> = None;

    while let Some(token_type) = reader.peek_type() {
        match token_type {
            TokenType::EndObject => {
                reader.skip();
                break;
            }
            TokenType::Comma => reader.skip(),
            TokenType::LineComment | TokenType::BlockComment => {
                let Some(token) = reader.next_token() else { break };
                let comment = Comment::from_token(&token);
                let target = trailing
                    .as_ref()
                    .filter(|t| token.input_position.row == t.row);
                if let Some(target) = target {
                    if let DocumentChild::Property(prop) = &mut doc.children[target.index] {
                        prop.value.comments.push(comment);
                        continue;
                    }
                }
                trailing = None;
                doc.children.push(DocumentChild::Comment(comment));
            }
            TokenType::String | TokenType::Word => {
                let property = parse_property(reader);
                doc.children.push(DocumentChild::Property(property));
                trailing = Some(TrailingTarget {
                    index: doc.children.len() - 1,
                    row: reader.previous_row().unwrap_or(0),
                });
            }
            // Stray colon, bracket, or container in key position.
            _ => reader.skip(),
        }
    }
    doc
}

fn parse_property(reader: &mut JsonReader) -> Property {
    let raw = reader.next_token().map(|t| t.text).unwrap_or_default();
    let mut name = PropertyName::new(raw);

    // Comments on either side of the colon fall between the name and its
    // value, so they bind to the name.
    collect_comments(reader, &mut name.comments);
    if reader.peek_type() == Some(TokenType::Colon) {
        reader.skip();
        collect_comments(reader, &mut name.comments);
    }

    let value = match reader.peek_type() {
        None | Some(TokenType::EndObject) | Some(TokenType::EndArray) | Some(TokenType::Comma) => {
            // Missing value; leave the terminator for the caller.
            Value::literal("", ValueType::Unknown)
        }
        _ => parse_value(reader),
    };

    Property { name, value }
}

fn parse_collection(reader: &mut JsonReader) -> Collection {
    if reader.peek_type() == Some(TokenType::BeginArray) {
        reader.skip();
    }

    let mut collection = Collection::default();
    let mut trailing: Option<TrailingTarget> = None;

    while let Some(token_type) = reader.peek_type() {
        match token_type {
            TokenType::EndArray => {
                reader.skip();
                break;
            }
            TokenType::Comma => reader.skip(),
            TokenType::LineComment | TokenType::BlockComment => {
                let Some(token) = reader.next_token() else { break };
                let comment = Comment::from_token(&token);
                let target = trailing
                    .as_ref()
                    .filter(|t| token.input_position.row == t.row);
                if let Some(target) = target {
                    if let CollectionChild::Value(value) = &mut collection.children[target.index] {
                        value.comments.push(comment);
                        continue;
                    }
                }
                trailing = None;
                collection.children.push(CollectionChild::Comment(comment));
            }
            TokenType::String
            | TokenType::Word
            | TokenType::BeginObject
            | TokenType::BeginArray => {
                let value = parse_value(reader);
                collection.children.push(CollectionChild::Value(value));
                trailing = Some(TrailingTarget {
                    index: collection.children.len() - 1,
                    row: reader.previous_row().unwrap_or(0),
                });
            }
            // Stray colon or mismatched closing brace.
            _ => reader.skip(),
        }
    }
    collection
}

/// Parses one value. The caller guarantees the reader is positioned on a
/// token.
fn parse_value(reader: &mut JsonReader) -> Value {
    match reader.peek_type() {
        Some(TokenType::BeginObject) => Value::container(Node::Document(parse_document(reader))),
        Some(TokenType::BeginArray) => Value::container(Node::Collection(parse_collection(reader))),
        _ => match reader.next_token() {
            Some(token) => {
                let value_type = match token.token_type {
                    TokenType::String => ValueType::String,
                    TokenType::Word => classify_word(&token.text),
                    _ => ValueType::Unknown,
                };
                Value::literal(token.text, value_type)
            }
            None => Value::literal("", ValueType::Unknown),
        },
    }
}

fn collect_comments(reader: &mut JsonReader, out: &mut Vec<Comment>) {
    while matches!(
        reader.peek_type(),
        Some(TokenType::LineComment) | Some(TokenType::BlockComment)
    ) {
        let Some(token) = reader.next_token() else { break };
        out.push(Comment::from_token(&token));
    }
}

/// Literal grammars are tried in order; the first match wins, and a word
/// matching none of them classifies as [`ValueType::Unknown`].
fn classify_word(text: &str) -> ValueType {
    match text {
        "true" | "false" => ValueType::Boolean,
        "null" => ValueType::Null,
        _ if is_number_literal(text) => ValueType::Number,
        _ => ValueType::Unknown,
    }
}

/// Strict numeric grammar: optional sign, then digits, a fraction, or both,
/// then an optional exponent. The whole text must match; `2.` and a bare
/// sign fail, while `-.3` passes.
fn is_number_literal(text: &str) -> bool {
    let mut phase = NumberPhase::Beginning;
    for ch in text.chars() {
        phase = match phase {
            NumberPhase::Beginning => match ch {
                '-' | '+' => NumberPhase::PastSign,
                '.' => NumberPhase::PastDecimalPoint,
                '0'..='9' => NumberPhase::PastWhole,
                _ => return false,
            },
            NumberPhase::PastSign => match ch {
                '.' => NumberPhase::PastDecimalPoint,
                '0'..='9' => NumberPhase::PastWhole,
                _ => return false,
            },
            NumberPhase::PastWhole => match ch {
                '0'..='9' => NumberPhase::PastWhole,
                '.' => NumberPhase::PastDecimalPoint,
                'e' | 'E' => NumberPhase::PastE,
                _ => return false,
            },
            NumberPhase::PastDecimalPoint => match ch {
                '0'..='9' => NumberPhase::PastFractional,
                _ => return false,
            },
            NumberPhase::PastFractional => match ch {
                '0'..='9' => NumberPhase::PastFractional,
                'e' | 'E' => NumberPhase::PastE,
                _ => return false,
            },
            NumberPhase::PastE => match ch {
                '+' | '-' => NumberPhase::PastExpSign,
                '0'..='9' => NumberPhase::PastExponent,
                _ => return false,
            },
            NumberPhase::PastExpSign => match ch {
                '0'..='9' => NumberPhase::PastExponent,
                _ => return false,
            },
            NumberPhase::PastExponent => match ch {
                '0'..='9' => NumberPhase::PastExponent,
                _ => return false,
            },
        };
    }
    matches!(
        phase,
        NumberPhase::PastWhole | NumberPhase::PastFractional | NumberPhase::PastExponent
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberPhase {
    Beginning,
    PastSign,
    PastWhole,
    PastDecimalPoint,
    PastFractional,
    PastE,
    PastExpSign,
    PastExponent,
}
