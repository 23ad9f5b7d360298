//! # indentx
//!
//! Reindents and minifies lenient JSON and XML text.
//!
//! The JSON path accepts a superset of JSON as it appears in config files
//! and editors mid-edit: unquoted keys, single-quoted strings, missing and
//! trailing commas, and `//` / `/* */` comments. Input is parsed into a
//! comment-preserving tree and rendered back under configurable indentation,
//! spacing, and newline settings; minification is the same renderer with
//! everything empty, comments removed, and quoting normalized to valid JSON.
//! The XML path re-indents tag structure directly from the text with a
//! depth stack, no tree involved.
//!
//! Neither path rejects malformed input. Structurally broken text produces a
//! best-effort result, and the only "no output" case is input that is empty
//! or all whitespace.
//!
//! ## Command-Line Tool
//!
//! The crate ships the `indentx` binary:
//!
//! ```sh
//! # Reindent a file (JSON or XML, detected from the first character)
//! indentx config.json
//!
//! # Minify from stdin
//! indentx --minify < data.json
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use indentx::Formatter;
//!
//! let formatter = Formatter::new();
//!
//! let pretty = formatter.format("{hello:'world', // greeting\nvalue:123}").unwrap();
//! let compact = formatter.unindent(&pretty).unwrap();
//! assert_eq!(compact, "{\"hello\":\"world\",\"value\":123}");
//! ```
//!
//! ## Serializing Rust Types
//!
//! Any type implementing [`serde::Serialize`] can be pretty-printed
//! directly:
//!
//! ```rust
//! use indentx::Formatter;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Player {
//!     name: String,
//!     scores: Vec<i32>,
//! }
//!
//! let player = Player { name: "Alice".into(), scores: vec![95, 87] };
//! let output = Formatter::new().serialize(&player).unwrap();
//! assert!(output.contains("\"name\": \"Alice\""));
//! ```
//!
//! ## Working with the Tree
//!
//! The parsed tree is public for callers that want to inspect structure or
//! comments:
//!
//! ```rust
//! use indentx::{build, JsonReader, Node};
//!
//! let mut reader = JsonReader::new("[1, 2., -.3]");
//! let Some(Node::Collection(list)) = build(&mut reader) else { panic!() };
//! assert_eq!(list.children.len(), 3);
//! ```

mod buffer;
mod builder;
mod convert;
mod error;
mod formatter;
mod model;
mod options;
mod tokenizer;
mod xml;

pub use crate::builder::build;
pub use crate::convert::value_to_node;
pub use crate::error::IndentError;
pub use crate::formatter::{Formatter, JsonFormatter};
pub use crate::model::{
    Collection, CollectionChild, Comment, CommentType, Document, DocumentChild, InputPosition,
    JsonToken, Node, Payload, Property, PropertyName, TokenType, Value, ValueType,
};
pub use crate::options::FormatOptions;
pub use crate::tokenizer::{JsonReader, TokenGenerator};
pub use crate::xml::XmlIndentFormatter;
