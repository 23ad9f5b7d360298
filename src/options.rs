/// Layout options for the JSON renderer.
///
/// The defaults produce tab-indented, comment-preserving output. Use
/// [`FormatOptions::minified`] for the inverse transform.
///
/// # Example
///
/// ```rust
/// use indentx::FormatOptions;
///
/// let mut options = FormatOptions::default();
/// options.indent_character = "  ".to_string();
/// options.remove_comments = true;
/// ```
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// String repeated once per nesting depth. Default: one tab.
    pub indent_character: String,

    /// String inserted after `:` and before a trailing comment.
    /// Default: one space.
    pub spacer: String,

    /// Line terminator. Default: `\n`. An empty string collapses the
    /// output onto a single line.
    pub newline: String,

    /// Omit every comment node from the output. Default: false.
    pub remove_comments: bool,

    /// Rewrite unquoted and single-quoted keys and string values with
    /// double-quote delimiters. Default: false.
    pub normalize_quotes: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_character: "\t".to_string(),
            spacer: " ".to_string(),
            newline: "\n".to_string(),
            remove_comments: false,
            normalize_quotes: false,
        }
    }
}

impl FormatOptions {
    /// Options for the minify transform: no indentation, no spacing, no
    /// newlines, comments removed, and quoting normalized so the result is
    /// strictly valid JSON whenever every contained literal is.
    pub fn minified() -> Self {
        Self {
            indent_character: String::new(),
            spacer: String::new(),
            newline: String::new(),
            remove_comments: true,
            normalize_quotes: true,
        }
    }
}
