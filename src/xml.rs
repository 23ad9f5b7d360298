/// Re-indents or minifies markup without building a tree.
///
/// A single pass walks the text through {text, tag, comment} states,
/// maintaining a stack of open tag names for the current depth. Opening tags
/// push, matching closing tags pop; self-closing tags, declarations
/// (`<?...`, `<!...`), and comments never touch the stack. A closing tag
/// that does not match the top of the stack leaves the stack unchanged and
/// formatting continues; nothing here ever fails.
pub struct XmlIndentFormatter {
    indent_character: String,
    unindent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LastEmit {
    Nothing,
    OpenTag,
    ClosedTag,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Opening,
    Closing,
    SelfClosing,
}

impl XmlIndentFormatter {
    pub fn new(indent_character: &str) -> Self {
        Self {
            indent_character: indent_character.to_string(),
            unindent: false,
        }
    }

    /// A formatter that strips whitespace-only runs between tags and
    /// collapses whitespace inside them instead of inserting indentation.
    pub fn unindenting() -> Self {
        Self {
            indent_character: String::new(),
            unindent: true,
        }
    }

    pub fn indent(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut stack: Vec<String> = Vec::new();
        let mut last = LastEmit::Nothing;

        let mut i = 0;
        while i < chars.len() {
            if chars[i] != '<' {
                let end = chars[i..]
                    .iter()
                    .position(|&c| c == '<')
                    .map(|p| i + p)
                    .unwrap_or(chars.len());
                let run: String = chars[i..end].iter().collect();
                let trimmed = run.trim();
                if !trimmed.is_empty() {
                    out.push_str(trimmed);
                    last = LastEmit::Text;
                }
                i = end;
                continue;
            }

            if starts_with_at(&chars, i, "<!--") {
                let end = find_comment_end(&chars, i);
                if !self.unindent && last != LastEmit::Nothing {
                    self.break_line(&mut out, stack.len());
                }
                // Comment content passes through untouched.
                out.extend(&chars[i..end]);
                last = LastEmit::ClosedTag;
                i = end;
                continue;
            }

            let (tag, end) = scan_tag(&chars, i);
            // Only the unindent transform touches the tag's interior;
            // indenting emits attribute regions verbatim.
            let text = if self.unindent { normalize_tag(&tag.text) } else { tag.text };
            match tag.kind {
                TagKind::Closing => {
                    if stack.last() == Some(&tag.name) {
                        stack.pop();
                    }
                    if !self.unindent
                        && !matches!(last, LastEmit::OpenTag | LastEmit::Text | LastEmit::Nothing)
                    {
                        self.break_line(&mut out, stack.len());
                    }
                    out.push_str(&text);
                    last = LastEmit::ClosedTag;
                }
                TagKind::SelfClosing => {
                    if !self.unindent && last != LastEmit::Nothing {
                        self.break_line(&mut out, stack.len());
                    }
                    out.push_str(&text);
                    last = LastEmit::ClosedTag;
                }
                TagKind::Opening => {
                    if !self.unindent && last != LastEmit::Nothing {
                        self.break_line(&mut out, stack.len());
                    }
                    out.push_str(&text);
                    stack.push(tag.name);
                    last = LastEmit::OpenTag;
                }
            }
            i = end;
        }

        out
    }

    fn break_line(&self, out: &mut String, depth: usize) {
        out.push('\n');
        out.push_str(&self.indent_character.repeat(depth));
    }
}

struct Tag {
    /// Verbatim source text of the tag, `<` through `>`.
    text: String,
    name: String,
    kind: TagKind,
}

/// Reads one tag starting at `start` (which holds `<`). A `>` inside a
/// quoted attribute value does not close the tag; a tag truncated by end of
/// input is accepted as-is.
fn scan_tag(chars: &[char], start: usize) -> (Tag, usize) {
    let mut quote: Option<char> = None;
    let mut end = chars.len();
    for (offset, &ch) in chars[start..].iter().enumerate() {
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                }
            }
            None => {
                if ch == '"' || ch == '\'' {
                    quote = Some(ch);
                } else if ch == '>' && offset > 0 {
                    end = start + offset + 1;
                    break;
                }
            }
        }
    }

    let raw = &chars[start..end];
    let inner: Vec<char> = {
        let mut inner = &raw[1..];
        if inner.last() == Some(&'>') {
            inner = &inner[..inner.len() - 1];
        }
        inner.to_vec()
    };

    let is_closing = inner.first() == Some(&'/');
    let is_declaration = matches!(inner.first(), Some('?') | Some('!'));
    let is_self_closing = !is_closing && (inner.last() == Some(&'/') || inner.last() == Some(&'?'));

    let name_start = if is_closing { 1 } else { 0 };
    let name: String = inner[name_start..]
        .iter()
        .take_while(|c| !c.is_whitespace() && **c != '/' && **c != '>')
        .collect();

    let kind = if is_closing {
        TagKind::Closing
    } else if is_self_closing || is_declaration {
        TagKind::SelfClosing
    } else {
        TagKind::Opening
    };

    (Tag { text: raw.iter().collect(), name, kind }, end)
}

/// Collapses whitespace runs outside quoted attribute values to a single
/// space, and drops padding before `/>` and `>`.
fn normalize_tag(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    let mut quote: Option<char> = None;
    let mut pending_space = false;

    for ch in raw.chars() {
        if let Some(q) = quote {
            text.push(ch);
            if ch == q {
                quote = None;
            }
            continue;
        }

        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }

        if pending_space {
            if ch != '>' && ch != '/' {
                text.push(' ');
            }
            pending_space = false;
        }

        text.push(ch);
        if ch == '"' || ch == '\'' {
            quote = Some(ch);
        }
    }

    text
}

fn starts_with_at(chars: &[char], start: usize, needle: &str) -> bool {
    let mut iter = chars[start..].iter();
    needle.chars().all(|expected| iter.next() == Some(&expected))
}

/// Index just past the closing `-->`, or the end of input for an
/// unterminated comment.
fn find_comment_end(chars: &[char], start: usize) -> usize {
    let mut i = start + 4;
    while i < chars.len() {
        if chars[i] == '>' && i >= 2 && chars[i - 1] == '-' && chars[i - 2] == '-' {
            return i + 1;
        }
        i += 1;
    }
    chars.len()
}
