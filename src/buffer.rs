/// Line-oriented output buffer for the renderer.
///
/// Pieces accumulate into the current line; ending a line joins them, trims
/// trailing whitespace, and appends the configured terminator. With an empty
/// terminator the pieces simply run together, which is what minified output
/// relies on.
#[derive(Debug, Default)]
pub struct TextBuffer {
    line_buff: Vec<String>,
    doc_buff: Vec<String>,
}

impl TextBuffer {
    pub fn add(&mut self, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.line_buff.push(value.to_string());
        }
        self
    }

    pub fn end_line(&mut self, eol: &str) -> &mut Self {
        self.add_line_to_doc(eol);
        self
    }

    pub fn flush(&mut self) -> &mut Self {
        self.add_line_to_doc("");
        self
    }

    pub fn as_string(&self) -> String {
        self.doc_buff.join("")
    }

    fn add_line_to_doc(&mut self, eol: &str) {
        if self.line_buff.is_empty() && eol.is_empty() {
            return;
        }

        let mut line = self.line_buff.join("");
        while line.ends_with(|c: char| c.is_whitespace()) {
            line.pop();
        }

        self.doc_buff.push(format!("{}{}", line, eol));
        self.line_buff.clear();
    }
}
