use crate::model::{InputPosition, JsonToken, TokenType};

#[derive(Clone)]
struct ScannerState {
    original_text: String,
    chars: Vec<char>,
    byte_indices: Vec<usize>,
    current_position: InputPosition,
    token_position: InputPosition,
}

impl ScannerState {
    fn new(original_text: &str) -> Self {
        let mut chars: Vec<char> = Vec::new();
        let mut byte_indices: Vec<usize> = Vec::new();
        for (idx, ch) in original_text.char_indices() {
            byte_indices.push(idx);
            chars.push(ch);
        }
        byte_indices.push(original_text.len());

        Self {
            original_text: original_text.to_string(),
            chars,
            byte_indices,
            current_position: InputPosition::start(),
            token_position: InputPosition::start(),
        }
    }

    fn advance(&mut self) {
        self.current_position.index += 1;
        self.current_position.column += 1;
    }

    fn new_line(&mut self) {
        self.current_position.index += 1;
        self.current_position.row += 1;
        self.current_position.column = 0;
    }

    fn set_token_start(&mut self) {
        self.token_position = self.current_position;
    }

    fn make_token_from_buffer(&self, token_type: TokenType, trim_end: bool) -> JsonToken {
        let start = self.byte_indices[self.token_position.index];
        let end = self.byte_indices[self.current_position.index];
        let mut substring = self.original_text[start..end].to_string();
        if trim_end {
            substring = substring.trim_end().to_string();
        }
        JsonToken {
            token_type,
            text: substring,
            input_position: self.token_position,
        }
    }

    fn make_token(&self, token_type: TokenType, text: &str) -> JsonToken {
        JsonToken {
            token_type,
            text: text.to_string(),
            input_position: self.token_position,
        }
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.current_position.index).copied()
    }

    fn lookahead(&self) -> Option<char> {
        self.chars.get(self.current_position.index + 1).copied()
    }

    fn at_end(&self) -> bool {
        self.current_position.index >= self.chars.len()
    }
}

/// Streams tokens over lenient JSON text.
///
/// Never fails: malformed or truncated constructs still yield a best-effort
/// token covering the consumed characters, so the iterator item is a plain
/// [`JsonToken`] rather than a `Result`.
pub struct TokenGenerator {
    state: ScannerState,
}

impl TokenGenerator {
    pub fn new(input: &str) -> Self {
        Self { state: ScannerState::new(input) }
    }
}

impl Iterator for TokenGenerator {
    type Item = JsonToken;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let ch = self.state.current()?;
            match ch {
                '\n' => self.state.new_line(),
                _ if ch.is_whitespace() => self.state.advance(),
                '{' => return Some(process_single_char(&mut self.state, "{", TokenType::BeginObject)),
                '}' => return Some(process_single_char(&mut self.state, "}", TokenType::EndObject)),
                '[' => return Some(process_single_char(&mut self.state, "[", TokenType::BeginArray)),
                ']' => return Some(process_single_char(&mut self.state, "]", TokenType::EndArray)),
                ':' => return Some(process_single_char(&mut self.state, ":", TokenType::Colon)),
                ',' => return Some(process_single_char(&mut self.state, ",", TokenType::Comma)),
                '"' | '\'' => return Some(process_string(&mut self.state, ch)),
                '/' if matches!(self.state.lookahead(), Some('/') | Some('*')) => {
                    return Some(process_comment(&mut self.state));
                }
                _ => return Some(process_word(&mut self.state)),
            }
        }
    }
}

fn process_single_char(state: &mut ScannerState, symbol: &str, token_type: TokenType) -> JsonToken {
    state.set_token_start();
    let token = state.make_token(token_type, symbol);
    state.advance();
    token
}

/// Consumes a quoted string. An unterminated string is accepted through to
/// the end of the input rather than rejected.
fn process_string(state: &mut ScannerState, quote: char) -> JsonToken {
    state.set_token_start();
    state.advance();

    let mut last_char_began_escape = false;
    loop {
        let ch = match state.current() {
            Some(ch) => ch,
            None => return state.make_token_from_buffer(TokenType::String, false),
        };

        if ch == '\n' {
            state.new_line();
        } else {
            state.advance();
        }

        if last_char_began_escape {
            last_char_began_escape = false;
            continue;
        }
        if ch == '\\' {
            last_char_began_escape = true;
        } else if ch == quote {
            return state.make_token_from_buffer(TokenType::String, false);
        }
    }
}

/// Consumes a `//` or `/* */` comment. Line comments end at the newline or
/// end of input; an unterminated block comment runs to the end of input.
fn process_comment(state: &mut ScannerState) -> JsonToken {
    state.set_token_start();
    state.advance();
    let is_block_comment = state.current() == Some('*');
    state.advance();

    let mut last_char_was_asterisk = false;
    loop {
        let ch = match state.current() {
            Some(ch) => ch,
            None => {
                let token_type = if is_block_comment { TokenType::BlockComment } else { TokenType::LineComment };
                return state.make_token_from_buffer(token_type, !is_block_comment);
            }
        };

        if ch == '\n' {
            if !is_block_comment {
                return state.make_token_from_buffer(TokenType::LineComment, true);
            }
            state.new_line();
            last_char_was_asterisk = false;
            continue;
        }

        state.advance();
        if is_block_comment && ch == '/' && last_char_was_asterisk {
            return state.make_token_from_buffer(TokenType::BlockComment, false);
        }
        last_char_was_asterisk = ch == '*';
    }
}

/// Consumes a run of characters that is neither whitespace, structural
/// punctuation, a quote, nor the start of a comment. Numbers, booleans,
/// `null`, and unquoted identifiers all land here.
fn process_word(state: &mut ScannerState) -> JsonToken {
    state.set_token_start();
    loop {
        let ch = match state.current() {
            Some(ch) => ch,
            None => return state.make_token_from_buffer(TokenType::Word, false),
        };

        let ends_word = ch.is_whitespace()
            || matches!(ch, '{' | '}' | '[' | ']' | ':' | ',' | '"' | '\'')
            || (ch == '/' && matches!(state.lookahead(), Some('/') | Some('*')));
        if ends_word {
            return state.make_token_from_buffer(TokenType::Word, false);
        }
        state.advance();
    }
}

/// Pull-based cursor over the token stream.
///
/// The whole input is tokenized once up front into an index-addressed
/// buffer, which gives the builder unlimited lookahead without tying its
/// lifetime to the scanner.
pub struct JsonReader {
    tokens: Vec<JsonToken>,
    index: usize,
}

impl JsonReader {
    pub fn new(text: &str) -> Self {
        Self {
            tokens: TokenGenerator::new(text).collect(),
            index: 0,
        }
    }

    pub fn peek(&self) -> Option<&JsonToken> {
        self.tokens.get(self.index)
    }

    pub fn peek_type(&self) -> Option<TokenType> {
        self.peek().map(|t| t.token_type)
    }

    pub fn next_token(&mut self) -> Option<JsonToken> {
        let token = self.tokens.get(self.index).cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    /// Skips the current token. No-op at end of input.
    pub fn skip(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }

    /// Source row of the most recently consumed token.
    pub fn previous_row(&self) -> Option<usize> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.input_position.row)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
