use crate::{Error, ErrorKind};
use std::io::Read;
use std::str;

/// The smallest lexical unit of a document
///
/// A word is either a bare token or the de-quoted, unescaped content of a
/// quoted string. Newlines are significant in this format (they terminate
/// statements) so they surface as their own token rather than being folded
/// into whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Word(String),
    Newline,
}

impl Token {
    /// Returns the word content, or `None` for a newline
    #[inline]
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(s) => Some(s),
            Token::Newline => None,
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Token::Word(s) => format!("'{}'", s),
            Token::Newline => String::from("newline"),
        }
    }
}

/// Splits a character stream into words and newlines
///
/// The tokenizer understands single and double quoting, backslash escapes,
/// `#` comments, and backslash line continuations. It keeps a one-rune
/// pushback buffer for its own newline handling and a one-token pushback
/// buffer for the parser's lookahead.
///
/// ```
/// use uci::{Token, Tokenizer};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut tokens = Tokenizer::new(&b"option ifname 'eth0'\n"[..]);
/// assert_eq!(tokens.next()?, Token::Word(String::from("option")));
/// assert_eq!(tokens.next()?, Token::Word(String::from("ifname")));
/// assert_eq!(tokens.next()?, Token::Word(String::from("eth0")));
/// assert_eq!(tokens.next()?, Token::Newline);
/// assert!(tokens.next().unwrap_err().is_eof());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Tokenizer<R> {
    reader: R,
    peeked_rune: Option<char>,
    peeked_token: Option<Token>,

    // error to surface once a flushed partial token has been consumed
    pending: Option<ErrorKind>,
    row: usize,
    col: usize,
}

impl<R> Tokenizer<R>
where
    R: Read,
{
    pub fn new(reader: R) -> Self {
        Tokenizer {
            reader,
            peeked_rune: None,
            peeked_token: None,
            pending: None,
            row: 1,
            col: 0,
        }
    }

    /// Current position in the input: `(row, column)`
    ///
    /// Rows start at 1, columns at 0. Counters advance as runes are consumed,
    /// so after a token is returned the position points just past it.
    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Returns a token to be yielded by the next call to [`next`](Self::next)
    ///
    /// At most one token of pushback is supported.
    pub fn push_back(&mut self, token: Token) {
        debug_assert!(self.peeked_token.is_none());
        self.peeked_token = Some(token);
    }

    fn put_rune(&mut self, c: char) {
        debug_assert!(self.peeked_rune.is_none());
        self.peeked_rune = Some(c);
    }

    /// Decodes one rune from the underlying reader, or `None` at end of
    /// stream. Invalid UTF-8 is a fatal lexical error.
    fn next_rune(&mut self) -> Result<Option<char>, Error> {
        if let Some(c) = self.peeked_rune.take() {
            return Ok(Some(c));
        }

        let mut buf = [0u8; 4];
        let mut len = 0;
        loop {
            let mut byte = [0u8; 1];
            let n = match self.reader.read(&mut byte) {
                Ok(n) => n,
                Err(ref e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(Error::new(ErrorKind::Io {
                        row: self.row,
                        col: self.col,
                        source,
                    }));
                }
            };

            if n == 0 {
                if len == 0 {
                    return Ok(None);
                }
                // stream ended mid-sequence
                return Err(Error::new(ErrorKind::InvalidUtf8 {
                    row: self.row,
                    col: self.col,
                }));
            }

            buf[len] = byte[0];
            len += 1;
            match str::from_utf8(&buf[..len]) {
                Ok(s) => {
                    let c = s.chars().next().unwrap();
                    if c == '\n' {
                        self.row += 1;
                        self.col = 0;
                    } else {
                        self.col += 1;
                    }
                    return Ok(Some(c));
                }
                Err(e) if e.error_len().is_some() || len == 4 => {
                    return Err(Error::new(ErrorKind::InvalidUtf8 {
                        row: self.row,
                        col: self.col,
                    }));
                }
                Err(_) => {} // incomplete sequence, keep reading
            }
        }
    }

    fn skip_space(&mut self) -> Result<(), Error> {
        loop {
            match self.next_rune()? {
                Some(c) if is_space(c) => {}
                Some(c) => {
                    self.put_rune(c);
                    return Ok(());
                }
                None => return Ok(()),
            }
        }
    }

    /// Produces the next token
    ///
    /// End of stream is signaled with an error for which
    /// [`Error::is_eof`] returns true. A stream that ends inside an open
    /// quote still flushes whatever content was accumulated; the distinct
    /// unclosed-quote error follows on the call after.
    pub fn next(&mut self) -> Result<Token, Error> {
        if let Some(token) = self.peeked_token.take() {
            return Ok(token);
        }
        if let Some(kind) = self.pending.take() {
            return Err(Error::new(kind));
        }

        let mut dquote = false;
        let mut squote = false;
        let mut esc = false;
        let mut text = String::new();

        self.skip_space()?;
        loop {
            let c = match self.next_rune()? {
                Some(c) => c,
                None => {
                    if esc {
                        text.push('\\');
                    }
                    if squote || dquote {
                        let kind = ErrorKind::UnclosedQuote {
                            quote: if squote { '\'' } else { '"' },
                            row: self.row,
                            col: self.col,
                        };
                        if text.is_empty() {
                            return Err(Error::new(kind));
                        }
                        self.pending = Some(kind);
                        return Ok(Token::Word(text));
                    }
                    if text.is_empty() {
                        return Err(Error::eof());
                    }
                    return Ok(Token::Word(text));
                }
            };

            match c {
                '"' => {
                    if esc {
                        text.push('"');
                        esc = false;
                    } else if squote {
                        text.push('"');
                    } else {
                        dquote = !dquote;
                    }
                }
                '\'' => {
                    if esc {
                        text.push('\'');
                        esc = false;
                    } else if dquote {
                        text.push('\'');
                    } else {
                        squote = !squote;
                    }
                }
                '\\' => {
                    // no escaping inside single quotes
                    if squote {
                        text.push('\\');
                    } else if esc {
                        text.push('\\');
                        esc = false;
                    } else {
                        esc = true;
                    }
                }
                '\n' => {
                    if squote || dquote {
                        text.push('\n');
                        esc = false;
                    } else if esc {
                        // line continuation absorbs the newline
                        esc = false;
                    } else if !text.is_empty() {
                        self.put_rune('\n');
                        return Ok(Token::Word(text));
                    } else {
                        return Ok(Token::Newline);
                    }
                }
                '#' => {
                    if squote || dquote || esc {
                        text.push('#');
                        esc = false;
                        continue;
                    }
                    // comment runs through the end of the line; the newline
                    // stays significant as the statement terminator
                    loop {
                        match self.next_rune()? {
                            Some('\n') => {
                                if !text.is_empty() {
                                    self.put_rune('\n');
                                    return Ok(Token::Word(text));
                                }
                                return Ok(Token::Newline);
                            }
                            Some(_) => {}
                            None => {
                                if text.is_empty() {
                                    return Err(Error::eof());
                                }
                                return Ok(Token::Word(text));
                            }
                        }
                    }
                }
                c if is_space(c) => {
                    if esc || squote || dquote {
                        text.push(' ');
                        esc = false;
                    } else {
                        return Ok(Token::Word(text));
                    }
                }
                c => {
                    if esc {
                        text.push(escape(c));
                        esc = false;
                    } else {
                        text.push(c);
                    }
                }
            }
        }
    }
}

fn escape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'v' => '\x0b',
        _ => c,
    }
}

/// Horizontal whitespace. Newlines terminate statements and are never
/// skipped implicitly.
fn is_space(c: char) -> bool {
    c != '\n' && c.is_whitespace()
}
