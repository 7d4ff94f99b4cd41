use crate::{ConfigOption, Error, ErrorKind, OptionValue, Package, Section, Token, Tokenizer};
use std::io::Read;
use std::str::FromStr;

pub(crate) const PACKAGE: &str = "package";
pub(crate) const CONFIG: &str = "config";
pub(crate) const OPTION: &str = "option";
pub(crate) const LIST: &str = "list";

/// Grammar-driven parser over a token stream
///
/// ```text
/// document     := newline* [package-stmt newline] section*
/// package-stmt := "package" package-name
/// section      := "config" type-name [section-name] newline option*
/// option       := ("option" name value | "list" name value) newline
/// ```
///
/// The parser works purely on tokens with single-token pushback; it never
/// touches raw characters itself. The first malformed construct aborts the
/// parse, there is no recovery.
pub(crate) struct Parser<R> {
    tokens: Tokenizer<R>,
}

impl<R> Parser<R>
where
    R: Read,
{
    pub(crate) fn new(reader: R) -> Self {
        Parser {
            tokens: Tokenizer::new(reader),
        }
    }

    /// Next token, with a clean end of stream mapped to `None`. Call sites
    /// decide whether the stream is allowed to end there.
    fn next_opt(&mut self) -> Result<Option<Token>, Error> {
        match self.tokens.next() {
            Ok(token) => Ok(Some(token)),
            Err(e) if e.is_eof() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Next token, which must be a word. Ending the stream or the line here
    /// is a syntax error naming what was expected.
    fn next_word(&mut self, expected: &str) -> Result<String, Error> {
        match self.next_opt()? {
            Some(Token::Word(word)) => Ok(word),
            Some(Token::Newline) => Err(self.syntax(format!("expected {}, found newline", expected))),
            None => Err(self.syntax(format!("expected {}, found end of file", expected))),
        }
    }

    /// Consumes zero or more newlines, leaving the first other token pushed
    /// back. End of stream is fine here.
    fn skip_newlines(&mut self) -> Result<(), Error> {
        while let Some(token) = self.next_opt()? {
            if token != Token::Newline {
                self.tokens.push_back(token);
                break;
            }
        }
        Ok(())
    }

    /// Consumes the run of at least one newline that terminates a statement.
    /// Returns false when the stream ended, true when more tokens follow.
    /// A file may end mid-section without a trailing newline, so end of
    /// stream satisfies the terminator even when no newline was seen.
    fn end_statement(&mut self) -> Result<bool, Error> {
        let mut saw_newline = false;
        loop {
            match self.next_opt()? {
                Some(Token::Newline) => saw_newline = true,
                Some(token) => {
                    if !saw_newline {
                        return Err(
                            self.syntax(format!("expected newline, found {}", token.describe()))
                        );
                    }
                    self.tokens.push_back(token);
                    return Ok(true);
                }
                None => return Ok(false),
            }
        }
    }

    /// A package declaration must be newline-terminated; a stream that stops
    /// right after the name is truncated, not a clean end.
    fn require_newline(&mut self) -> Result<(), Error> {
        match self.next_opt()? {
            Some(Token::Newline) => Ok(()),
            Some(token) => {
                Err(self.syntax(format!("expected newline, found {}", token.describe())))
            }
            None => Err(self.syntax(String::from(
                "expected newline after package declaration, found end of file",
            ))),
        }
    }

    fn syntax(&self, msg: String) -> Error {
        let (row, col) = self.tokens.position();
        Error::new(ErrorKind::Syntax { msg, row, col })
    }

    pub(crate) fn parse(mut self) -> Result<Package, Error> {
        let mut package = Package::default();

        self.skip_newlines()?;
        let first = match self.next_opt()? {
            Some(token) => token,
            None => return Ok(package),
        };

        if first.as_word() == Some(PACKAGE) {
            let name = self.next_word("package name")?;
            if !valid_package_name(&name) {
                return Err(self.syntax(format!("invalid package name '{}'", name)));
            }
            package.name = name;
            self.require_newline()?;
        } else {
            self.tokens.push_back(first);
        }

        loop {
            self.skip_newlines()?;
            match self.next_opt()? {
                None => break,
                Some(Token::Word(ref word)) if word == CONFIG => {
                    package.sections.push(self.parse_section()?);
                }
                Some(token) => {
                    return Err(self.syntax(format!(
                        "expected '{}', found {}",
                        CONFIG,
                        token.describe()
                    )));
                }
            }
        }

        Ok(package)
    }

    /// Parses one section; the `config` keyword has already been consumed.
    fn parse_section(&mut self) -> Result<Section, Error> {
        let ty = self.next_word("section type")?;
        if !valid_type_name(&ty) {
            return Err(self.syntax(format!("invalid section type '{}'", ty)));
        }
        let mut section = Section::new(ty);

        match self.next_opt()? {
            // the stream may end right after the type
            None => return Ok(section),
            Some(Token::Newline) => self.tokens.push_back(Token::Newline),
            Some(Token::Word(name)) => {
                if !valid_name(&name) {
                    return Err(self.syntax(format!("invalid section name '{}'", name)));
                }
                section.name = name;
            }
        }
        if !self.end_statement()? {
            return Ok(section);
        }

        loop {
            let keyword = match self.next_opt()? {
                None => return Ok(section),
                Some(Token::Word(word)) => {
                    if word == CONFIG {
                        // next section, hand it back to the outer loop
                        self.tokens.push_back(Token::Word(word));
                        return Ok(section);
                    }
                    if word != OPTION && word != LIST {
                        return Err(self.syntax(format!(
                            "expected '{}' or '{}', found '{}'",
                            OPTION, LIST, word
                        )));
                    }
                    word
                }
                Some(token) => {
                    return Err(self.syntax(format!(
                        "expected '{}' or '{}', found {}",
                        OPTION,
                        LIST,
                        token.describe()
                    )));
                }
            };

            let name = self.next_word("option name")?;
            if !valid_name(&name) {
                return Err(self.syntax(format!("invalid option name '{}'", name)));
            }
            let value = self.next_word("option value")?;
            let value = if keyword == LIST {
                OptionValue::List(vec![value])
            } else {
                OptionValue::Scalar(value)
            };
            self.merge_option(&mut section, name, value)?;

            if !self.end_statement()? {
                return Ok(section);
            }
        }
    }

    /// Folds an option line into the section. Repeated `list` lines append,
    /// a repeated `option` line overwrites, and a kind mismatch for the same
    /// name is fatal.
    fn merge_option(
        &self,
        section: &mut Section,
        name: String,
        value: OptionValue,
    ) -> Result<(), Error> {
        match section.options.iter_mut().find(|opt| opt.name == name) {
            None => section.options.push(ConfigOption { name, value }),
            Some(existing) => match (&mut existing.value, value) {
                (OptionValue::List(values), OptionValue::List(new)) => values.extend(new),
                (OptionValue::Scalar(value), OptionValue::Scalar(new)) => *value = new,
                _ => {
                    let (row, col) = self.tokens.position();
                    return Err(Error::new(ErrorKind::TypeConflict {
                        option: name,
                        row,
                        col,
                    }));
                }
            },
        }
        Ok(())
    }
}

impl Package {
    /// Parses a document from a reader, consuming it to end of stream
    ///
    /// ```
    /// use uci::Package;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let package = Package::parse(&b"config interface 'lan'\n"[..])?;
    /// assert_eq!(package.sections.len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse<R: Read>(reader: R) -> Result<Package, Error> {
        Parser::new(reader).parse()
    }

    /// Parses a document held entirely in memory
    pub fn from_slice(data: &[u8]) -> Result<Package, Error> {
        Package::parse(data)
    }
}

impl FromStr for Package {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Package::from_slice(s.as_bytes())
    }
}

/// A name is one or more letters, digits, or underscores.
pub(crate) fn valid_name(s: &str) -> bool {
    validate(s, false, false)
}

/// Package names additionally allow hyphens.
pub(crate) fn valid_package_name(s: &str) -> bool {
    validate(s, true, false)
}

/// Section types are validated more permissively: any printable ASCII
/// character is accepted on top of the name alphabet.
pub(crate) fn valid_type_name(s: &str) -> bool {
    validate(s, false, true)
}

fn validate(s: &str, is_package: bool, is_type: bool) -> bool {
    if s.is_empty() {
        return false;
    }
    s.chars().all(|c| {
        if c.is_alphanumeric() || c == '_' {
            return true;
        }
        if is_package && c == '-' {
            return true;
        }
        is_type && ('!'..='~').contains(&c)
    })
}
