use crate::{ConfigOption, OptionValue, Package, Section};
use std::fmt::{self, Write as _};
use std::io;

/// Single-quote wrapping with the POSIX-shell convention for embedded
/// quotes: `'` becomes `'"'"'`.
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char('\'')?;
        for c in self.0.chars() {
            if c == '\'' {
                f.write_str("'\"'\"'")?;
            } else {
                f.write_char(c)?;
            }
        }
        f.write_char('\'')
    }
}

impl fmt::Display for ConfigOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.value {
            OptionValue::Scalar(value) => {
                writeln!(f, "\toption\t{}\t{}", self.name, Quoted(value))
            }
            OptionValue::List(values) => {
                for value in values {
                    writeln!(f, "\tlist\t{}\t{}", self.name, Quoted(value))?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "config {}", self.ty)?;
        if !self.name.is_empty() {
            write!(f, " {}", Quoted(&self.name))?;
        }
        writeln!(f)?;
        for option in &self.options {
            option.fmt(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Package {
    /// Renders the document as canonical quoted text
    ///
    /// Re-parsing the output yields a structurally equivalent document.
    /// Comments and original whitespace are not part of the model, so they
    /// never survive the trip.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.name.is_empty() {
            writeln!(f, "package {}", Quoted(&self.name))?;
            writeln!(f)?;
        }
        for section in &self.sections {
            section.fmt(f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Package {
    /// Serializes the document into a writer
    ///
    /// ```
    /// use uci::Package;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let package = Package::from_slice(b"config globals 'globals'\n")?;
    /// let mut out: Vec<u8> = Vec::new();
    /// package.write_to(&mut out)?;
    /// assert_eq!(out, b"config globals 'globals'\n\n");
    /// # Ok(())
    /// # }
    /// ```
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self)
    }
}
