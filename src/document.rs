use std::borrow::Cow;
use std::slice;

/// The root document parsed from one input stream
///
/// A package owns an ordered list of sections. The name is empty when the
/// source carried no `package` declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    pub name: String,
    pub sections: Vec<Section>,
}

impl Package {
    /// All sections of the given type, in document order
    ///
    /// ```
    /// use uci::Package;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let package: Package = "\
    /// config interface 'lan'
    /// config globals
    /// config interface 'wan'
    /// ".parse()?;
    ///
    /// let names: Vec<&str> = package
    ///     .sections_by_type("interface")
    ///     .map(|s| s.name.as_str())
    ///     .collect();
    /// assert_eq!(names, vec!["lan", "wan"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn sections_by_type<'a>(&'a self, ty: &'a str) -> impl Iterator<Item = &'a Section> {
        self.sections.iter().filter(move |section| section.ty == ty)
    }
}

/// A named or anonymous block introduced by `config`
///
/// The type is always non-empty; an empty name denotes an anonymous section.
/// Options are kept in insertion order and their names are unique within the
/// section, so serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    pub ty: String,
    pub name: String,
    pub options: Vec<ConfigOption>,
}

impl Section {
    pub fn new<T: Into<String>>(ty: T) -> Self {
        Section {
            ty: ty.into(),
            name: String::new(),
            options: Vec::new(),
        }
    }

    /// Looks up an option by name
    pub fn option(&self, name: &str) -> Option<&ConfigOption> {
        self.options.iter().find(|opt| opt.name == name)
    }

    /// True when the section has no name
    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

/// A named entry within a section, introduced by `option` or `list`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigOption {
    pub name: String,
    pub value: OptionValue,
}

/// The value shape of an option: a single scalar or an ordered list
///
/// The two shapes are mutually exclusive for one option name within one
/// section for its entire lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionValue {
    Scalar(String),
    List(Vec<String>),
}

impl ConfigOption {
    pub fn scalar<N, V>(name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        ConfigOption {
            name: name.into(),
            value: OptionValue::Scalar(value.into()),
        }
    }

    pub fn list<N, I, V>(name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        ConfigOption {
            name: name.into(),
            value: OptionValue::List(values.into_iter().map(Into::into).collect()),
        }
    }

    /// True when the option was declared with the `list` keyword
    pub fn is_list(&self) -> bool {
        matches!(self.value, OptionValue::List(_))
    }

    /// Boolean coercion of the scalar slot
    ///
    /// `1`, `true`, `yes`, and `on` are true; every other value is false,
    /// and a list option is always false.
    pub fn as_bool(&self) -> bool {
        match &self.value {
            OptionValue::Scalar(v) => matches!(v.as_str(), "1" | "true" | "yes" | "on"),
            OptionValue::List(_) => false,
        }
    }

    /// List view of the value: a scalar is a one-element sequence
    pub fn values(&self) -> &[String] {
        match &self.value {
            OptionValue::Scalar(v) => slice::from_ref(v),
            OptionValue::List(vs) => vs,
        }
    }

    /// Flattened string view: a scalar verbatim, a list joined with spaces
    pub fn value(&self) -> Cow<'_, str> {
        match &self.value {
            OptionValue::Scalar(v) => Cow::Borrowed(v),
            OptionValue::List(vs) => Cow::Owned(vs.join(" ")),
        }
    }
}
