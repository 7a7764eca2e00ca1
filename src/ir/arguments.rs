//! Argument lists
//!
//! Structured argument and template-parameter records as the front end
//! captured them. A declaration keeps both the raw argument string (on the
//! entry itself) and this structured form; nested generic declarations stack
//! one [`ArgumentList`] per template layer, outermost first.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// One argument of a function-like declaration or one template parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// Call attribute, e.g. `in`/`out` for IDL-like languages.
    pub attrib: String,
    /// Declared type text.
    pub type_: String,
    /// Type text with typedefs resolved, when the front end knows it.
    pub canonical_type: String,
    pub name: String,
    /// Array specifier trailing the name, e.g. `[16]`.
    pub array: String,
    pub default_value: String,
    pub docs: String,
}

impl Argument {
    pub fn new(type_: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_: type_.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn has_documentation(&self) -> bool {
        !self.docs.is_empty()
    }
}

/// Reference qualifier of a member function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefQualifier {
    #[default]
    None,
    LValue,
    RValue,
}

/// An ordered argument list plus the qualifiers that apply to the list as a
/// whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentList {
    pub args: Vec<Argument>,
    pub constness: bool,
    pub volatility: bool,
    pub pure_virtual: bool,
    /// The declaration was written with an explicit empty parameter list.
    pub no_parameters: bool,
    pub trailing_return_type: Option<String>,
    pub ref_qualifier: RefQualifier,
}

impl ArgumentList {
    pub fn new(args: Vec<Argument>) -> Self {
        Self {
            args,
            ..Self::default()
        }
    }

    /// True when any argument carries documentation.
    pub fn has_documentation(&self) -> bool {
        self.args.iter().any(Argument::has_documentation)
    }
}

// Deref to the inner Vec for ergonomic access to the arguments
impl Deref for ArgumentList {
    type Target = Vec<Argument>;

    fn deref(&self) -> &Self::Target {
        &self.args
    }
}

impl DerefMut for ArgumentList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.args
    }
}

impl<'a> IntoIterator for &'a ArgumentList {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter()
    }
}

impl fmt::Display for ArgumentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArgumentList({} args)", self.args.len())
    }
}

/// Template-parameter-list layers for nested generic declarations,
/// outermost first.
pub type ArgumentLists = Vec<ArgumentList>;
