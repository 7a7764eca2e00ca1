//! Supporting value types for entry records
//!
//! Small, plain data carriers: protection levels, virtualness, member
//! subkinds, group memberships, base-declaration references, external
//! tag-index origins, anchors, and located text payloads. None of these
//! validate anything; they store whatever the front end found.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Protection level of a declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protection {
    #[default]
    Public,
    Protected,
    Private,
    Package,
}

/// Virtualness of a declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Virtualness {
    #[default]
    Normal,
    Virtual,
    Pure,
}

/// Member subkind: plain method, signal, slot, property, or event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MethodType {
    #[default]
    Method,
    Signal,
    Slot,
    Property,
    Event,
}

/// How a "relates" association is handled downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelatesType {
    #[default]
    Simple,
    Duplicate,
    MemberOf,
}

/// Kind of group documentation block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupDocType {
    /// defgroup
    #[default]
    Normal,
    /// addtogroup
    Add,
    /// weakgroup
    Weak,
}

impl GroupDocType {
    /// The command name that defines this kind of group block.
    pub fn command(self) -> &'static str {
        match self {
            GroupDocType::Normal => "\\defgroup",
            GroupDocType::Add => "\\addtogroup",
            GroupDocType::Weak => "\\weakgroup",
        }
    }
}

/// Priority of a group membership; higher priorities win when the same
/// entry is claimed by several groups.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum GroupPriority {
    #[default]
    Lowest,
    AutoWeak,
    AutoAdd,
    AutoDef,
    InGroup,
}

/// One group membership of an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grouping {
    pub name: String,
    pub priority: GroupPriority,
}

impl Grouping {
    pub fn new(name: impl Into<String>, priority: GroupPriority) -> Self {
        Self {
            name: name.into(),
            priority,
        }
    }
}

/// One base-declaration (inheritance) reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseInfo {
    /// Name of the base declaration, as written in the source.
    pub name: String,
    /// Inheritance protection.
    pub protection: Protection,
    /// Inheritance virtualness.
    pub virtualness: Virtualness,
}

impl BaseInfo {
    pub fn new(name: impl Into<String>, protection: Protection, virtualness: Virtualness) -> Self {
        Self {
            name: name.into(),
            protection,
            virtualness,
        }
    }
}

/// Origin triple for a symbol resolved from a pre-built external tag index
/// rather than locally scanned source.
///
/// Presence on an entry is an `Option<TagInfo>`: validity is explicit, never
/// signaled by empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    pub name: String,
    pub file: String,
    pub anchor: String,
}

/// A cross-reference marker defined inside an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    pub label: String,
    pub title: String,
}

impl Anchor {
    pub fn new(label: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            title: title.into(),
        }
    }
}

/// A free-form text payload paired with the file and line it was found at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    pub file: String,
    pub line: i32,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, file: impl Into<String>, line: i32) -> Self {
        Self {
            text: text.into(),
            file: file.into(),
            line,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Overwrite the payload and its origin in one step.
    pub fn set(&mut self, text: impl Into<String>, file: impl Into<String>, line: i32) {
        self.text = text.into();
        self.file = file.into();
        self.line = line;
    }
}

impl fmt::Display for TextBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Language the entry was scanned from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceLanguage {
    #[default]
    Unknown,
    C,
    Cpp,
    ObjC,
    Java,
    CSharp,
    Python,
    Fortran,
    Php,
    Idl,
}

/// Cross-cutting member/class modifier flags.
///
/// Kept as an explicit set of booleans so a modifier can never collide with a
/// kind value; the classification families live in [`Section`](super::section::Section).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specifiers {
    pub inline: bool,
    pub explicit: bool,
    pub mutable: bool,
    pub settable: bool,
    pub gettable: bool,
    pub abstract_: bool,
    pub final_: bool,
    pub sealed: bool,
    pub optional: bool,
    pub required: bool,
    pub assign: bool,
    pub retain: bool,
}

impl Specifiers {
    /// True when no modifier is set.
    pub fn is_empty(&self) -> bool {
        *self == Specifiers::default()
    }
}

/// Opaque handle naming an externally-owned file-identity collaborator.
///
/// The IR only stores and returns the handle; it never dereferences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(pub u32);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}
