//! Section classification
//!
//! Every [`Entry`](super::entry::Entry) carries exactly one `Section` value
//! naming the kind of declaration it records. The kinds fall into a few
//! mutually exclusive families (compound scopes, compound documentation
//! blocks, file roles) plus a flat range of single-purpose kinds; the mask
//! predicates answer family-membership questions without enumerating every
//! kind at the call site.
//!
//! Exclusivity is enforced by the type: a node holds one variant, never a
//! partially-set family. Adding a kind means adding one variant and updating
//! the predicate arms it belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of declaration an entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    // compound scopes
    Class,
    Namespace,
    Concept,

    // compound documentation blocks
    ClassDoc,
    StructDoc,
    UnionDoc,
    ExceptionDoc,
    NamespaceDoc,
    InterfaceDoc,
    ProtocolDoc,
    CategoryDoc,
    ServiceDoc,
    SingletonDoc,
    ConceptDoc,

    // file roles
    Source,
    Header,

    // single-purpose kinds
    Enum,
    EnumDoc,
    /// Sentinel kind: the entry's information has been consumed and the node
    /// should be skipped by downstream consumers.
    Empty,
    PageDoc,
    Variable,
    VariableDoc,
    Function,
    Typedef,
    MemberDoc,
    OverloadDoc,
    Example,
    ExampleLineno,
    FileDoc,
    Define,
    DefineDoc,
    Include,
    GroupDoc,
    UsingDir,
    UsingDecl,
    MainPageDoc,
    MemberGroup,
    Package,
    PackageDoc,
    ObjcImpl,
    DirDoc,
    ExportedInterface,
    IncludedService,
    ModuleDoc,
}

impl Section {
    /// Is this a compound kind (a class-like scope that owns members)?
    pub fn is_compound(self) -> bool {
        matches!(self, Section::Class)
    }

    /// Is this a scope kind (compound or namespace-like)?
    pub fn is_scope(self) -> bool {
        matches!(self, Section::Class | Section::Namespace)
    }

    /// Is this a compound documentation kind (a doc block documenting a
    /// class-like compound rather than declaring one)?
    pub fn is_compound_doc(self) -> bool {
        matches!(
            self,
            Section::ClassDoc
                | Section::StructDoc
                | Section::UnionDoc
                | Section::InterfaceDoc
                | Section::ExceptionDoc
                | Section::ProtocolDoc
                | Section::CategoryDoc
                | Section::ServiceDoc
                | Section::SingletonDoc
        )
    }

    /// Is this a file-role kind (a source or header file scope)?
    pub fn is_file(self) -> bool {
        matches!(self, Section::Source | Section::Header)
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::Empty
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
