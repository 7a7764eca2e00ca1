//! Entry node
//!
//! An `Entry` is one raw, not-yet-resolved declaration record: whatever the
//! scanning front end found out about a class, namespace, function, variable,
//! group, or documentation block before any semantic analysis. Fields are
//! public and filled by direct assignment while the entry is an in-progress
//! scratch record; tree linkage (parent, children) is not stored here but in
//! the owning [`EntryTree`](super::tree::EntryTree).
//!
//! Integer location fields use `-1` for "unset", matching what front ends
//! conventionally emit; `start_line`/`start_column` default to `1`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::arguments::{ArgumentList, ArgumentLists};
use super::section::Section;
use super::types::{
    Anchor, BaseInfo, FileId, GroupDocType, GroupPriority, Grouping, MethodType, Protection,
    RelatesType, SourceLanguage, Specifiers, TagInfo, TextBlock, Virtualness,
};

/// One raw declaration record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    // identification
    /// Kind of declaration this entry records.
    pub section: Section,
    /// Declared type text.
    pub type_: String,
    /// Declared name text.
    pub name: String,
    /// Set when the symbol comes from a pre-built external tag index rather
    /// than locally scanned source.
    pub tag_info: Option<TagInfo>,

    // content
    pub protection: Protection,
    pub method_type: MethodType,
    pub virtualness: Virtualness,
    pub specifiers: Specifiers,
    pub is_static: bool,
    /// Explicitly declared as external.
    pub explicit_external: bool,
    pub prototype: bool,
    /// Exported from a module.
    pub exported: bool,
    /// Automatically group the members of this entry.
    pub sub_grouping: bool,
    /// Raw argument string, as written.
    pub args: String,
    pub bitfields: String,
    /// Arguments as a structured list.
    pub arg_list: ArgumentList,
    /// Template-parameter-list layers for nested generic declarations.
    pub template_arg_lists: ArgumentLists,
    /// Raw program text collected for the body.
    pub program: String,
    /// Raw initializer text (for variables and defines).
    pub initializer: String,
    /// Number of initializer lines to surface downstream, -1 for all.
    pub initializer_lines: i32,
    pub include_file: String,
    pub include_name: String,
    /// Documentation block.
    pub doc: TextBlock,
    /// Brief description.
    pub brief: TextBlock,
    /// Documentation found inside the body.
    pub inbody_docs: TextBlock,
    /// Name of a related declaration this entry is documented with.
    pub relates: String,
    pub relates_type: RelatesType,
    /// Name of the class the documentation was found inside of.
    pub inside: String,
    /// Property read accessor.
    pub read: String,
    /// Property write accessor.
    pub write: String,
    /// Throw specification text.
    pub exception: String,
    /// Type constraints (where clauses) for generic declarations.
    pub type_constraints: ArgumentList,
    /// Requires clause text.
    pub requires_clause: String,
    /// Qualifiers attached by explicit command.
    pub qualifiers: Vec<String>,
    /// Base-declaration references.
    pub extends: Vec<BaseInfo>,
    /// Groups this entry belongs to.
    pub groups: Vec<Grouping>,
    /// Cross-reference markers defined inside this entry.
    pub anchors: Vec<Anchor>,
    /// Member group id, -1 when not in a member group.
    pub member_group_id: i32,
    pub group_doc_type: GroupDocType,
    pub language: SourceLanguage,
    /// Hidden from downstream consumers.
    pub hidden: bool,
    /// Artificially introduced, not present in the source.
    pub artificial: bool,
    /// Identifier assigned by the front end, when it has one.
    pub clang_id: String,

    // source location
    /// File this entry was extracted from.
    pub file_name: String,
    pub start_line: i32,
    pub start_column: i32,
    pub body_line: i32,
    pub body_column: i32,
    pub end_body_line: i32,

    file_id: Option<FileId>,
}

impl Entry {
    /// Create a fresh record with every field at its default value.
    pub fn new() -> Self {
        Self {
            section: Section::Empty,
            type_: String::new(),
            name: String::new(),
            tag_info: None,
            protection: Protection::Public,
            method_type: MethodType::Method,
            virtualness: Virtualness::Normal,
            specifiers: Specifiers::default(),
            is_static: false,
            explicit_external: false,
            prototype: false,
            exported: false,
            sub_grouping: true,
            args: String::new(),
            bitfields: String::new(),
            arg_list: ArgumentList::default(),
            template_arg_lists: ArgumentLists::default(),
            program: String::new(),
            initializer: String::new(),
            initializer_lines: -1,
            include_file: String::new(),
            include_name: String::new(),
            doc: TextBlock::default(),
            brief: TextBlock::default(),
            inbody_docs: TextBlock::default(),
            relates: String::new(),
            relates_type: RelatesType::Simple,
            inside: String::new(),
            read: String::new(),
            write: String::new(),
            exception: String::new(),
            type_constraints: ArgumentList::default(),
            requires_clause: String::new(),
            qualifiers: Vec::new(),
            extends: Vec::new(),
            groups: Vec::new(),
            anchors: Vec::new(),
            member_group_id: -1,
            group_doc_type: GroupDocType::Normal,
            language: SourceLanguage::Unknown,
            hidden: false,
            artificial: false,
            clang_id: String::new(),
            file_name: String::new(),
            start_line: 1,
            start_column: 1,
            body_line: -1,
            body_column: -1,
            end_body_line: -1,
            file_id: None,
        }
    }

    /// Restore this record to the state it had at construction time.
    ///
    /// Equivalent to destroy-and-reconstruct, without changing the record's
    /// storage identity: a scratch slot reused across many declarations keeps
    /// a stable address.
    pub fn reset(&mut self) {
        *self = Entry::new();
    }

    /// Flip the kind to the sentinel [`Section::Empty`].
    ///
    /// Signals downstream consumers that this entry's information has already
    /// been consumed and the node should be skipped without removing it from
    /// the tree. Idempotent.
    pub fn mark_as_processed(&mut self) {
        self.section = Section::Empty;
    }

    /// Associate this entry with its originating file-scope collaborator.
    pub fn set_file_id(&mut self, file_id: FileId) {
        self.file_id = Some(file_id);
    }

    /// The originating file-scope collaborator, when one was attached.
    pub fn file_id(&self) -> Option<FileId> {
        self.file_id
    }

    /// The command name that defined this entry's group block.
    pub fn group_doc_cmd(&self) -> &'static str {
        self.group_doc_type.command()
    }

    /// Grouping priority of this entry; only group documentation blocks rank
    /// above [`GroupPriority::Lowest`].
    pub fn grouping_priority(&self) -> GroupPriority {
        if self.section != Section::GroupDoc {
            return GroupPriority::Lowest;
        }
        match self.group_doc_type {
            GroupDocType::Normal => GroupPriority::AutoDef,
            GroupDocType::Add => GroupPriority::AutoAdd,
            GroupDocType::Weak => GroupPriority::AutoWeak,
        }
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "Entry({})", self.section)
        } else {
            write!(f, "Entry({} `{}`)", self.section, self.name)
        }
    }
}
