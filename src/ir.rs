//! Main module for the scan-time IR
//!
//! The IR is the hinge between a tokenizing/parsing front end and a
//! semantic-model builder: a tree of partially-filled declaration records,
//! classified by a compact kind tag, built by repeated fill/transfer/reset
//! cycles on scratch nodes.

pub mod arguments;
pub mod entry;
pub mod section;
pub mod snapshot;
pub mod testing;
pub mod tree;
pub mod types;

pub use arguments::{Argument, ArgumentList, ArgumentLists, RefQualifier};
pub use entry::Entry;
pub use section::Section;
pub use snapshot::EntrySnapshot;
pub use tree::{EntryId, EntryTree};
pub use types::{
    Anchor, BaseInfo, FileId, GroupDocType, GroupPriority, Grouping, MethodType, Protection,
    RelatesType, SourceLanguage, Specifiers, TagInfo, TextBlock, Virtualness,
};
