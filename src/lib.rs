//! # entry-ir
//!
//! A mutable, hierarchical intermediate representation for declarations
//! discovered while scanning source text.
//!
//! A scanning front end fills a scratch [`Entry`](ir::Entry) with the raw facts
//! of one declaration (kind, name, type text, documentation blocks, argument
//! lists, base references, location) and transfers it into the permanent
//! per-file [`EntryTree`](ir::EntryTree) when a containment boundary is
//! reached. The finished tree is handed, unchanged, to a semantic-model
//! builder. Nothing in this crate resolves symbols, parses grammar, or renders
//! output. It only stores what the front end decided to put in it.
//!
//! ## Testing
//!
//! Structural tests should use the fluent assertion API in the
//! [testing module](ir::testing) rather than hand-rolled pattern matches.

pub mod ir;
