//! End-to-end scan cycles
//!
//! Exercises the IR the way a scanning front end uses it: fill a scratch
//! node, transfer it at a containment boundary, continue with the refreshed
//! handle, and hand the finished tree to a consumer. Uses the fluent
//! assertion API from `entry_ir::ir::testing`.

use entry_ir::ir::testing::assert_tree;
use entry_ir::ir::{EntryTree, FileId, Section, TagInfo};

#[test]
fn scan_a_class_with_a_member() {
    let mut tree = EntryTree::new();
    let root = tree.root();
    let mut scratch = tree.alloc();

    // the front end fills the scratch node by direct assignment
    {
        let entry = tree.entry_mut(scratch);
        entry.section = Section::Class;
        entry.name = "Widget".to_string();
        entry.file_name = "widget.h".to_string();
        entry.start_line = 12;
        entry.brief.set("A drawable widget.", "widget.h", 10);
    }
    tree.move_to_subentry_and_refresh(root, &mut scratch);
    let widget = tree.children_of(root)[0];

    {
        let entry = tree.entry_mut(scratch);
        entry.section = Section::Function;
        entry.type_ = "void".to_string();
        entry.name = "draw".to_string();
        entry.args = "(const Canvas &canvas)".to_string();
        entry.virtualness = entry_ir::ir::Virtualness::Virtual;
        entry.inside = "Widget".to_string();
        entry.doc.set("Paints the widget onto the canvas.", "widget.h", 20);
    }
    tree.move_to_subentry_and_refresh(widget, &mut scratch);

    assert_tree(&tree)
        .root(|root| {
            root.child_count(1)
                .parent_is_consistent()
                .child(0, |class| {
                    class
                        .section(Section::Class)
                        .name("Widget")
                        .brief_contains("drawable")
                        .child_count(1)
                        .child(0, |member| {
                            member
                                .section(Section::Function)
                                .name("draw")
                                .type_is("void")
                                .doc_contains("onto the canvas");
                        });
                });
        })
        .node(scratch, |handle| {
            // the refreshed scratch handle is a blank default node
            handle.is_blank();
        });
}

#[test]
fn copied_member_keeps_its_pre_mutation_state() {
    let mut tree = EntryTree::new();
    let root = tree.root();
    let mut scratch = tree.alloc();

    {
        let entry = tree.entry_mut(scratch);
        entry.section = Section::Class;
        entry.name = "Widget".to_string();
        entry.brief.set("Original brief.", "widget.h", 3);
    }
    tree.move_to_subentry_and_refresh(root, &mut scratch);
    let widget = tree.children_of(root)[0];

    {
        let entry = tree.entry_mut(scratch);
        entry.section = Section::Function;
        entry.name = "draw".to_string();
    }
    tree.move_to_subentry_and_refresh(widget, &mut scratch);

    {
        let entry = tree.entry_mut(scratch);
        entry.section = Section::GroupDoc;
        entry.name = "Group".to_string();
    }
    tree.move_to_subentry_and_refresh(root, &mut scratch);
    let group = tree.children_of(root)[1];

    // the same declaration documented in two contexts, without aliasing
    tree.copy_to_subentry(group, widget).unwrap();
    tree.entry_mut(widget)
        .brief
        .set("Mutated after the copy.", "widget.h", 3);

    assert_tree(&tree).node(group, |group| {
        group.child_count(1).child(0, |copy| {
            copy.section(Section::Class)
                .name("Widget")
                .brief_contains("Original brief.")
                .child_count(1)
                .child(0, |member| {
                    member.section(Section::Function).name("draw");
                });
        });
    });
}

#[test]
fn scratch_reuse_never_leaks_previous_declaration_state() {
    let mut tree = EntryTree::new();
    let root = tree.root();
    let scratch = tree.alloc();

    {
        let entry = tree.entry_mut(scratch);
        entry.section = Section::Variable;
        entry.type_ = "int".to_string();
        entry.name = "count".to_string();
        entry.initializer = "= 0".to_string();
        entry.doc.set("A counter.", "counter.h", 8);
        entry.qualifiers.push("atomic".to_string());
    }
    // consumer decided against keeping this one; reuse the slot in place
    tree.reset_entry(scratch);

    {
        let entry = tree.entry_mut(scratch);
        entry.section = Section::Typedef;
        entry.name = "size_type".to_string();
    }
    tree.move_to_subentry_and_keep(root, scratch);

    let kept = tree.entry(tree.children_of(root)[0]);
    assert_eq!(kept.section, Section::Typedef);
    assert_eq!(kept.name, "size_type");
    assert!(kept.type_.is_empty());
    assert!(kept.initializer.is_empty());
    assert!(kept.doc.is_empty());
    assert!(kept.qualifiers.is_empty());
}

#[test]
fn external_tag_origin_and_file_association_survive_transfer() {
    let mut tree = EntryTree::new();
    let root = tree.root();
    let mut scratch = tree.alloc();

    {
        let entry = tree.entry_mut(scratch);
        entry.section = Section::Class;
        entry.name = "ExternalWidget".to_string();
        entry.tag_info = Some(TagInfo {
            name: "libwidgets".to_string(),
            file: "widgets.tag".to_string(),
            anchor: "classExternalWidget".to_string(),
        });
        entry.set_file_id(FileId(42));
    }
    tree.move_to_subentry_and_refresh(root, &mut scratch);

    let kept = tree.entry(tree.children_of(root)[0]);
    let tag = kept.tag_info.as_ref().unwrap();
    assert_eq!(tag.name, "libwidgets");
    assert_eq!(tag.anchor, "classExternalWidget");
    assert_eq!(kept.file_id(), Some(FileId(42)));

    // a locally scanned entry has no tag origin, even with empty strings around
    assert!(tree.entry(scratch).tag_info.is_none());
}

#[test]
fn finished_tree_walks_in_source_order() {
    let mut tree = EntryTree::new();
    let root = tree.root();
    let mut scratch = tree.alloc();

    for (section, name) in [
        (Section::Include, "widget.h"),
        (Section::Class, "Widget"),
        (Section::Function, "make_widget"),
    ] {
        let entry = tree.entry_mut(scratch);
        entry.section = section;
        entry.name = name.to_string();
        tree.move_to_subentry_and_refresh(root, &mut scratch);
    }

    let mut seen = Vec::new();
    tree.walk(root, |_, entry| {
        if !entry.name.is_empty() {
            seen.push(entry.name.clone());
        }
    });
    assert_eq!(seen, vec!["widget.h", "Widget", "make_widget"]);
}
