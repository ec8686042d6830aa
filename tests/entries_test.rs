//! Tests for deposit list entries and their field paths

use serde::Serialize;

use rdm_deposit::domain::{
    EntryKind, EntryList, Node, ProjectEntry, PublicationEntry, DomainError,
};

#[derive(Serialize)]
struct DepositForm {
    publications: EntryList<PublicationEntry>,
    projects: EntryList<ProjectEntry>,
}

fn leaf_paths(node: &Node) -> Vec<String> {
    let mut paths = Vec::new();
    node.visit_with_path(".", |path, _| paths.push(path.to_string()));
    paths
}

#[test]
fn given_form_when_serialized_then_leaf_paths_match_field_paths() {
    // Arrange
    let mut publications = EntryList::<PublicationEntry>::new();
    publications.push(PublicationEntry {
        title: "Sediment transport".into(),
        doi: "10.1234/abcd".into(),
        keywords: "ocean, sediment".into(),
        summary: "Long summary".into(),
    });
    publications.push_default();
    let mut projects = EntryList::<ProjectEntry>::new();
    projects.push_default();
    let form = DepositForm {
        publications,
        projects,
    };

    // Act
    let json = serde_json::to_string(&form).unwrap();
    let node: Node = serde_json::from_str(&json).unwrap();

    // Assert
    let mut expected = form.publications.field_paths("publications");
    expected.extend(form.projects.field_paths("projects"));
    assert_eq!(leaf_paths(&node), expected);
}

#[test]
fn given_list_when_removing_each_index_then_remaining_order_preserved() {
    let mut list = EntryList::<ProjectEntry>::new();
    for title in ["first", "second", "third"] {
        list.push(ProjectEntry {
            title: title.into(),
            ..Default::default()
        });
    }

    assert_eq!(list.remove(0).unwrap().title, "first");
    assert_eq!(list.remove(1).unwrap().title, "third");
    assert_eq!(
        list.iter().map(|e| e.title.as_str()).collect::<Vec<_>>(),
        vec!["second"]
    );
    assert_eq!(list.remove(1), Err(DomainError::IndexOutOfRange { index: 1, len: 1 }));
}

#[test]
fn given_empty_list_when_removing_then_errors() {
    let mut list = EntryList::<PublicationEntry>::new();
    assert!(list.is_empty());
    assert!(list.remove(0).is_err());
}

#[test]
fn given_kinds_then_add_button_labels_name_the_group() {
    assert_eq!(
        EntryKind::Publication.add_button_label(),
        "Add Relevant Publications"
    );
    assert_eq!(
        EntryKind::Project.add_button_label(),
        "Most Significant Projects"
    );
    for kind in EntryKind::ALL {
        assert_eq!(kind.to_string().parse::<EntryKind>().unwrap(), kind);
        assert!(kind.fields().iter().any(|f| f.multiline));
    }
}
