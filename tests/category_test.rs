//! Tests for category label lookup

use rdm_deposit::domain::category::{PLURALS, SINGULARS};
use rdm_deposit::domain::{lookup, CategoryLabels, DEFAULT_CATEGORY};

#[test]
fn given_person_when_getting_labels_then_person_and_persons() {
    let labels = CategoryLabels::new("person");
    assert_eq!(labels.singular(), "person");
    assert_eq!(labels.plural(), "persons");
    assert_eq!(labels.singular_capitalized(), "Person");
}

#[test]
fn given_community_when_getting_labels_then_community_and_communities() {
    let labels = CategoryLabels::new("community");
    assert_eq!(labels.singular(), "community");
    assert_eq!(labels.plural(), "communities");
}

#[test]
fn given_unknown_key_when_getting_labels_then_falls_back_to_community() {
    let labels = CategoryLabels::new("unknown-key");
    assert_eq!(labels.singular(), "community");
    assert_eq!(labels.plural(), "communities");
    assert_eq!(labels.singular_capitalized(), "Community");
    assert_eq!(labels.plural_capitalized(), "Communities");
}

#[test]
fn given_builtin_sets_when_looking_up_directly_then_same_as_labels() {
    for key in ["person", "community", "organization"] {
        let labels = CategoryLabels::new(key);
        assert_eq!(lookup(&SINGULARS, key, DEFAULT_CATEGORY), labels.singular());
        assert_eq!(lookup(&PLURALS, key, DEFAULT_CATEGORY), labels.plural());
    }
}

#[test]
fn given_person_when_capitalizing_plural_then_only_first_letter_changes() {
    let labels = CategoryLabels::new("person");
    assert_eq!(labels.plural_capitalized(), "Persons");
    assert_eq!(labels.plural(), "persons");
}
