use lingo_core::draft::{DraftError, TermDraft};
use lingo_types::{Meaning, TermDefinition};

fn meaning(pos: &str, definition: &str) -> Meaning {
    Meaning {
        part_of_speech: pos.to_string(),
        definition: definition.to_string(),
        example: None,
    }
}

#[test]
fn fresh_draft_starts_with_one_placeholder_row() {
    let draft = TermDraft::new("grok", "General");
    assert_eq!(draft.meanings.len(), 1);
    assert!(draft.meanings[0].definition.is_empty());
}

#[test]
fn first_pushed_meaning_replaces_the_placeholder() {
    let mut draft = TermDraft::new("grok", "General");
    draft.push_meaning(meaning("verb", "to understand deeply"));
    draft.push_meaning(meaning("noun", "deep understanding"));

    assert_eq!(draft.meanings.len(), 2);
    assert_eq!(draft.meanings[0].definition, "to understand deeply");
}

#[test]
fn the_last_meaning_row_cannot_be_removed() {
    let mut draft = TermDraft::new("grok", "General");
    draft.push_meaning(meaning("verb", "to understand deeply"));

    assert!(!draft.remove_meaning(0));
    assert_eq!(draft.meanings.len(), 1);

    draft.push_meaning(meaning("noun", "deep understanding"));
    assert!(draft.remove_meaning(1));
    assert!(!draft.remove_meaning(0));
}

#[test]
fn update_meaning_replaces_in_place_and_rejects_bad_index() {
    let mut draft = TermDraft::new("grok", "General");
    draft.push_meaning(meaning("verb", "first cut"));

    assert!(draft.update_meaning(0, meaning("verb", "better wording")));
    assert_eq!(draft.meanings[0].definition, "better wording");
    assert!(!draft.update_meaning(5, meaning("noun", "nope")));
}

#[test]
fn empty_term_name_rejects_submission() {
    let mut draft = TermDraft::new("  ", "General");
    draft.push_meaning(meaning("noun", "something"));

    assert_eq!(draft.validate(), Err(DraftError::EmptyTerm));
    assert!(draft.finalize("id".to_string(), 1).is_err());
}

#[test]
fn any_empty_definition_rejects_submission() {
    let mut draft = TermDraft::new("grok", "General");
    draft.push_meaning(meaning("verb", "to understand deeply"));
    draft.push_meaning(meaning("noun", ""));

    assert_eq!(draft.validate(), Err(DraftError::EmptyDefinition(2)));
}

#[test]
fn finalize_produces_a_manual_entry() {
    let mut draft = TermDraft::new(" grok ", "Engineering");
    draft.pronunciation = "/ɡrɒk/".to_string();
    draft.push_meaning(meaning("verb", "to understand deeply"));

    let term = draft.finalize("abc".to_string(), 42).unwrap();
    assert_eq!(term.id, "abc");
    assert_eq!(term.term, "grok");
    assert_eq!(term.pronunciation.as_deref(), Some("/ɡrɒk/"));
    assert_eq!(term.category, "Engineering");
    assert_eq!(term.created_at, 42);
    assert!(term.tags.is_empty());
    assert!(!term.is_ai_generated);
}

#[test]
fn apply_definition_merges_only_known_categories() {
    let known = vec!["General".to_string(), "Engineering".to_string()];
    let definition = TermDefinition {
        term: "grok".to_string(),
        pronunciation: "/ɡrɒk/".to_string(),
        meanings: vec![meaning("verb", "to understand deeply")],
        category: "Martian".to_string(),
        tags: vec![],
        created_at: 1,
        is_ai_generated: true,
    };

    let mut draft = TermDraft::new("grok", "General");
    draft.apply_definition(&definition, &known);

    assert_eq!(draft.pronunciation, "/ɡrɒk/");
    assert_eq!(draft.meanings.len(), 1);
    assert_eq!(draft.meanings[0].definition, "to understand deeply");
    // unknown category keeps the previous draft value
    assert_eq!(draft.category, "General");
}

#[test]
fn apply_definition_adopts_a_known_category_and_keeps_meanings_when_empty() {
    let known = vec!["General".to_string(), "Engineering".to_string()];
    let definition = TermDefinition {
        term: "grok".to_string(),
        pronunciation: String::new(),
        meanings: vec![],
        category: "Engineering".to_string(),
        tags: vec![],
        created_at: 1,
        is_ai_generated: true,
    };

    let mut draft = TermDraft::new("grok", "General");
    draft.push_meaning(meaning("verb", "hand-written"));
    draft.apply_definition(&definition, &known);

    assert_eq!(draft.category, "Engineering");
    // an empty meanings payload leaves the rows alone
    assert_eq!(draft.meanings[0].definition, "hand-written");
}
