use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Fallback category, always present and never deletable.
pub const GENERAL_CATEGORY: &str = "General";

/// Wildcard for the category filter: show every term.
pub const CATEGORY_WILDCARD: &str = "All";

/// One sense of a term, keyed by part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// A dictionary entry. Field names serialize camelCase so the on-disk
/// file stays compatible with the community `words.json` format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JargonTerm {
    /// Opaque, caller-assigned. Uniqueness is not verified.
    pub id: String,
    pub term: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    pub meanings: Vec<Meaning>,
    /// Must name an entry of `DictionaryData::categories`.
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Epoch milliseconds. Display order sorts on this, newest first.
    pub created_at: i64,
    #[serde(default)]
    pub is_ai_generated: bool,
}

/// The whole document. Both fields are mandatory on deserialize; a file
/// missing either one is rejected as a dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryData {
    pub terms: Vec<JargonTerm>,
    pub categories: Vec<String>,
}

impl Default for DictionaryData {
    fn default() -> Self {
        Self {
            terms: vec![],
            categories: vec![GENERAL_CATEGORY.to_string()],
        }
    }
}

/// Partial term record produced by the definition service. The caller
/// decides what to merge; `category` in particular is free text and only
/// adopted when it matches a known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermDefinition {
    pub term: String,
    pub pronunciation: String,
    pub meanings: Vec<Meaning>,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: i64,
    pub is_ai_generated: bool,
}

/// Render-ready projection of a term for the terminal view.
#[derive(Debug, Clone)]
pub struct DisplayEntry {
    pub id: String,
    pub term: String,
    pub pronunciation: Option<String>,
    pub category: String,
    pub meanings: Vec<Meaning>,
    pub ai_generated: bool,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    Search(String),
    SetCategory(String),
    ListTerms,
    StartDraft(String),
    SetPronunciation(String),
    AddMeaning(Meaning),
    UpdateMeaning(usize, Meaning),
    RemoveMeaning(usize),
    SetDraftCategory(String),
    ShowDraft,
    RequestDefinition,
    SaveDraft,
    DiscardDraft,
    DeleteTerm(String),
    AddCategory(String),
    DeleteCategory(String),
    ImportFile(PathBuf),
    ExportFile(Option<PathBuf>),
    ShowEntries {
        entries: Vec<DisplayEntry>,
        total: usize,
    },
    Notice(String),
    ShowHelp,
    Quit,
}
