use lingo_types::{JargonTerm, Meaning, TermDefinition};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("the term name is empty")]
    EmptyTerm,

    #[error("meaning {0} has an empty definition")]
    EmptyDefinition(usize),
}

/// Term entry under construction by editor commands.
///
/// A draft always holds at least one meaning row; removal of the last row
/// is refused.
#[derive(Debug, Clone)]
pub struct TermDraft {
    pub term: String,
    pub pronunciation: String,
    pub meanings: Vec<Meaning>,
    pub category: String,
}

fn placeholder_meaning() -> Meaning {
    Meaning {
        part_of_speech: "noun".to_string(),
        definition: String::new(),
        example: None,
    }
}

impl TermDraft {
    pub fn new(term: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            pronunciation: String::new(),
            meanings: vec![placeholder_meaning()],
            category: category.into(),
        }
    }

    /// Append a meaning row. The empty placeholder row a fresh draft starts
    /// with is overwritten instead of kept around.
    pub fn push_meaning(&mut self, meaning: Meaning) {
        if self.meanings.len() == 1 && self.meanings[0].definition.is_empty() {
            self.meanings[0] = meaning;
        } else {
            self.meanings.push(meaning);
        }
    }

    /// Replace row `index` (zero-based).
    pub fn update_meaning(&mut self, index: usize, meaning: Meaning) -> bool {
        match self.meanings.get_mut(index) {
            Some(slot) => {
                *slot = meaning;
                true
            }
            None => false,
        }
    }

    /// Refused when it would leave the draft without a meaning row.
    pub fn remove_meaning(&mut self, index: usize) -> bool {
        if self.meanings.len() <= 1 || index >= self.meanings.len() {
            return false;
        }
        self.meanings.remove(index);
        true
    }

    /// Merge an AI-produced definition into the draft: pronunciation is
    /// overwritten, meanings replaced only when the response carries at
    /// least one, and the category adopted only when the document already
    /// knows it.
    pub fn apply_definition(&mut self, definition: &TermDefinition, known_categories: &[String]) {
        self.pronunciation = definition.pronunciation.clone();
        if !definition.meanings.is_empty() {
            self.meanings = definition.meanings.clone();
        }
        if known_categories.iter().any(|c| *c == definition.category) {
            self.category = definition.category.clone();
        }
    }

    /// Submission rule: an empty term name or any meaning with an empty
    /// definition rejects the draft.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.term.trim().is_empty() {
            return Err(DraftError::EmptyTerm);
        }
        for (row, meaning) in self.meanings.iter().enumerate() {
            if meaning.definition.trim().is_empty() {
                return Err(DraftError::EmptyDefinition(row + 1));
            }
        }
        Ok(())
    }

    /// Consume the draft into a finished entry. Manual submission starts
    /// with empty tags and no AI flag.
    pub fn finalize(self, id: String, created_at: i64) -> Result<JargonTerm, DraftError> {
        self.validate()?;

        Ok(JargonTerm {
            id,
            term: self.term.trim().to_string(),
            pronunciation: if self.pronunciation.is_empty() {
                None
            } else {
                Some(self.pronunciation)
            },
            meanings: self.meanings,
            category: self.category,
            tags: vec![],
            created_at,
            is_ai_generated: false,
        })
    }
}
