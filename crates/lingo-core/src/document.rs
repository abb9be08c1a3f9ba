use lingo_types::{DictionaryData, GENERAL_CATEGORY, JargonTerm};

/// Owned dictionary state. Single writer: the event loop holds the only
/// instance and all mutation goes through these methods.
pub struct Document {
    data: DictionaryData,
}

impl Document {
    /// Wraps loaded data, restoring the "General" fallback category when a
    /// file lacks it.
    pub fn new(mut data: DictionaryData) -> Self {
        if !data.categories.iter().any(|c| c == GENERAL_CATEGORY) {
            data.categories.insert(0, GENERAL_CATEGORY.to_string());
        }
        Self { data }
    }

    pub fn data(&self) -> &DictionaryData {
        &self.data
    }

    pub fn terms(&self) -> &[JargonTerm] {
        &self.data.terms
    }

    pub fn categories(&self) -> &[String] {
        &self.data.categories
    }

    /// Initial category for a fresh draft.
    pub fn default_category(&self) -> String {
        self.data
            .categories
            .first()
            .cloned()
            .unwrap_or_else(|| GENERAL_CATEGORY.to_string())
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.data.categories.iter().any(|c| c == name)
    }

    /// New entries go to the front; display order re-sorts by timestamp.
    pub fn add_term(&mut self, term: JargonTerm) {
        self.data.terms.insert(0, term);
    }

    pub fn remove_term(&mut self, id: &str) -> bool {
        let before = self.data.terms.len();
        self.data.terms.retain(|t| t.id != id);
        self.data.terms.len() != before
    }

    /// Rejects empty and duplicate names.
    pub fn add_category(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.has_category(name) {
            return false;
        }
        self.data.categories.push(name.to_string());
        true
    }

    /// "General" cannot be removed. Terms referencing the removed category
    /// are reassigned to "General".
    pub fn remove_category(&mut self, name: &str) -> bool {
        if name == GENERAL_CATEGORY || !self.has_category(name) {
            return false;
        }
        self.data.categories.retain(|c| c != name);
        for term in &mut self.data.terms {
            if term.category == name {
                term.category = GENERAL_CATEGORY.to_string();
            }
        }
        true
    }

    /// Wholesale replacement, used by file import.
    pub fn replace(&mut self, data: DictionaryData) {
        *self = Document::new(data);
    }
}
