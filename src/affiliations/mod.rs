//! @acp:module "Affiliation Registry"
//! @acp:summary "Assign footnote numbers to affiliation labels in encounter order"
//! @acp:domain cli
//! @acp:layer service

use indexmap::IndexMap;

use crate::config::{fill_template, ModeConfig};

/// @acp:summary "Label -> 1-based index, in first-seen order"
#[derive(Debug, Clone, Default)]
pub struct AffiliationRegistry {
    indices: IndexMap<String, usize>,
}

/// Result of registering one label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    /// 1-based footnote number
    pub index: usize,
    /// True the first time the label is seen
    pub is_new: bool,
}

impl AffiliationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a label, assigning the next index if it has not been seen
    pub fn register(&mut self, label: &str) -> Registration {
        if let Some(&index) = self.indices.get(label) {
            return Registration { index, is_new: false };
        }
        let index = self.indices.len() + 1;
        self.indices.insert(label.to_string(), index);
        tracing::debug!("Affiliation {} assigned index {}", label, index);
        Registration { index, is_new: true }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Build an author's reference string from their affiliation indices.
///
/// `lead` is written before the first reference (the comma separating
/// authors in ADASS mode); later references are joined with the mode's
/// reference separator.
pub fn reference_string(cfg: &ModeConfig, indices: &[usize], lead: &str) -> String {
    let mut refs = String::new();
    for (i, index) in indices.iter().enumerate() {
        let index = index.to_string();
        refs.push_str(if i == 0 { lead } else { cfg.reference_sep });
        refs.push_str(&fill_template(cfg.reference_template, &[("index", index.as_str())]));
    }
    refs
}
