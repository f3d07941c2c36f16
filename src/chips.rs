//! Program Chips
//!
//! Selected programs shown as removable chips in the organization form.

use std::collections::BTreeSet;

use crate::models::ProgramOption;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramChip {
    /// View identity, unique within one [`ChipSet`]
    pub key: u32,
    pub label: String,
    /// Program id when picked from the checklist, `None` when typed in
    pub id: Option<String>,
}

impl ProgramChip {
    /// Value sent as `allowed_programs`
    pub fn form_value(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChipSet {
    chips: Vec<ProgramChip>,
    next_key: u32,
}

impl ChipSet {
    pub fn from_options(options: impl IntoIterator<Item = ProgramOption>) -> Self {
        let mut set = Self::default();
        set.replace_with(options);
        set
    }

    pub fn chips(&self) -> &[ProgramChip] {
        &self.chips
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    fn push(&mut self, label: String, id: Option<String>) {
        self.next_key += 1;
        self.chips.push(ProgramChip { key: self.next_key, label, id });
    }

    /// Append a free-typed program. Blank or already-present labels are ignored.
    pub fn add_typed(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() || self.chips.iter().any(|c| c.label.eq_ignore_ascii_case(label)) {
            return false;
        }
        self.push(label.to_string(), None);
        true
    }

    /// Drop every chip and add one per option, in order
    pub fn replace_with(&mut self, options: impl IntoIterator<Item = ProgramOption>) {
        self.chips.clear();
        for option in options {
            self.push(option.label, Some(option.id));
        }
    }

    pub fn remove(&mut self, key: u32) -> bool {
        let before = self.chips.len();
        self.chips.retain(|c| c.key != key);
        self.chips.len() != before
    }

    /// Ids of checklist-backed chips, used to pre-check the programs modal
    pub fn selected_ids(&self) -> BTreeSet<String> {
        self.chips.iter().filter_map(|c| c.id.clone()).collect()
    }

    pub fn form_values(&self) -> Vec<String> {
        self.chips.iter().map(|c| c.form_value().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: &str, label: &str) -> ProgramOption {
        ProgramOption { id: id.into(), label: label.into() }
    }

    #[test]
    fn typed_chips_have_no_id() {
        let mut set = ChipSet::default();
        assert!(set.add_typed("  BS Psychology "));
        assert_eq!(set.chips()[0].label, "BS Psychology");
        assert_eq!(set.chips()[0].id, None);
        assert_eq!(set.form_values(), vec!["BS Psychology"]);
    }

    #[test]
    fn blank_and_duplicate_typed_chips_are_ignored() {
        let mut set = ChipSet::default();
        assert!(!set.add_typed("   "));
        assert!(set.add_typed("BSIT"));
        assert!(!set.add_typed("bsit"));
        assert_eq!(set.chips().len(), 1);
    }

    #[test]
    fn saving_selection_replaces_all_chips() {
        let mut set = ChipSet::default();
        set.add_typed("Typed");
        set.replace_with([option("1", "BSCS"), option("3", "BSIT")]);
        assert_eq!(set.form_values(), vec!["1", "3"]);
        assert_eq!(set.selected_ids(), BTreeSet::from(["1".to_string(), "3".to_string()]));

        set.replace_with(Vec::<ProgramOption>::new());
        assert!(set.is_empty());
    }

    #[test]
    fn form_values_mix_ids_and_labels() {
        let mut set = ChipSet::from_options([option("7", "BSN")]);
        set.add_typed("Exchange");
        assert_eq!(set.form_values(), vec!["7", "Exchange"]);
        assert_eq!(set.selected_ids().len(), 1);
    }

    #[test]
    fn remove_only_touches_one_chip() {
        let mut set = ChipSet::from_options([option("1", "A"), option("2", "B")]);
        let key = set.chips()[0].key;
        assert!(set.remove(key));
        assert!(!set.remove(key));
        assert_eq!(set.form_values(), vec!["2"]);
    }

    #[test]
    fn keys_stay_unique_across_replacements() {
        let mut set = ChipSet::from_options([option("1", "A")]);
        let old = set.chips()[0].key;
        set.replace_with([option("1", "A")]);
        assert_ne!(set.chips()[0].key, old);
    }
}
