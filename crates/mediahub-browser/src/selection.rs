//! The bulk-operation selection set.

use std::collections::HashSet;

use uuid::Uuid;

/// Ephemeral set of file identifiers chosen for a bulk operation.
///
/// Cleared on directory navigation and after a successful bulk action so
/// selections never leak across directories.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: HashSet<Uuid>,
}

impl SelectionSet {
    /// Whether nothing is selected. Bulk controls are disabled while true.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of selected files, shown on the "Delete (N)" control.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether a file is selected.
    pub fn contains(&self, id: Uuid) -> bool {
        self.ids.contains(&id)
    }

    /// Flip one file's selected state.
    pub fn toggle(&mut self, id: Uuid) {
        if !self.ids.insert(id) {
            self.ids.remove(&id);
        }
    }

    /// The select-all toggle: if the selection already equals the full
    /// listing it clears, otherwise it becomes exactly the full listing.
    pub fn toggle_all(&mut self, listing_ids: &[Uuid]) {
        let full: HashSet<Uuid> = listing_ids.iter().copied().collect();
        if self.ids == full {
            self.ids.clear();
        } else {
            self.ids = full;
        }
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Snapshot of the selected identifiers for a bulk request.
    pub fn ids(&self) -> Vec<Uuid> {
        self.ids.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let id = Uuid::new_v4();
        let mut sel = SelectionSet::default();

        sel.toggle(id);
        assert!(sel.contains(id));
        sel.toggle(id);
        assert!(!sel.contains(id));
        assert!(sel.is_empty());
    }

    #[test]
    fn toggle_all_fills_partial_selection() {
        let ids = vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let mut sel = SelectionSet::default();
        sel.toggle(ids[0]);

        sel.toggle_all(&ids);
        assert_eq!(sel.len(), 3);
        assert!(ids.iter().all(|id| sel.contains(*id)));
    }

    #[test]
    fn toggle_all_clears_full_selection() {
        let ids = vec![Uuid::new_v4(), Uuid::new_v4()];
        let mut sel = SelectionSet::default();
        sel.toggle_all(&ids);
        assert_eq!(sel.len(), 2);

        sel.toggle_all(&ids);
        assert!(sel.is_empty());
    }
}
