//! Selection coordination for bulk actions

use std::collections::HashSet;

use core_kernel::IncidentId;

/// Tracks which incidents are selected in the currently visible list
///
/// The selection is scoped to one queue view at a time: installing a new
/// view clears it, and it never contains an identifier that is not
/// visible. Callers must treat the returned set as unordered.
#[derive(Debug, Clone, Default)]
pub struct SelectionCoordinator {
    visible: HashSet<IncidentId>,
    selected: HashSet<IncidentId>,
}

impl SelectionCoordinator {
    /// Creates an empty coordinator with no visible rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the rows of a new queue or filter view, clearing any
    /// existing selection
    pub fn refresh_view<I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = IncidentId>,
    {
        self.visible = visible.into_iter().collect();
        self.selected.clear();
    }

    /// Installs the visible rows and selects all of them
    pub fn select_all<I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = IncidentId>,
    {
        self.visible = visible.into_iter().collect();
        self.selected = self.visible.clone();
    }

    /// Toggles a single row
    ///
    /// Identifiers not in the current view are ignored; there is no
    /// checkbox for an invisible row.
    pub fn select_one(&mut self, id: IncidentId, included: bool) {
        if !self.visible.contains(&id) {
            return;
        }
        if included {
            self.selected.insert(id);
        } else {
            self.selected.remove(&id);
        }
    }

    /// Empties the selection without changing the view
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// The unordered working set for bulk operations
    pub fn selected(&self) -> &HashSet<IncidentId> {
        &self.selected
    }

    /// True when `id` is currently selected
    pub fn is_selected(&self, id: IncidentId) -> bool {
        self.selected.contains(&id)
    }

    /// Number of selected incidents
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// True when nothing is selected
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
