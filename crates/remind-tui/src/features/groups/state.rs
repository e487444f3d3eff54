use remind_core::models::{Group, GroupId};

#[derive(Debug, Clone, Default)]
pub struct GroupsState {
    /// Server order; new groups are appended.
    pub groups: Vec<Group>,
    pub loading: bool,
    pub selected: usize,
    /// Delete request in flight.
    pub deleting: Option<GroupId>,
}

impl GroupsState {
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn selected_group(&self) -> Option<&Group> {
        self.groups.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.groups.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.groups.len().saturating_sub(1));
    }
}
