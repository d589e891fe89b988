use shared_types::{Capability, ModelCategory, SortField, SortOrder};

/// Immutable snapshot of what the dashboard table shows
///
/// Every transition returns a new snapshot; the previous one is left as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    tab: ModelCategory,
    search: String,
    capabilities: Vec<Capability>,
    sort_field: SortField,
    sort_order: SortOrder,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            tab: ModelCategory::Chat,
            search: String::new(),
            capabilities: Vec::new(),
            sort_field: SortField::Name,
            sort_order: SortOrder::Asc,
        }
    }
}

impl DashboardState {
    pub fn tab(&self) -> ModelCategory {
        self.tab
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn select_tab(&self, tab: ModelCategory) -> Self {
        Self {
            tab,
            ..self.clone()
        }
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self.clone()
        }
    }

    /// Select the capability if it is not selected yet, deselect it otherwise
    pub fn toggle_capability(&self, capability: Capability) -> Self {
        let mut capabilities = self.capabilities.clone();
        if let Some(pos) = capabilities.iter().position(|c| *c == capability) {
            capabilities.remove(pos);
        } else {
            capabilities.push(capability);
        }
        Self {
            capabilities,
            ..self.clone()
        }
    }

    /// Select the capability, leaving the state unchanged if already selected
    pub fn require_capability(&self, capability: Capability) -> Self {
        if self.capabilities.contains(&capability) {
            self.clone()
        } else {
            self.toggle_capability(capability)
        }
    }

    /// Drop search text and capability filters, keeping tab and sort
    pub fn clear_filters(&self) -> Self {
        Self {
            search: String::new(),
            capabilities: Vec::new(),
            ..self.clone()
        }
    }

    /// Clicking the active column flips direction; a new column sorts ascending
    pub fn toggle_sort(&self, field: SortField) -> Self {
        let sort_order = if self.sort_field == field {
            self.sort_order.flipped()
        } else {
            SortOrder::Asc
        };
        Self {
            sort_field: field,
            sort_order,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, field: SortField, order: SortOrder) -> Self {
        Self {
            sort_field: field,
            sort_order: order,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = DashboardState::default();
        assert_eq!(state.tab(), ModelCategory::Chat);
        assert_eq!(state.search(), "");
        assert!(state.capabilities().is_empty());
        assert_eq!(state.sort_field(), SortField::Name);
        assert_eq!(state.sort_order(), SortOrder::Asc);
    }

    #[test]
    fn test_transitions_leave_previous_snapshot_untouched() {
        let before = DashboardState::default();
        let after = before.select_tab(ModelCategory::Audio).with_search("whisper");

        assert_eq!(before, DashboardState::default());
        assert_eq!(after.tab(), ModelCategory::Audio);
        assert_eq!(after.search(), "whisper");
    }

    #[test]
    fn test_toggle_capability() {
        let state = DashboardState::default()
            .toggle_capability(Capability::Vision)
            .toggle_capability(Capability::Audio);
        assert_eq!(state.capabilities(), &[Capability::Vision, Capability::Audio]);

        let state = state.toggle_capability(Capability::Vision);
        assert_eq!(state.capabilities(), &[Capability::Audio]);

        let state = state.require_capability(Capability::Audio);
        assert_eq!(state.capabilities(), &[Capability::Audio]);
    }

    #[test]
    fn test_toggle_sort() {
        let state = DashboardState::default().toggle_sort(SortField::Name);
        assert_eq!(state.sort_order(), SortOrder::Desc);

        let state = state.toggle_sort(SortField::Uptime);
        assert_eq!(state.sort_field(), SortField::Uptime);
        assert_eq!(state.sort_order(), SortOrder::Asc);
    }

    #[test]
    fn test_clear_filters_keeps_tab_and_sort() {
        let state = DashboardState::default()
            .select_tab(ModelCategory::Images)
            .with_search("flux")
            .toggle_capability(Capability::Vision)
            .with_sort(SortField::Latency, SortOrder::Desc)
            .clear_filters();

        assert_eq!(state.tab(), ModelCategory::Images);
        assert_eq!(state.search(), "");
        assert!(state.capabilities().is_empty());
        assert_eq!(state.sort_field(), SortField::Latency);
        assert_eq!(state.sort_order(), SortOrder::Desc);
    }
}
