// Rust guideline compliant 2026-10-18

//! Active dashboard tab.

use buildboard_core::Tab;

/// Which dashboard tab is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabState {
    active: Tab,
}

impl TabState {
    /// Creates the state with `initial` selected.
    #[must_use]
    pub fn new(initial: Tab) -> Self {
        Self { active: initial }
    }

    /// Returns the selected tab.
    #[must_use]
    pub fn active(&self) -> Tab {
        self.active
    }

    /// Selects a tab.
    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }

    /// Returns true if `tab` is selected.
    #[must_use]
    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_builds() {
        let mut tabs = TabState::default();
        assert!(tabs.is_active(Tab::Builds));
        tabs.select(Tab::Resources);
        assert_eq!(tabs.active(), Tab::Resources);
    }
}
