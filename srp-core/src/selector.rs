//! Region → State cascade.
//!
//! The selector owns the current region signal and the chosen state. State
//! options are always derived from the region, never cached. Choosing a
//! region clears the chosen state unconditionally, even when the previous
//! state is also a member of the new region.

use crate::geography::{GeographyCatalog, Region, StateEntry};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorState {
    /// No region chosen; there are no state options.
    #[default]
    Unconstrained,
    /// State options are the members of this region.
    Constrained(Region),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadingSelector {
    current: SelectorState,
    region: String,
    state: String,
}

/// Pure derivation of the selectable states for a selector state.
pub fn state_options(catalog: &GeographyCatalog, current: SelectorState) -> &[StateEntry] {
    match current {
        SelectorState::Unconstrained => &[],
        SelectorState::Constrained(region) => catalog.states_in(region),
    }
}

impl CascadingSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> SelectorState {
        self.current
    }

    /// Raw region value as last selected.
    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    /// Select a region and clear the chosen state. Unknown or empty codes move
    /// the selector back to [`SelectorState::Unconstrained`].
    ///
    /// Returns the state value that was cleared, if there was one.
    pub fn select_region(&mut self, code: &str) -> Option<String> {
        self.region = code.to_string();
        self.current = match Region::from_code(code) {
            Some(region) => SelectorState::Constrained(region),
            None => SelectorState::Unconstrained,
        };
        let cleared = std::mem::take(&mut self.state);
        debug!("region set to {:?}, cleared state {:?}", code, cleared);
        (!cleared.is_empty()).then_some(cleared)
    }

    /// Record the chosen state. Membership is checked by validation, not here.
    pub fn select_state(&mut self, code: &str) {
        self.state = code.to_string();
    }

    pub fn state_options<'a>(&self, catalog: &'a GeographyCatalog) -> &'a [StateEntry] {
        state_options(catalog, self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unconstrained() {
        let selector = CascadingSelector::new();
        assert_eq!(selector.current(), SelectorState::Unconstrained);
        assert!(selector
            .state_options(GeographyCatalog::builtin())
            .is_empty());
    }

    #[test]
    fn test_region_change_clears_state() {
        let mut selector = CascadingSelector::new();
        selector.select_state("SP");
        let cleared = selector.select_region("CO");
        assert_eq!(cleared.as_deref(), Some("SP"));
        assert_eq!(selector.state(), "");
        assert_eq!(selector.current(), SelectorState::Constrained(Region::CO));
    }

    #[test]
    fn test_region_change_clears_state_still_valid() {
        let mut selector = CascadingSelector::new();
        selector.select_region("SE");
        selector.select_state("SP");
        selector.select_region("SE");
        assert_eq!(selector.state(), "");
    }

    #[test]
    fn test_state_kept_until_region_chosen() {
        let mut selector = CascadingSelector::new();
        selector.select_state("SP");
        assert_eq!(selector.state(), "SP");
        assert!(selector
            .state_options(GeographyCatalog::builtin())
            .is_empty());
    }

    #[test]
    fn test_options_follow_region() {
        let catalog = GeographyCatalog::builtin();
        let mut selector = CascadingSelector::new();
        selector.select_region("S");
        let codes: Vec<&str> = selector
            .state_options(catalog)
            .iter()
            .map(|s| s.code.as_str())
            .collect();
        assert_eq!(codes, vec!["PR", "RS", "SC"]);

        assert_eq!(selector.select_region(""), None);
        assert_eq!(selector.current(), SelectorState::Unconstrained);
        assert!(selector.state_options(catalog).is_empty());
    }
}
