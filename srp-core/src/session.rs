//! Form session: the field values behind one form instance.

use crate::geography::{GeographyCatalog, StateEntry};
use crate::query::{validate, Field, PartialQuery, Query, ValidationState};
use crate::selector::{CascadingSelector, SelectorState};
use log::{debug, info};

/// Field values of one form, owned by the UI layer.
///
/// Inline errors stay hidden until the first submission attempt and then
/// follow every edit. Submitting never resets the fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSession {
    selector: CascadingSelector,
    year: String,
    month: String,
    submitted: bool,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_region(&mut self, code: &str) {
        if let Some(cleared) = self.selector.select_region(code) {
            info!("region changed to {:?}, state {} cleared", code, cleared);
        }
    }

    pub fn select_state(&mut self, code: &str) {
        self.selector.select_state(code);
    }

    pub fn set_year(&mut self, year: &str) {
        self.year = year.to_string();
    }

    pub fn set_month(&mut self, month: &str) {
        self.month = month.to_string();
    }

    pub fn selector_state(&self) -> SelectorState {
        self.selector.current()
    }

    pub fn state_options<'a>(&self, catalog: &'a GeographyCatalog) -> &'a [StateEntry] {
        self.selector.state_options(catalog)
    }

    pub fn query(&self) -> PartialQuery {
        PartialQuery::new(
            self.selector.region(),
            self.selector.state(),
            &self.year,
            &self.month,
        )
    }

    pub fn validation(&self, catalog: &GeographyCatalog) -> ValidationState {
        validate(&self.query(), catalog)
    }

    /// Error to show next to `field`, if errors are being shown at all.
    pub fn visible_error(&self, field: Field, catalog: &GeographyCatalog) -> Option<&'static str> {
        if self.submitted {
            self.validation(catalog).error(field)
        } else {
            None
        }
    }

    /// Record a submission attempt and return the query if it may be sent.
    pub fn attempt_submit(&mut self, catalog: &GeographyCatalog) -> Option<Query> {
        self.submitted = true;
        match self.query().to_query(catalog) {
            Ok(query) => Some(query),
            Err(validation) => {
                debug!("submission blocked: {:?}", validation.errors());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormSession {
        let mut session = FormSession::new();
        session.select_region("SE");
        session.select_state("SP");
        session.set_year("2026");
        session.set_month("7");
        session
    }

    #[test]
    fn test_errors_hidden_until_submit() {
        let catalog = GeographyCatalog::builtin();
        let mut session = FormSession::new();
        assert_eq!(session.visible_error(Field::Region, catalog), None);
        assert!(session.attempt_submit(catalog).is_none());
        assert!(session.visible_error(Field::Region, catalog).is_some());
        assert!(session.visible_error(Field::Month, catalog).is_some());

        session.select_region("N");
        assert_eq!(session.visible_error(Field::Region, catalog), None);
    }

    #[test]
    fn test_region_change_clears_state() {
        let catalog = GeographyCatalog::builtin();
        let mut session = filled();
        session.select_region("CO");
        assert_eq!(session.query().state, "");
        assert_eq!(session.query().year, "2026");
        assert!(session.validation(catalog).error(Field::State).is_some());
    }

    #[test]
    fn test_submit_keeps_fields() {
        let catalog = GeographyCatalog::builtin();
        let mut session = filled();
        let query = session.attempt_submit(catalog).unwrap();
        assert_eq!(query.state(), "SP");
        assert_eq!(session.query(), PartialQuery::new("SE", "SP", "2026", "7"));
    }

    #[test]
    fn test_new_session_starts_empty() {
        let session = FormSession::new();
        assert_eq!(session.query(), PartialQuery::default());
        assert_eq!(session.selector_state(), SelectorState::Unconstrained);
    }

    #[test]
    fn test_selector_state_follows_region() {
        let mut session = FormSession::new();
        session.select_region("NE");
        assert_eq!(
            session.selector_state(),
            SelectorState::Constrained(crate::geography::Region::NE)
        );
        session.select_region("");
        assert_eq!(session.selector_state(), SelectorState::Unconstrained);
    }
}
