//! Query model and the validation rules that gate submission.

use crate::geography::{GeographyCatalog, Region};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Region,
    State,
    Year,
    Month,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Region, Field::State, Field::Year, Field::Month];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Region => "Region",
            Field::State => "State",
            Field::Year => "Year",
            Field::Month => "Month",
        }
    }

    /// Fixed message shown next to the field while it is invalid.
    pub fn error_message(&self) -> &'static str {
        match self {
            Field::Region => "Select a valid region",
            Field::State => "Select a valid state",
            Field::Year => "Enter a valid year",
            Field::Month => "Enter a month between 1 and 12",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw field values as they come out of form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialQuery {
    pub region: String,
    pub state: String,
    pub year: String,
    pub month: String,
}

/// A complete query. Only obtainable through [`PartialQuery::to_query`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    region: Region,
    state: String,
    year: i64,
    month: u32,
}

impl Query {
    pub fn region(&self) -> Region {
        self.region
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} {}-{:02}",
            self.region, self.state, self.year, self.month
        )
    }
}

/// Per-field errors derived from a [`PartialQuery`]. Never stored; recompute
/// with [`validate`] whenever the query changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationState {
    region: Option<&'static str>,
    state: Option<&'static str>,
    year: Option<&'static str>,
    month: Option<&'static str>,
}

impl ValidationState {
    pub fn error(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Region => self.region,
            Field::State => self.state,
            Field::Year => self.year,
            Field::Month => self.month,
        }
    }

    /// All present errors in field order.
    pub fn errors(&self) -> Vec<(Field, &'static str)> {
        Field::ALL
            .into_iter()
            .filter_map(|f| self.error(f).map(|msg| (f, msg)))
            .collect()
    }

    /// Submission is allowed only when every field is valid.
    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    fn flag(valid: bool, field: Field) -> Option<&'static str> {
        (!valid).then(|| field.error_message())
    }
}

fn parse_year(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|y| *y > 0)
}

fn parse_month(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|m| (1..=12).contains(m))
}

fn region_is_valid(query: &PartialQuery, catalog: &GeographyCatalog) -> bool {
    !query.region.trim().is_empty() && catalog.contains_region(&query.region)
}

// A state is checked against the selected region only once that region is
// itself valid; otherwise the region error alone is reported.
fn state_is_valid(query: &PartialQuery, catalog: &GeographyCatalog) -> bool {
    let state = query.state.trim();
    if state.is_empty() || !catalog.contains_state(state) {
        return false;
    }
    if region_is_valid(query, catalog) {
        catalog
            .states_of(&query.region)
            .iter()
            .any(|entry| entry.code == state)
    } else {
        true
    }
}

/// Evaluate every field rule. All four are always computed so that all
/// errors can be displayed together.
pub fn validate(query: &PartialQuery, catalog: &GeographyCatalog) -> ValidationState {
    ValidationState {
        region: ValidationState::flag(region_is_valid(query, catalog), Field::Region),
        state: ValidationState::flag(state_is_valid(query, catalog), Field::State),
        year: ValidationState::flag(parse_year(&query.year).is_some(), Field::Year),
        month: ValidationState::flag(parse_month(&query.month).is_some(), Field::Month),
    }
}

impl PartialQuery {
    pub fn new(region: &str, state: &str, year: &str, month: &str) -> Self {
        Self {
            region: region.to_string(),
            state: state.to_string(),
            year: year.to_string(),
            month: month.to_string(),
        }
    }

    /// Coerce into a [`Query`], or return every validation error.
    pub fn to_query(&self, catalog: &GeographyCatalog) -> Result<Query, ValidationState> {
        let validation = validate(self, catalog);
        let parsed = (
            Region::from_code(&self.region),
            parse_year(&self.year),
            parse_month(&self.month),
        );
        match parsed {
            (Some(region), Some(year), Some(month)) if validation.is_valid() => Ok(Query {
                region,
                state: self.state.trim().to_string(),
                year,
                month,
            }),
            _ => Err(validation),
        }
    }
}

/// Years offered by the select variant of the form: a fixed span back from
/// `current_year` plus a few future years, newest first.
pub fn year_options(current_year: i32) -> Vec<i32> {
    const PAST_YEARS: i32 = 20;
    const FUTURE_YEARS: i32 = 5;
    ((current_year - PAST_YEARS).max(1)..=current_year + FUTURE_YEARS)
        .rev()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static GeographyCatalog {
        GeographyCatalog::builtin()
    }

    #[test]
    fn test_empty_region_only_flags_region() {
        let query = PartialQuery::new("", "SP", "2025", "5");
        let validation = validate(&query, catalog());
        assert_eq!(
            validation.errors(),
            vec![(Field::Region, "Select a valid region")]
        );
    }

    #[test]
    fn test_month_out_of_range() {
        let query = PartialQuery::new("SE", "SP", "2025", "13");
        let validation = validate(&query, catalog());
        let errors = validation.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, Field::Month);
        assert!(!validation.is_valid());
    }

    #[test]
    fn test_state_outside_region() {
        let query = PartialQuery::new("CO", "SP", "2025", "5");
        let validation = validate(&query, catalog());
        assert!(validation.error(Field::State).is_some());
        assert!(validation.error(Field::Region).is_none());
    }

    #[test]
    fn test_unknown_state_with_empty_region() {
        let query = PartialQuery::new("", "ZZ", "2025", "5");
        let validation = validate(&query, catalog());
        assert!(validation.error(Field::Region).is_some());
        assert!(validation.error(Field::State).is_some());
    }

    #[test]
    fn test_all_fields_empty() {
        let validation = validate(&PartialQuery::default(), catalog());
        assert_eq!(validation.errors().len(), 4);
    }

    #[test]
    fn test_year_rules() {
        for (year, ok) in [("2025", true), ("3000", true), ("3000000000", true), (" 1 ", true), ("0", false), ("-4", false), ("20x5", false), ("", false)] {
            let query = PartialQuery::new("SE", "SP", year, "5");
            assert_eq!(validate(&query, catalog()).is_valid(), ok, "year {:?}", year);
        }
    }

    #[test]
    fn test_month_bounds() {
        for (month, ok) in [("1", true), ("12", true), ("0", false), ("13", false), ("5.5", false)] {
            let query = PartialQuery::new("SE", "SP", "2025", month);
            assert_eq!(validate(&query, catalog()).is_valid(), ok, "month {:?}", month);
        }
    }

    #[test]
    fn test_to_query_coerces_numbers() {
        let query = PartialQuery::new("SE", "SP", "2026", "07")
            .to_query(catalog())
            .unwrap();
        assert_eq!(query.region(), Region::SE);
        assert_eq!(query.state(), "SP");
        assert_eq!(query.year(), 2026);
        assert_eq!(query.month(), 7);
        assert_eq!(query.to_string(), "SE/SP 2026-07");
    }

    #[test]
    fn test_to_query_keeps_large_year() {
        let query = PartialQuery::new("N", "PA", "3000000000", "1")
            .to_query(catalog())
            .unwrap();
        assert_eq!(query.year(), 3_000_000_000);
    }

    #[test]
    fn test_to_query_returns_all_errors() {
        let err = PartialQuery::new("S", "SP", "", "13")
            .to_query(catalog())
            .unwrap_err();
        let fields: Vec<Field> = err.errors().into_iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::State, Field::Year, Field::Month]);
    }

    #[test]
    fn test_year_options() {
        let years = year_options(2026);
        assert_eq!(years.first(), Some(&2031));
        assert_eq!(years.last(), Some(&2006));
        assert!(year_options(3).iter().all(|y| *y > 0));
    }
}
