use anyhow::{bail, Context};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::LazyLock;

/// Embedded CSV data for every Brazilian state and the region it belongs to.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/states.csv");

static BUILTIN: LazyLock<GeographyCatalog> = LazyLock::new(|| {
    if let Ok(catalog) = GeographyCatalog::parse_csv(CSV_OBJECT) {
        catalog
    } else {
        panic!("failed to parse states csv")
    }
});

/// One of the five top-level geographic groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    N,
    NE,
    CO,
    SE,
    S,
}

impl Region {
    pub const ALL: [Region; 5] = [Region::N, Region::NE, Region::CO, Region::SE, Region::S];

    /// Look up a region by its code. Surrounding whitespace is ignored.
    pub fn from_code(code: &str) -> Option<Region> {
        match code.trim() {
            "N" => Some(Region::N),
            "NE" => Some(Region::NE),
            "CO" => Some(Region::CO),
            "SE" => Some(Region::SE),
            "S" => Some(Region::S),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Region::N => "N",
            Region::NE => "NE",
            Region::CO => "CO",
            Region::SE => "SE",
            Region::S => "S",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::N => "Norte",
            Region::NE => "Nordeste",
            Region::CO => "Centro-Oeste",
            Region::SE => "Sudeste",
            Region::S => "Sul",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A second-level geographic unit.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct StateEntry {
    pub name: String,
    pub code: String,
}

#[derive(Deserialize)]
struct CatalogRow {
    region: String,
    code: String,
    name: String,
}

/// Static mapping from region to its member states.
///
/// Every state code appears under exactly one region; [`GeographyCatalog::parse_csv`]
/// refuses data that breaks this. States keep the order they were listed in.
#[derive(Debug, Clone, PartialEq)]
pub struct GeographyCatalog {
    states: BTreeMap<Region, Vec<StateEntry>>,
    membership: HashMap<String, Region>,
}

impl GeographyCatalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> &'static GeographyCatalog {
        &BUILTIN
    }

    /// Parse a CSV string of `region,code,name` rows into a catalog.
    pub fn parse_csv(csv_object: &str) -> anyhow::Result<GeographyCatalog> {
        let mut states: BTreeMap<Region, Vec<StateEntry>> = BTreeMap::new();
        let mut membership: HashMap<String, Region> = HashMap::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_object.as_bytes());
        for (line, row) in rdr.deserialize::<CatalogRow>().enumerate() {
            let row = row.with_context(|| format!("malformed catalog row {}", line + 1))?;
            let Some(region) = Region::from_code(&row.region) else {
                bail!("unknown region code {:?} on row {}", row.region, line + 1);
            };
            if row.code.is_empty() {
                bail!("empty state code on row {}", line + 1);
            }
            if let Some(existing) = membership.insert(row.code.clone(), region) {
                bail!(
                    "state {} listed under both {} and {}",
                    row.code,
                    existing,
                    region
                );
            }
            states.entry(region).or_default().push(StateEntry {
                name: row.name,
                code: row.code,
            });
        }
        Ok(GeographyCatalog { states, membership })
    }

    /// Regions in their fixed order.
    pub fn regions(&self) -> impl Iterator<Item = Region> + '_ {
        Region::ALL.into_iter()
    }

    /// States belonging to `region`. Unknown or empty codes give an empty slice.
    pub fn states_of(&self, region: &str) -> &[StateEntry] {
        Region::from_code(region)
            .and_then(|r| self.states.get(&r))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn states_in(&self, region: Region) -> &[StateEntry] {
        self.states.get(&region).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn region_of_state(&self, state: &str) -> Option<Region> {
        self.membership.get(state.trim()).copied()
    }

    pub fn contains_region(&self, region: &str) -> bool {
        Region::from_code(region).is_some_and(|r| self.states.contains_key(&r))
    }

    pub fn contains_state(&self, state: &str) -> bool {
        self.membership.contains_key(state.trim())
    }

    pub fn state_name(&self, state: &str) -> Option<&str> {
        let region = self.region_of_state(state)?;
        self.states_in(region)
            .iter()
            .find(|s| s.code == state.trim())
            .map(|s| s.name.as_str())
    }
}
