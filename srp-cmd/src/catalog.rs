//! Catalog listing commands.

use log::info;
use srp_core::geography::GeographyCatalog;

/// One line per region: `CODE<TAB>Label (n states)`.
pub fn region_lines(catalog: &GeographyCatalog) -> Vec<String> {
    catalog
        .regions()
        .map(|r| {
            format!(
                "{}\t{} ({} states)",
                r.code(),
                r.label(),
                catalog.states_in(r).len()
            )
        })
        .collect()
}

/// One line per state of `region`: `CODE<TAB>Name`. Unknown regions give no lines.
pub fn state_lines(catalog: &GeographyCatalog, region: &str) -> Vec<String> {
    catalog
        .states_of(region)
        .iter()
        .map(|s| format!("{}\t{}", s.code, s.name))
        .collect()
}

pub fn run_regions() {
    for line in region_lines(GeographyCatalog::builtin()) {
        println!("{}", line);
    }
}

pub fn run_states(region: &str) {
    let lines = state_lines(GeographyCatalog::builtin(), region);
    if lines.is_empty() {
        info!("No states for region {:?}", region);
    }
    for line in lines {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_lines() {
        let lines = region_lines(GeographyCatalog::builtin());
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "N\tNorte (7 states)");
        assert_eq!(lines[4], "S\tSul (3 states)");
    }

    #[test]
    fn test_state_lines() {
        let catalog = GeographyCatalog::builtin();
        assert_eq!(
            state_lines(catalog, "CO"),
            vec![
                "DF\tDistrito Federal",
                "GO\tGoiás",
                "MT\tMato Grosso",
                "MS\tMato Grosso do Sul",
            ]
        );
        assert!(state_lines(catalog, "XX").is_empty());
    }
}
