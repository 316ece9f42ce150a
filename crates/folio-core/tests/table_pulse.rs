//! Integration tests exercising the location table together with the
//! pulse-filter matching, mirroring how the map widget consumes them.

use folio_core::{LocationTable, keyword_match, pulse_mask};

#[test]
fn every_builtin_location_has_usable_keywords() {
    let table = LocationTable::builtin();
    for location in table.iter() {
        assert!(
            !location.keywords.is_empty(),
            "{} has no keywords for the pulse filter",
            location.id
        );
        // Each location must at least match its own details text, otherwise
        // activating it would dim everything including its own entry.
        let self_text = format!("{} {}", location.details, location.name);
        assert!(
            keyword_match(&self_text, &location.keywords),
            "{} does not match its own description",
            location.id
        );
    }
}

#[test]
fn finland_pulse_keeps_boreal_projects_visible() {
    let table = LocationTable::builtin();
    let finland = table.get("finland").unwrap();

    let items = [
        "Spectral measurements in boreal forest stands",
        "Street tree inventory for Vancouver parks",
        "Soil water sampling campaign across Lapland",
    ];
    let mask = pulse_mask(&finland.keywords, items.iter().copied());
    assert_eq!(mask, vec![true, false, true]);
}

#[test]
fn ids_are_stable_slugs() {
    let table = LocationTable::builtin();
    for location in table.iter() {
        assert!(
            location
                .id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '-'),
            "id {:?} is not a slug",
            location.id
        );
    }
}
