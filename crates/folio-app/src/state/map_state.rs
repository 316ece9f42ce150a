//! State for the world-map location widget.
//!
//! The widget owns three pieces of transient state: which location's
//! disclosure is open, which region is hover-highlighted, and which content
//! items are currently dimmed by the pulse filter. All operations are
//! best-effort: an id that does not resolve in the location table is a
//! silent no-op.

use folio_core::{Location, LocationTable, pulse_mask};

/// Widget state. Constructed once per app run with the number of content
/// items it governs.
#[derive(Debug, Clone, PartialEq)]
pub struct MapState {
    /// Location id with an open disclosure, if any.
    pub active: Option<String>,
    /// Region id currently hover-highlighted, if any.
    pub hovered: Option<String>,
    /// Dim flags, parallel to the governed content items.
    dimmed: Vec<bool>,
    /// Generation counter for pulse restore timers. A timer only restores
    /// if its captured generation is still current, so a newer pulse
    /// logically cancels an older timer.
    pulse_seq: u64,
    /// Whether activation runs the pulse filter at all (per-deployment
    /// choice; some variants only show the disclosure).
    pulse_enabled: bool,
}

impl MapState {
    pub fn new(item_count: usize, pulse_enabled: bool) -> Self {
        Self {
            active: None,
            hovered: None,
            dimmed: vec![false; item_count],
            pulse_seq: 0,
            pulse_enabled,
        }
    }

    /// Activates a region: opens the disclosure for its location and, when
    /// the pulse filter is enabled, dims non-matching content items.
    ///
    /// Returns the pulse generation to hand to a restore timer, or `None`
    /// if no pulse ran. An unknown id leaves all state untouched.
    pub fn activate(&mut self, table: &LocationTable, id: &str, items: &[String]) -> Option<u64> {
        if !table.contains(id) {
            tracing::debug!("ignoring activation of unknown region {id:?}");
            return None;
        }
        self.active = Some(id.to_string());
        if self.pulse_enabled {
            self.filter_content(table, id, items)
        } else {
            None
        }
    }

    /// Closes the disclosure.
    pub fn close(&mut self) {
        self.active = None;
    }

    /// The location record behind the open disclosure.
    pub fn active_location<'t>(&self, table: &'t LocationTable) -> Option<&'t Location> {
        self.active.as_deref().and_then(|id| table.get(id))
    }

    /// Transient hover highlight on a region and its paired list entry.
    /// Unknown ids are tolerated the same way activation tolerates them.
    pub fn highlight(&mut self, table: &LocationTable, id: &str) {
        if table.contains(id) {
            self.hovered = Some(id.to_string());
        }
    }

    /// Clears the hover highlight, returning regions to baseline.
    pub fn clear_highlight(&mut self) {
        self.hovered = None;
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.hovered.as_deref() == Some(id)
    }

    /// Dims every content item whose text matches none of the location's
    /// keywords. Returns the new pulse generation; the caller schedules a
    /// [`MapState::restore`] with it after the fixed window.
    pub fn filter_content(
        &mut self,
        table: &LocationTable,
        id: &str,
        items: &[String],
    ) -> Option<u64> {
        let location = table.get(id)?;
        if items.is_empty() {
            return None;
        }
        let mask = pulse_mask(
            &location.keywords,
            items.iter().map(String::as_str),
        );
        self.dimmed = mask.into_iter().map(|visible| !visible).collect();
        self.pulse_seq += 1;
        Some(self.pulse_seq)
    }

    /// Restores all items to full visibility if `seq` is still the current
    /// pulse generation. A stale generation means a newer pulse superseded
    /// this timer, which is therefore dropped. Idempotent.
    pub fn restore(&mut self, seq: u64) {
        if seq == self.pulse_seq {
            self.dimmed.iter_mut().for_each(|d| *d = false);
        }
    }

    pub fn is_dimmed(&self, index: usize) -> bool {
        self.dimmed.get(index).copied().unwrap_or(false)
    }

    pub fn any_dimmed(&self) -> bool {
        self.dimmed.iter().any(|d| *d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<String> {
        vec![
            "Spectral sampling across Lapland plots".to_string(),
            "Vancouver street tree inventory".to_string(),
            "Water scenarios for delta cities with BGI".to_string(),
        ]
    }

    fn table() -> &'static LocationTable {
        LocationTable::builtin()
    }

    #[test]
    fn activation_opens_disclosure_with_verbatim_fields() {
        for location in table().iter() {
            let mut state = MapState::new(3, true);
            state.activate(table(), &location.id, &items());

            let disclosed = state.active_location(table()).unwrap();
            assert_eq!(disclosed.name, location.name);
            assert_eq!(disclosed.institution, location.institution);
            assert_eq!(disclosed.period, location.period);
            assert_eq!(disclosed.details, location.details);
        }
    }

    #[test]
    fn finland_disclosure_text() {
        let mut state = MapState::new(3, true);
        state.activate(table(), "finland", &items());
        let loc = state.active_location(table()).unwrap();
        assert_eq!(loc.name, "Joensuu, Finland");
        assert_eq!(loc.institution, "Eastern Finland University");
        assert_eq!(loc.period, "May 2025 - Sep 2025");
    }

    #[test]
    fn unknown_id_leaves_state_unchanged() {
        let mut state = MapState::new(3, true);
        let before = state.clone();
        let seq = state.activate(table(), "unknown", &items());
        assert!(seq.is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn pulse_dims_exactly_non_matching_items() {
        let mut state = MapState::new(3, true);
        state.activate(table(), "finland", &items());
        // Only the Lapland item mentions a finland keyword.
        assert!(!state.is_dimmed(0));
        assert!(state.is_dimmed(1));
        assert!(state.is_dimmed(2));
    }

    #[test]
    fn restore_returns_everything_to_full_visibility() {
        let mut state = MapState::new(3, true);
        let seq = state.activate(table(), "finland", &items()).unwrap();
        assert!(state.any_dimmed());
        state.restore(seq);
        assert!(!state.any_dimmed());
        // Restoring again is harmless.
        state.restore(seq);
        assert!(!state.any_dimmed());
    }

    #[test]
    fn newer_pulse_cancels_older_restore() {
        let mut state = MapState::new(3, true);
        let first = state.activate(table(), "finland", &items()).unwrap();
        let second = state.activate(table(), "canada", &items()).unwrap();
        assert_ne!(first, second);

        // The first timer fires late: its generation is stale, nothing moves.
        state.restore(first);
        assert!(state.any_dimmed());

        state.restore(second);
        assert!(!state.any_dimmed());
    }

    #[test]
    fn highlight_round_trips_to_baseline() {
        let mut state = MapState::new(3, true);
        let baseline = state.clone();

        state.highlight(table(), "canada");
        assert!(state.is_highlighted("canada"));
        assert!(!state.is_highlighted("china"));

        state.clear_highlight();
        assert_eq!(state, baseline);
    }

    #[test]
    fn highlight_ignores_unknown_region() {
        let mut state = MapState::new(3, true);
        state.highlight(table(), "atlantis");
        assert!(state.hovered.is_none());
    }

    #[test]
    fn pulse_disabled_still_opens_disclosure() {
        let mut state = MapState::new(3, false);
        let seq = state.activate(table(), "finland", &items());
        assert!(seq.is_none());
        assert!(!state.any_dimmed());
        assert_eq!(state.active.as_deref(), Some("finland"));
    }

    #[test]
    fn empty_content_list_skips_pulse() {
        let mut state = MapState::new(0, true);
        let seq = state.activate(table(), "finland", &[]);
        assert!(seq.is_none());
        assert_eq!(state.active.as_deref(), Some("finland"));
    }

    #[test]
    fn close_clears_disclosure_only() {
        let mut state = MapState::new(3, true);
        state.activate(table(), "finland", &items());
        state.close();
        assert!(state.active.is_none());
        // Dimming is governed by its own timer, not the modal.
        assert!(state.any_dimmed());
    }
}
