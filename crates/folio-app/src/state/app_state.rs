//! Page-level state: active section, compact menu, publication search.

/// Top-level page sections, in navbar order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Home,
    Journey,
    Projects,
    Publications,
    Contact,
}

impl Section {
    /// DOM id of the section's anchor element.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Journey => "journey",
            Section::Projects => "projects",
            Section::Publications => "publications",
            Section::Contact => "contact",
        }
    }

    /// Navbar label.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Journey => "Journey",
            Section::Projects => "Projects",
            Section::Publications => "Publications",
            Section::Contact => "Contact",
        }
    }

    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::Journey,
            Section::Projects,
            Section::Publications,
            Section::Contact,
        ]
    }
}

/// Page chrome state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub active_section: Section,
    /// Whether the compact (hamburger) menu is expanded.
    pub menu_open: bool,
    /// Live publication search query.
    pub search_query: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigates to a section, collapsing the compact menu.
    pub fn go_to(&mut self, section: Section) {
        self.active_section = section;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_closes_compact_menu() {
        let mut state = AppState::new();
        state.toggle_menu();
        assert!(state.menu_open);
        state.go_to(Section::Contact);
        assert_eq!(state.active_section, Section::Contact);
        assert!(!state.menu_open);
    }

    #[test]
    fn anchors_are_unique() {
        let mut anchors: Vec<_> = Section::all().iter().map(|s| s.anchor()).collect();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), Section::all().len());
    }
}
