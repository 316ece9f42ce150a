//! Static page content: profile, projects, and publications.
//!
//! This is the portfolio's editorial data. Projects expose their matchable
//! text to the pulse filter; publications expose theirs to search.

/// A hero stat counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub target: u32,
}

/// Owner profile shown in the hero section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Name variants cycled every few seconds.
    pub names: &'static [&'static str],
    pub tagline: &'static str,
    pub summary: &'static str,
    pub stats: &'static [Stat],
}

/// A project card. Its text is what the pulse filter matches against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
}

impl Project {
    /// Text the pulse filter matches keywords against.
    pub fn matchable_text(&self) -> String {
        format!("{} {}", self.title, self.summary)
    }
}

/// A publication entry, searchable by title and venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    pub title: &'static str,
    pub venue: &'static str,
    pub year: u16,
}

impl Publication {
    /// Text the search box matches against.
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.title, self.venue, self.year)
    }
}

pub fn profile() -> Profile {
    Profile {
        names: &["Yu Lin", "林雨", "Yu Lin (林雨)"],
        tagline: "Urban forestry & water systems researcher",
        summary: "Studying how green and blue infrastructure shape the \
                  cities and forests we live with, from Vancouver street \
                  trees to boreal field plots in Lapland.",
        stats: &[
            Stat { label: "Years of study", target: 7 },
            Stat { label: "Institutions", target: 4 },
            Stat { label: "Countries", target: 4 },
            Stat { label: "Field campaigns", target: 9 },
        ],
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Green Space Equity Atlas",
            summary: "Mapping access to urban forestry and public green \
                      space across Vancouver neighbourhoods.",
        },
        Project {
            title: "Delta City Water Scenarios",
            summary: "Scenario modelling of water systems and BGI retrofits \
                      for low-lying districts in the Netherlands.",
        },
        Project {
            title: "Boreal Spectral Sampling Toolkit",
            summary: "Field protocol and GIS pipeline for spectral \
                      measurements across Lapland forest plots.",
        },
        Project {
            title: "Phosphorus Microbe Screening",
            summary: "Lab screening of phosphorus-solubilizing strains from \
                      Zhejiang plantation soils.",
        },
        Project {
            title: "Campus Tree Inventory App",
            summary: "A lightweight survey tool for student-led street tree \
                      inventories.",
        },
    ]
}

pub fn publications() -> Vec<Publication> {
    vec![
        Publication {
            title: "Street tree canopy and neighbourhood equity in Vancouver",
            venue: "Urban Forestry & Urban Greening",
            year: 2024,
        },
        Publication {
            title: "Phosphorus-solubilizing microorganisms in subtropical plantation soils",
            venue: "State Key Laboratory of Subtropical Silviculture, working paper",
            year: 2023,
        },
        Publication {
            title: "Blue-green infrastructure scenarios for delta cities",
            venue: "Water Systems and Global Change group, thesis proposal",
            year: 2025,
        },
        Publication {
            title: "Spectral properties of boreal forest soils after water extraction",
            venue: "Field report, Department of Environmental and Biological Sciences",
            year: 2025,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{LocationTable, keyword_match};

    #[test]
    fn each_location_matches_at_least_one_project() {
        let table = LocationTable::builtin();
        let projects = projects();
        for location in table.iter() {
            assert!(
                projects
                    .iter()
                    .any(|p| keyword_match(&p.matchable_text(), &location.keywords)),
                "no project matches {}",
                location.id
            );
        }
    }

    #[test]
    fn profile_has_rotating_names_and_stats() {
        let p = profile();
        assert!(p.names.len() > 1);
        assert!(!p.stats.is_empty());
        assert!(p.stats.iter().all(|s| s.target > 0));
    }
}
