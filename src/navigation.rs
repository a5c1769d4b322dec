/// Page sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Skills,
    Projects,
    Experience,
    Certifications,
}

impl Section {
    /// Navigation order, which is also the order the sections appear on the page.
    pub const ALL: [Section; 4] = [
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Certifications,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Certifications => "Certifications",
        }
    }

    /// Element id of the section, used as the scroll target.
    pub fn anchor_id(self) -> &'static str {
        match self {
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Certifications => "certifications",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    pub fn from_anchor_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor_id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_skills_label_targets_skills() {
        let section = Section::from_label("Skills").expect("Skills should be a section");
        assert_eq!(section.anchor_id(), "skills");
    }

    #[test]
    fn test_labels_and_ids_are_one_to_one() {
        let labels = Section::ALL
            .iter()
            .map(|s| s.label())
            .collect::<HashSet<_>>();
        let ids = Section::ALL
            .iter()
            .map(|s| s.anchor_id())
            .collect::<HashSet<_>>();
        assert_eq!(labels.len(), Section::ALL.len());
        assert_eq!(ids.len(), Section::ALL.len());

        for section in Section::ALL {
            assert_eq!(Section::from_label(section.label()), Some(section));
            assert_eq!(Section::from_anchor_id(section.anchor_id()), Some(section));
        }
    }

    #[test]
    fn test_unknown_targets() {
        assert_eq!(Section::from_label("Blog"), None);
        assert_eq!(Section::from_label("skills"), None);
        assert_eq!(Section::from_anchor_id("Skills"), None);
    }

    #[test]
    fn test_navigation_order() {
        let labels = Section::ALL.map(|s| s.label());
        assert_eq!(
            labels,
            ["Skills", "Projects", "Experience", "Certifications"]
        );
    }
}
