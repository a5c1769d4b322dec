use crate::content::Project;

/// Which project, if any, the detail modal is showing.
///
/// The modal is visible exactly when a project is selected, so "visible with nothing
/// selected" cannot be represented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectSelection {
    #[default]
    NoSelection,
    Showing(&'static Project),
}

impl ProjectSelection {
    /// Build a selection from a visibility flag and an optional project.
    ///
    /// A visible modal with no project collapses to `NoSelection`, as does any hidden modal.
    pub fn from_parts(visible: bool, selected: Option<&'static Project>) -> Self {
        match (visible, selected) {
            (true, Some(project)) => Self::Showing(project),
            _ => Self::NoSelection,
        }
    }

    pub fn select(&mut self, project: &'static Project) {
        *self = Self::Showing(project);
    }

    pub fn close(&mut self) {
        *self = Self::NoSelection;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Showing(_))
    }

    pub fn project(&self) -> Option<&'static Project> {
        match self {
            Self::Showing(project) => Some(project),
            Self::NoSelection => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;

    fn project(title: &str) -> &'static Project {
        PORTFOLIO.project(title).expect("project should exist")
    }

    #[test]
    fn test_starts_hidden() {
        let selection = ProjectSelection::default();
        assert!(!selection.is_visible());
        assert!(selection.project().is_none());
    }

    #[test]
    fn test_select_shows_project() {
        for p in PORTFOLIO.projects.iter() {
            let mut selection = ProjectSelection::default();
            selection.select(p);
            assert!(selection.is_visible());
            assert_eq!(selection.project(), Some(p));
        }
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut selection = ProjectSelection::default();
        selection.select(project("E-Commerce Platform"));
        selection.select(project("Portfolio Website"));
        assert_eq!(
            selection.project().map(|p| p.title.as_str()),
            Some("Portfolio Website")
        );
    }

    #[test]
    fn test_close_clears_from_any_state() {
        let mut selection = ProjectSelection::default();
        selection.close();
        assert_eq!(selection, ProjectSelection::NoSelection);

        selection.select(project("Task Management App"));
        selection.close();
        assert!(!selection.is_visible());
        assert!(selection.project().is_none());
    }

    #[test]
    fn test_from_parts() {
        let p = project("Task Management App");
        assert_eq!(
            ProjectSelection::from_parts(true, Some(p)),
            ProjectSelection::Showing(p)
        );
        assert_eq!(
            ProjectSelection::from_parts(true, None),
            ProjectSelection::NoSelection
        );
        assert_eq!(
            ProjectSelection::from_parts(false, Some(p)),
            ProjectSelection::NoSelection
        );
        assert_eq!(
            ProjectSelection::from_parts(false, None),
            ProjectSelection::NoSelection
        );
    }
}
