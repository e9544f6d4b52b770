use crate::content::{Category, Project, ProjectId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FilterChoice {
    #[default]
    All,
    Only(Category),
}

impl FilterChoice {
    // the filter bar, in display order
    pub fn choices() -> Vec<FilterChoice> {
        let mut choices = vec![FilterChoice::All];
        choices.extend(Category::filterable().into_iter().map(FilterChoice::Only));
        choices
    }

    pub fn label(&self) -> &str {
        match self {
            FilterChoice::All => "All Projects",
            FilterChoice::Only(category) => category.label(),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            FilterChoice::All => "all",
            FilterChoice::Only(category) => category.tag(),
        }
    }

    // unlisted categories never match a specific filter, even one naming the same tag
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            FilterChoice::All => true,
            FilterChoice::Only(Category::Unlisted(_)) => false,
            FilterChoice::Only(category) => project.category == *category,
        }
    }
}

// portfolio grid state
//
// which category is showing and which project, if any, has its detail overlay open.
// selection is a single slot, so opening another project replaces the current one
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    active: FilterChoice,
    selected: Option<ProjectId>,
}

impl ProjectFilter {
    pub fn active(&self) -> &FilterChoice {
        &self.active
    }

    pub fn set_filter(&mut self, choice: FilterChoice) {
        self.active = choice;
    }

    // the visible subset, in content order
    pub fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.active.matches(p)).collect()
    }

    pub fn select(&mut self, id: Option<ProjectId>) {
        self.selected = id;
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<ProjectId> {
        self.selected
    }

    pub fn selected<'a>(&self, projects: &'a [Project]) -> Option<&'a Project> {
        let id = self.selected?;
        projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: ProjectId, tag: &str) -> Project {
        Project {
            id,
            title: format!("project {id}"),
            description: None,
            image: format!("/images/{id}.png"),
            live_url: format!("https://{id}.example"),
            repo_url: None,
            category: Category::from(String::from(tag)),
            technologies: Vec::new(),
            features: Vec::new(),
            status: None,
            year: None,
        }
    }

    fn ten_projects() -> Vec<Project> {
        let tags = [
            "filter-2", "filter-3", "filter-1", "filter-3", "filter-3", "filter-3", "filter-1",
            "filter-2", "filter-3", "filter-3",
        ];

        tags.iter()
            .enumerate()
            .map(|(i, tag)| project(i as ProjectId + 1, tag))
            .collect()
    }

    #[test]
    fn all_shows_everything() {
        let projects = ten_projects();
        let filter = ProjectFilter::default();

        assert_eq!(filter.visible(&projects).len(), 10);
    }

    #[test]
    fn category_filter_keeps_relative_order() {
        let projects = ten_projects();
        let mut filter = ProjectFilter::default();

        filter.set_filter(FilterChoice::Only(Category::from(String::from("filter-1"))));

        let ids: Vec<_> = filter.visible(&projects).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 7]);
    }

    #[test]
    fn unlisted_projects_only_show_under_all() {
        let mut projects = ten_projects();
        projects.push(project(11, "filter-7"));
        let mut filter = ProjectFilter::default();

        assert!(filter.visible(&projects).iter().any(|p| p.id == 11));

        filter.set_filter(FilterChoice::Only(Category::Unlisted(String::from("filter-7"))));
        assert!(filter.visible(&projects).is_empty());

        for category in Category::filterable() {
            filter.set_filter(FilterChoice::Only(category));
            assert!(filter.visible(&projects).iter().all(|p| p.id != 11));
        }
    }

    #[test]
    fn selecting_replaces_previous_selection() {
        let projects = ten_projects();
        let mut filter = ProjectFilter::default();

        filter.select(Some(3));
        filter.select(Some(7));

        assert_eq!(filter.selected_id(), Some(7));
        assert_eq!(filter.selected(&projects).map(|p| p.id), Some(7));
    }

    #[test]
    fn closing_leaves_the_grid_alone() {
        let projects = ten_projects();
        let mut filter = ProjectFilter::default();
        filter.set_filter(FilterChoice::Only(Category::Business));
        let before: Vec<_> = filter.visible(&projects).iter().map(|p| p.id).collect();

        filter.select(Some(1));
        filter.close();

        let after: Vec<_> = filter.visible(&projects).iter().map(|p| p.id).collect();
        assert_eq!(filter.selected(&projects), None);
        assert_eq!(before, after);
        assert_eq!(filter.active(), &FilterChoice::Only(Category::Business));
    }

    #[test]
    fn unknown_selection_shows_nothing() {
        let projects = ten_projects();
        let mut filter = ProjectFilter::default();

        filter.select(Some(99));
        assert!(filter.selected(&projects).is_none());
    }

    #[test]
    fn filter_bar_order() {
        let labels: Vec<_> = FilterChoice::choices()
            .iter()
            .map(|c| c.label().to_owned())
            .collect();

        assert_eq!(labels, vec!["All Projects", "Web Apps", "Business", "Enterprise"]);
    }
}
