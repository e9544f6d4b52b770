use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument, warn};

const BUNDLED_CONTENT: &str = include_str!("../assets/portfolio.toml");

pub type ProjectId = u32;

// skills, shown as labelled progress bars in the about section
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub percentage: i32,
}

impl Skill {
    // values outside [0, 100] are kept as written but never drawn outside the bar
    pub fn display_percentage(&self) -> u8 {
        self.percentage.clamp(0, 100) as u8
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Experience {
    pub year: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub side: Side,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
}

// project categories
//
// the filter control offers a fixed set of these.  anything else in the content file is
// carried along as Unlisted so the project still shows under "all", but it can never be
// selected by a specific filter
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Category {
    WebApps,
    Business,
    Enterprise,
    Unlisted(String),
}

impl Category {
    pub fn filterable() -> [Category; 3] {
        [Category::WebApps, Category::Business, Category::Enterprise]
    }

    pub fn tag(&self) -> &str {
        match self {
            Category::WebApps => "filter-1",
            Category::Business => "filter-2",
            Category::Enterprise => "filter-3",
            Category::Unlisted(tag) => tag,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::WebApps => "Web Apps",
            Category::Business => "Business",
            Category::Enterprise => "Enterprise",
            Category::Unlisted(tag) => tag,
        }
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Category {
        match tag.as_str() {
            "filter-1" => Category::WebApps,
            "filter-2" => Category::Business,
            "filter-3" => Category::Enterprise,
            _ => Category::Unlisted(tag),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> String {
        match category {
            Category::Unlisted(tag) => tag,
            other => String::from(other.tag()),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Maintenance,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Maintenance => "Maintenance",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "status-completed",
            ProjectStatus::InProgress => "status-in-progress",
            ProjectStatus::Maintenance => "status-maintenance",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: Option<String>,
    pub image: String,
    pub live_url: String,
    pub repo_url: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub status: Option<ProjectStatus>,
    pub year: Option<String>,
}

// everything the page renders that is not configuration
//
// loaded once at startup and never mutated afterwards
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Content {
    pub headlines: Vec<String>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
}

impl Content {
    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_toml(doc: &str) -> anyhow::Result<Content> {
        let content: Content = toml::from_str(doc)?;

        content.validate()?;

        debug!(
            projects = content.projects.len(),
            skills = content.skills.len(),
            "loaded content"
        );
        Ok(content)
    }

    pub fn bundled() -> anyhow::Result<Content> {
        Content::from_toml(BUNDLED_CONTENT)
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    // hard failures are only the things that would break selection by id; everything
    // else is a warning and the page renders what it can
    fn validate(&self) -> anyhow::Result<()> {
        let mut ids = HashSet::new();

        for project in &self.projects {
            if project.id == 0 {
                return Err(anyhow::Error::msg(format!(
                    "project \"{}\" has id 0, ids must be positive",
                    project.title
                )));
            }

            if !ids.insert(project.id) {
                return Err(anyhow::Error::msg(format!(
                    "duplicate project id {}",
                    project.id
                )));
            }

            if let Category::Unlisted(tag) = &project.category {
                warn!(
                    id = project.id,
                    tag = %tag,
                    "unrecognized category, project will only show under all"
                );
            }
        }

        for skill in &self.skills {
            if !(0..=100).contains(&skill.percentage) {
                warn!(
                    skill = %skill.name,
                    percentage = skill.percentage,
                    "skill percentage out of range, clamping for display"
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        headlines = ["Backend Developer"]
        skills = []
        experiences = []
        services = []

        [[projects]]
        id = 1
        title = "One"
        image = "/images/one.png"
        live_url = "https://one.example"
        category = "filter-1"

        [[projects]]
        id = 2
        title = "Two"
        image = "/images/two.png"
        live_url = "https://two.example"
        repo_url = "https://github.com/example/two"
        category = "filter-9"
        status = "in-progress"
        technologies = ["Rust"]
    "#;

    #[test]
    fn bundled_content_loads() {
        let content = Content::bundled().unwrap();

        assert!(!content.headlines.is_empty());
        assert!(!content.skills.is_empty());
        assert_eq!(content.projects.len(), 10);
        assert!(content.skills.iter().all(|s| (0..=100).contains(&s.percentage)));
    }

    #[test]
    fn optional_project_fields_default() {
        let content = Content::from_toml(MINIMAL).unwrap();
        let one = content.project(1).unwrap();

        assert_eq!(one.category, Category::WebApps);
        assert!(one.repo_url.is_none());
        assert!(one.description.is_none());
        assert!(one.technologies.is_empty());
        assert!(one.status.is_none());
    }

    #[test]
    fn unknown_category_is_kept_not_rejected() {
        let content = Content::from_toml(MINIMAL).unwrap();
        let two = content.project(2).unwrap();

        assert_eq!(two.category, Category::Unlisted(String::from("filter-9")));
        assert_eq!(two.category.tag(), "filter-9");
        assert_eq!(two.status, Some(ProjectStatus::InProgress));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let doc = MINIMAL.replace("id = 2", "id = 1");

        let err = Content::from_toml(&doc).unwrap_err();
        assert!(err.to_string().contains("duplicate project id 1"));
    }

    #[test]
    fn zero_id_is_rejected() {
        let doc = MINIMAL.replace("id = 2", "id = 0");

        assert!(Content::from_toml(&doc).is_err());
    }

    #[test]
    fn skill_display_is_clamped() {
        let over = Skill { name: String::from("over"), percentage: 140 };
        let under = Skill { name: String::from("under"), percentage: -5 };
        let exact = Skill { name: String::from("exact"), percentage: 95 };

        assert_eq!(over.display_percentage(), 100);
        assert_eq!(under.display_percentage(), 0);
        assert_eq!(exact.display_percentage(), 95);
    }

    #[test]
    fn category_tags_round_trip_through_strings() {
        for category in Category::filterable() {
            assert_eq!(Category::from(String::from(category.tag())), category);
        }
    }
}
