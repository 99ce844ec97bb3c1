pub mod data;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    category::{Category, CategoryMetadata},
    error::CatalogError,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: Category,
    /// Relative media path; may be empty.
    pub thumbnail: String,
    pub description: String,
    pub detailed_description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub live_demo: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub collaborators: Vec<String>,
}

impl Project {
    pub fn new(id: &str, title: &str, category: Category) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            category,
            thumbnail: String::new(),
            description: String::new(),
            detailed_description: String::new(),
            technologies: Vec::new(),
            images: Vec::new(),
            video_url: None,
            live_demo: None,
            github: None,
            collaborators: Vec::new(),
        }
    }

    pub fn thumbnail(mut self, path: &str) -> Self {
        self.thumbnail = path.to_string();
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.description = text.to_string();
        self
    }

    pub fn detailed_description(mut self, text: &str) -> Self {
        self.detailed_description = text.to_string();
        self
    }

    pub fn technologies(mut self, names: &[&str]) -> Self {
        self.technologies = to_strings(names);
        self
    }

    pub fn images(mut self, paths: &[&str]) -> Self {
        self.images = to_strings(paths);
        self
    }

    pub fn video_url(mut self, path: &str) -> Self {
        self.video_url = Some(path.to_string());
        self
    }

    pub fn live_demo(mut self, url: &str) -> Self {
        self.live_demo = Some(url.to_string());
        self
    }

    pub fn github(mut self, url: &str) -> Self {
        self.github = Some(url.to_string());
        self
    }

    pub fn collaborators(mut self, names: &[&str]) -> Self {
        self.collaborators = to_strings(names);
        self
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Projects of one category, in catalog order.
#[derive(Clone, Debug)]
pub struct CategoryGroup<'a> {
    pub metadata: &'static CategoryMetadata,
    pub projects: Vec<&'a Project>,
}

/// Immutable, validated project collection. Order is declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Rejects empty and duplicate ids so that `by_id` is unambiguous.
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());
        for (index, project) in projects.iter().enumerate() {
            if project.id.is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: project.id.clone(),
                    index,
                });
            }
        }
        Ok(Self { projects })
    }

    /// The compiled-in portfolio.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(data::all_projects())
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Project> + '_ {
        self.projects
            .iter()
            .filter(move |p| p.category == category)
    }

    pub fn by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Every registry category in display order, empty ones included.
    pub fn grouped(&self) -> Vec<CategoryGroup<'_>> {
        Category::ALL
            .into_iter()
            .map(|category| CategoryGroup {
                metadata: category.metadata(),
                projects: self.by_category(category).collect(),
            })
            .collect()
    }
}
