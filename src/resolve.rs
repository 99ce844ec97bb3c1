//! Detail-page routing: from a raw path segment to a project or a fallback.

use crate::{
    catalog::{Catalog, Project},
    media::{classify, poster_for, MediaKind},
};

pub const DEFAULT_FALLBACK_TARGET: &str = "/";
pub const DEFAULT_FALLBACK_LABEL: &str = "Back to Portfolio";

/// Outcome of looking up a detail page. Both variants are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found(&'a Project),
    NotFound,
}

impl<'a> Resolution<'a> {
    pub fn into_option(self) -> Option<&'a Project> {
        match self {
            Self::Found(project) => Some(project),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Exact match of `raw_id` against project ids. Decoding the segment is the
/// router's job.
pub fn resolve<'a>(catalog: &'a Catalog, raw_id: &str) -> Resolution<'a> {
    match catalog.by_id(raw_id) {
        Some(project) => Resolution::Found(project),
        None => Resolution::NotFound,
    }
}

/// Page path of a project's detail view, relative to the site base.
pub fn project_path(id: &str) -> String {
    format!("project/{id}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackLink {
    pub target: String,
    pub label: String,
}

impl Default for FallbackLink {
    fn default() -> Self {
        Self {
            target: DEFAULT_FALLBACK_TARGET.to_string(),
            label: DEFAULT_FALLBACK_LABEL.to_string(),
        }
    }
}

/// Copy of the page shown when resolution fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotFoundCopy {
    pub title: String,
    pub message: String,
    pub link: FallbackLink,
}

impl Default for NotFoundCopy {
    fn default() -> Self {
        Self {
            title: "Project Not Found".to_string(),
            message: "The project you're looking for doesn't exist.".to_string(),
            link: FallbackLink::default(),
        }
    }
}

/// Primary media at the top of a detail page.
///
/// An explicit `video_url` is played with controls; a thumbnail used as hero
/// loops silently instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroMedia<'a> {
    pub src: &'a str,
    pub kind: MediaKind,
    pub poster: Option<&'a str>,
    explicit_video: bool,
}

impl<'a> HeroMedia<'a> {
    pub fn for_project(project: &'a Project) -> Self {
        let (src, explicit_video) = match project.video_url.as_deref() {
            Some(url) => (url, true),
            None => (project.thumbnail.as_str(), false),
        };
        Self {
            src,
            kind: classify(src),
            poster: poster_for(src, Some(project.thumbnail.as_str())),
            explicit_video,
        }
    }

    pub fn autoplay(&self) -> bool {
        !self.explicit_video
    }

    pub fn controls(&self) -> bool {
        self.explicit_video
    }
}
