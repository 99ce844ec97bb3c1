use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnknownCategory;

/// Fixed set of project categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    TouchDesigner,
    Grasshopper,
    University,
    P5js,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryMetadata {
    pub id: Category,
    pub title: &'static str,
    pub description: &'static str,
}

static METADATA: [CategoryMetadata; 4] = [
    CategoryMetadata {
        id: Category::TouchDesigner,
        title: "Touch Designer",
        description: "Real-time interactive installations and audiovisual experiences",
    },
    CategoryMetadata {
        id: Category::Grasshopper,
        title: "Grasshopper",
        description: "Parametric design and computational architecture projects",
    },
    CategoryMetadata {
        id: Category::University,
        title: "University Projects",
        description: "Academic research and coursework explorations",
    },
    CategoryMetadata {
        id: Category::P5js,
        title: "P5.js",
        description: "Creative coding sketches and interactive web experiences",
    },
];

impl Category {
    /// Display order of the listing page.
    pub const ALL: [Category; 4] = [
        Category::TouchDesigner,
        Category::Grasshopper,
        Category::University,
        Category::P5js,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TouchDesigner => "touchdesigner",
            Self::Grasshopper => "grasshopper",
            Self::University => "university",
            Self::P5js => "p5js",
        }
    }

    pub fn metadata(self) -> &'static CategoryMetadata {
        let index = match self {
            Self::TouchDesigner => 0,
            Self::Grasshopper => 1,
            Self::University => 2,
            Self::P5js => 3,
        };
        &METADATA[index]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_order() {
        let tags: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(tags, ["touchdesigner", "grasshopper", "university", "p5js"]);
    }

    #[test]
    fn metadata_matches_its_category() {
        for category in Category::ALL {
            assert_eq!(category.metadata().id, category);
        }
        assert_eq!(Category::University.metadata().title, "University Projects");
    }

    #[test]
    fn parse_round_trips_tags() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert_eq!(
            "P5JS".parse::<Category>(),
            Err(UnknownCategory("P5JS".to_string()))
        );
    }

    #[test]
    fn serializes_as_tag() {
        let json = serde_json::to_string(&Category::TouchDesigner).unwrap();
        assert_eq!(json, "\"touchdesigner\"");
    }
}
