//! The portfolio's project table, one function per category.
//!
//! Media paths are relative to the public directory; they are resolved
//! against the deployment base when rendered.

use super::Project;
use crate::category::Category;

const PLACEHOLDER_THUMBNAIL: &str = "placeholder-thumbnail.jpg";
const GENERIC_DETAILS: &str = "A more detailed description of what this project does, the challenges you faced, and what you learned.";

/// All projects, grouped in registry order.
pub fn all_projects() -> Vec<Project> {
    let mut projects = touchdesigner();
    projects.extend(grasshopper());
    projects.extend(university());
    projects.extend(p5js());
    projects
}

pub fn touchdesigner() -> Vec<Project> {
    vec![
        // thumbnail pending: renders as an empty frame until a video is added
        Project::new("td-project-0", "Audio Reactive Mandal", Category::TouchDesigner)
            .description("A mandal that reacts to audio")
            .detailed_description(GENERIC_DETAILS)
            .technologies(&["TouchDesigner", "Audio Reactive"]),
        Project::new("td-project-1", "Yayo Kusama", Category::TouchDesigner)
            .thumbnail("videos/touchdesigner/TDMovieOut.0.mp4")
            .description("It is my take on the Yayo Kusama installation, and to bring her art work to life at comfort of my home.")
            .detailed_description(GENERIC_DETAILS)
            .technologies(&["TouchDesigner", "GLSL"]),
        Project::new("td-project-2", "SciFi Wireframe", Category::TouchDesigner)
            .thumbnail("videos/touchdesigner/scifiwireframe.0.mp4")
            .description("A process to turn any logo into a sci-fi wireframe")
            .detailed_description("A process to turn any logo into a sci-fi wireframe.")
            .technologies(&["TouchDesigner", "GLSL"]),
    ]
}

pub fn grasshopper() -> Vec<Project> {
    vec![
        Project::new("gh-project-1", "Grasshopper Project 1", Category::Grasshopper)
            .thumbnail(PLACEHOLDER_THUMBNAIL)
            .description("A parametric design project using Grasshopper")
            .detailed_description("Detailed description of your Grasshopper work.")
            .technologies(&["Grasshopper", "Rhino", "Parametric Design"]),
        Project::new("gh-project-2", "Grasshopper Project 2", Category::Grasshopper)
            .thumbnail(PLACEHOLDER_THUMBNAIL)
            .description("Another parametric design exploration")
            .detailed_description("More details about this project.")
            .technologies(&["Grasshopper", "3D Modeling"]),
    ]
}

pub fn university() -> Vec<Project> {
    vec![
        Project::new("uni-project-1", "University Project 1", Category::University)
            .thumbnail(PLACEHOLDER_THUMBNAIL)
            .description("A university assignment or research project")
            .detailed_description("Detailed information about this academic work.")
            .technologies(&["Research", "Analysis"])
            .collaborators(&["Sam Losi", "Conrelius Carl"]),
        Project::new("uni-project-2", "University Project 2", Category::University)
            .thumbnail(PLACEHOLDER_THUMBNAIL)
            .images(&[PLACEHOLDER_THUMBNAIL, PLACEHOLDER_THUMBNAIL])
            .description("Another academic project")
            .detailed_description("More details about this university work.")
            .technologies(&["Academic Research"]),
    ]
}

pub fn p5js() -> Vec<Project> {
    vec![
        Project::new("p5-project-1", "P5.js Project 1", Category::P5js)
            .thumbnail(PLACEHOLDER_THUMBNAIL)
            .description("An interactive creative coding project")
            .detailed_description("Detailed description of your P5.js sketch.")
            .technologies(&["P5.js", "JavaScript", "Creative Coding"])
            .live_demo("https://example.com/demo"),
        Project::new("p5-project-2", "P5.js Project 2", Category::P5js)
            .thumbnail(PLACEHOLDER_THUMBNAIL)
            .description("Another creative coding sketch")
            .detailed_description("More details about this interactive piece.")
            .technologies(&["P5.js", "Generative Art"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_group_holds_only_its_category() {
        let groups = [
            (Category::TouchDesigner, touchdesigner()),
            (Category::Grasshopper, grasshopper()),
            (Category::University, university()),
            (Category::P5js, p5js()),
        ];
        for (category, projects) in groups {
            assert!(projects.iter().all(|p| p.category == category));
        }
    }

    #[test]
    fn collaborators_are_separate_names() {
        let projects = university();
        let names = &projects[0].collaborators;
        assert_eq!(names.len(), 2);
        assert!(names.iter().all(|n| !n.contains(',')));
    }
}
