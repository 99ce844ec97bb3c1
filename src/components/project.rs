use leptos::prelude::*;

use super::ui::{
    assets, ArrowLeftIcon, Badge, BadgeVariant, ButtonVariant, LinkButton, MediaDisplay, Size,
};
use crate::{
    catalog::Project,
    resolve::{project_path, FallbackLink, NotFoundCopy},
};

/// Technologies shown on a listing card.
pub const CARD_TECHNOLOGY_LIMIT: usize = 3;

pub fn card_technologies(project: &Project) -> &[String] {
    let shown = project.technologies.len().min(CARD_TECHNOLOGY_LIMIT);
    &project.technologies[..shown]
}

const CARD_MEDIA: &str = "group-hover:scale-105 transition-transform duration-300";

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let href = assets().resolve(&project_path(&project.id));
    let technologies = card_technologies(&project)
        .iter()
        .cloned()
        .map(|tech| {
            view! {
                <span class="text-xs px-2 py-1 bg-gray-100 dark:bg-gray-700 text-gray-700 dark:text-gray-300 rounded">
                    {tech}
                </span>
            }
        })
        .collect::<Vec<_>>();
    let badge = project.category.as_str().to_uppercase();

    view! {
        <a
            href=href
            class="group block bg-white dark:bg-gray-800 rounded-lg overflow-hidden shadow-md hover:shadow-xl transition-shadow duration-300"
        >
            <MediaDisplay
                src=project.thumbnail.clone()
                alt=project.title.clone()
                poster=None
                autoplay=true
                looped=true
                muted=true
                class="bg-gray-200 dark:bg-gray-700 overflow-hidden"
                media_class=CARD_MEDIA
            />
            <div class="p-4">
                <div class="mb-2">
                    <Badge variant=BadgeVariant::Category size=Size::Sm>
                        {badge}
                    </Badge>
                </div>
                <h3 class="text-xl font-bold mb-2 group-hover:text-blue-600 dark:group-hover:text-blue-400 transition-colors">
                    {project.title.clone()}
                </h3>
                <p class="text-gray-600 dark:text-gray-300 text-sm line-clamp-2">
                    {project.description.clone()}
                </p>
                <div class="mt-3 flex flex-wrap gap-2">{technologies}</div>
            </div>
        </a>
    }
}

#[component]
pub fn ProjectHeader(project: Project) -> impl IntoView {
    let badge = project.category.as_str().to_uppercase();
    let collaborators = (!project.collaborators.is_empty()).then(|| {
        let names = project.collaborators.clone();
        view! {
            <div class="mb-6">
                <h2 class="text-lg font-semibold mb-3">"Collaborators"</h2>
                <div class="flex flex-wrap gap-3">
                    {names
                        .into_iter()
                        .map(|name| {
                            view! {
                                <Badge variant=BadgeVariant::Primary size=Size::Lg>
                                    {name}
                                </Badge>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
    });

    view! {
        <div>
            <div class="mb-10">
                <Badge variant=BadgeVariant::Category>{badge}</Badge>
            </div>
            <h1 class="text-4xl md:text-5xl font-bold mb-6">{project.title.clone()}</h1>
            <div class="text-xl text-gray-600 dark:text-gray-400 mb-8">
                {collaborators}
                <p>{project.description.clone()}</p>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectTechnologies(technologies: Vec<String>) -> impl IntoView {
    view! {
        <div class="mb-12">
            <h2 class="text-xl font-semibold mb-4">"Technologies Used"</h2>
            <div class="flex flex-wrap gap-3">
                {technologies
                    .into_iter()
                    .map(|tech| view! { <Badge size=Size::Lg>{tech}</Badge> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Renders nothing for a project without gallery media.
#[component]
pub fn ProjectGallery(images: Vec<String>, #[prop(into)] project_title: String) -> impl IntoView {
    (!images.is_empty()).then(|| {
        let items = images
            .into_iter()
            .enumerate()
            .map(|(index, image)| {
                view! {
                    <MediaDisplay
                        src=image
                        alt=format!("{project_title} - Image {}", index + 1)
                        poster=None
                        controls=true
                        class="rounded-lg shadow-lg overflow-hidden"
                    />
                }
            })
            .collect::<Vec<_>>();
        view! {
            <div class="mb-12">
                <h2 class="text-2xl font-semibold mb-6">"Gallery"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">{items}</div>
            </div>
        }
    })
}

/// Renders nothing when the project has neither a demo nor a repository.
#[component]
pub fn ProjectLinks(live_demo: Option<String>, github: Option<String>) -> impl IntoView {
    let has_links = live_demo.is_some() || github.is_some();
    has_links.then(move || {
        let demo = live_demo.map(|href| {
            view! {
                <LinkButton href=href external=true variant=ButtonVariant::Primary>
                    "View Live Demo"
                </LinkButton>
            }
        });
        let repo = github.map(|href| {
            view! {
                <LinkButton href=href external=true variant=ButtonVariant::Secondary>
                    "View on GitHub"
                </LinkButton>
            }
        });
        view! {
            <div class="flex flex-wrap gap-4 pt-8 border-t border-gray-200 dark:border-gray-800">
                {demo}
                {repo}
            </div>
        }
    })
}

#[component]
pub fn BackButton(#[prop(optional)] link: FallbackLink) -> impl IntoView {
    let href = assets().resolve(&link.target);
    view! {
        <div class="max-w-6xl mx-auto px-4 py-8">
            <a href=href class="inline-flex items-center text-blue-600 dark:text-blue-400 hover:underline">
                <ArrowLeftIcon class="mr-2" />
                {link.label}
            </a>
        </div>
    }
}

#[component]
pub fn NotFound(#[prop(optional)] copy: NotFoundCopy) -> impl IntoView {
    let href = assets().resolve(&copy.link.target);
    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="text-center">
                <h1 class="text-4xl font-bold mb-4">{copy.title}</h1>
                <p class="text-gray-600 dark:text-gray-400 mb-8">{copy.message}</p>
                <LinkButton href=href variant=ButtonVariant::Primary>
                    {copy.link.label}
                </LinkButton>
            </div>
        </div>
    }
}
