mod project;
pub mod ui;

pub use project::{
    card_technologies, BackButton, NotFound, ProjectCard, ProjectGallery, ProjectHeader,
    ProjectLinks, ProjectTechnologies, CARD_TECHNOLOGY_LIMIT,
};

use std::sync::Arc;

use leptos::prelude::*;

use crate::{
    catalog::{Catalog, Project},
    profile::PROFILE,
    resolve::HeroMedia,
};
use ui::{ButtonVariant, LinkButton, MediaDisplay, Section, SectionContainer, SectionHeader, SectionVariant};

#[component]
pub fn HomePage(catalog: Arc<Catalog>) -> impl IntoView {
    let sections = catalog
        .grouped()
        .into_iter()
        .enumerate()
        .map(|(index, group)| {
            let projects: Vec<Project> = group.projects.into_iter().cloned().collect();
            view! {
                <PortfolioSection
                    id=group.metadata.id.as_str()
                    title=group.metadata.title
                    description=group.metadata.description
                    variant=SectionVariant::alternating(index)
                >
                    {projects
                        .into_iter()
                        .map(|project| view! { <ProjectCard project=project /> })
                        .collect_view()}
                </PortfolioSection>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="min-h-screen">
            <HeroSection />
            {sections}
            <ContactSection />
        </div>
    }
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let links = crate::category::Category::ALL
        .into_iter()
        .map(|category| {
            let meta = category.metadata();
            view! {
                <li>
                    <a class="hover:text-blue-600 dark:hover:text-blue-400" href=format!("#{}", meta.id)>
                        {meta.title}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();
    view! {
        <section class="h-screen flex items-center justify-center bg-gradient-to-b from-gray-50 to-white dark:from-gray-900 dark:to-gray-950">
            <div class="text-center px-4">
                <h1 class="text-6xl md:text-7xl font-bold mb-4">{PROFILE.name}</h1>
                <p class="text-xl md:text-2xl text-gray-600 dark:text-gray-400 mb-6">{PROFILE.tagline}</p>
                <p class="text-lg text-gray-500 dark:text-gray-500 max-w-2xl mx-auto">{PROFILE.bio}</p>
                <nav aria-label="categories" class="mt-10">
                    <ul class="flex flex-wrap justify-center gap-6 text-sm font-medium">{links}</ul>
                </nav>
            </div>
        </section>
    }
}

#[component]
pub fn PortfolioSection(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(optional)] variant: SectionVariant,
    children: Children,
) -> impl IntoView {
    view! {
        <Section id=id variant=variant>
            <SectionContainer>
                <SectionHeader title=title description=description />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">{children()}</div>
            </SectionContainer>
        </Section>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-4 md:px-8 bg-white dark:bg-gray-950">
            <div class="max-w-7xl mx-auto text-center">
                <h2 class="text-3xl md:text-4xl font-bold mb-6">"Get in Touch"</h2>
                <p class="text-gray-600 dark:text-gray-400 mb-8 text-lg">
                    "Interested in collaborating? Let's create something amazing together."
                </p>
                <div class="flex justify-center gap-6">
                    <LinkButton href=PROFILE.mailto() variant=ButtonVariant::Primary>
                        "Email Me"
                    </LinkButton>
                    <LinkButton href=PROFILE.github external=true variant=ButtonVariant::Secondary>
                        "GitHub"
                    </LinkButton>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectPage(project: Project) -> impl IntoView {
    let hero = HeroMedia::for_project(&project);
    let hero_src = hero.src.to_string();
    let hero_poster = hero.poster.map(str::to_string);
    let (autoplay, controls) = (hero.autoplay(), hero.controls());

    view! {
        <div class="min-h-screen bg-white dark:bg-gray-950">
            <BackButton />
            <div class="w-full bg-gray-200 dark:bg-gray-800">
                <div class="max-w-6xl mx-auto">
                    <MediaDisplay
                        src=hero_src
                        alt=project.title.clone()
                        poster=hero_poster
                        autoplay=autoplay
                        looped=autoplay
                        muted=autoplay
                        controls=controls
                    />
                </div>
            </div>
            <div class="max-w-4xl mx-auto px-4 py-16">
                <ProjectHeader project=project.clone() />
                <ProjectTechnologies technologies=project.technologies.clone() />
                <div class="prose dark:prose-invert max-w-none mb-12">
                    <h2 class="text-2xl font-semibold mb-4">"About This Project"</h2>
                    <p class="text-gray-700 dark:text-gray-300 leading-relaxed">
                        {project.detailed_description.clone()}
                    </p>
                </div>
                <ProjectGallery images=project.images.clone() project_title=project.title.clone() />
                <ProjectLinks live_demo=project.live_demo.clone() github=project.github.clone() />
            </div>
        </div>
    }
}
