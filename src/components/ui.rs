use leptos::prelude::*;

use crate::{
    asset::AssetResolver,
    media::{classify, MediaKind},
};

/// Resolver provided by the page renderer, or the root base outside of one.
pub(crate) fn assets() -> AssetResolver {
    use_context::<AssetResolver>().unwrap_or_default()
}

fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    fn badge(self) -> &'static str {
        match self {
            Self::Sm => "px-2 py-1 text-xs",
            Self::Md => "px-3 py-1 text-sm",
            Self::Lg => "px-4 py-2 text-base",
        }
    }

    fn button(self) -> &'static str {
        match self {
            Self::Sm => "px-4 py-2 text-sm",
            Self::Md => "px-6 py-3 text-base",
            Self::Lg => "px-8 py-4 text-lg",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    Primary,
    #[default]
    Secondary,
    Category,
}

impl BadgeVariant {
    fn classes(self) -> &'static str {
        match self {
            Self::Primary | Self::Category => {
                "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200"
            }
            Self::Secondary => "bg-gray-100 text-gray-800 dark:bg-gray-800 dark:text-gray-200",
        }
    }
}

#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional)] size: Size,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let classes = join_classes(&[
        "inline-block font-semibold rounded",
        variant.classes(),
        size.badge(),
        &class,
    ]);
    view! { <span class=classes>{children()}</span> }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-blue-600 text-white hover:bg-blue-700",
            Self::Secondary => "border-2 border-gray-300 dark:border-gray-700 hover:border-blue-600 dark:hover:border-blue-400",
            Self::Ghost => "text-blue-600 dark:text-blue-400 hover:underline",
        }
    }
}

fn button_classes(variant: ButtonVariant, size: Size, extra: &str) -> String {
    join_classes(&[
        "inline-flex items-center justify-center rounded-lg font-medium transition-colors",
        variant.classes(),
        size.button(),
        extra,
    ])
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: Size,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <button type="button" class=button_classes(variant, size, &class)>
            {children()}
        </button>
    }
}

/// Button-styled anchor. External links open in a new tab without an opener.
#[component]
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: Size,
    #[prop(optional)] external: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let classes = button_classes(variant, size, &class);
    if external {
        view! {
            <a class=classes href=href target="_blank" rel="noopener noreferrer">
                {children()}
            </a>
        }
        .into_any()
    } else {
        view! { <a class=classes href=href>{children()}</a> }.into_any()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionVariant {
    #[default]
    Default,
    Alternate,
}

impl SectionVariant {
    /// Zebra striping for consecutive sections.
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Default
        } else {
            Self::Alternate
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-white dark:bg-gray-950",
            Self::Alternate => "bg-gray-50 dark:bg-gray-900",
        }
    }
}

#[component]
pub fn Section(
    #[prop(optional, into)] id: String,
    #[prop(optional)] variant: SectionVariant,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let classes = join_classes(&["py-20 px-4 md:px-8", variant.classes(), &class]);
    let id = (!id.is_empty()).then_some(id);
    view! {
        <section id=id class=classes>
            {children()}
        </section>
    }
}

#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: String,
) -> impl IntoView {
    let description = (!description.is_empty()).then(|| {
        view! { <p class="text-gray-600 dark:text-gray-400 text-lg">{description}</p> }
    });
    view! {
        <div class="mb-12">
            <h2 class="text-4xl md:text-5xl font-bold mb-4">{title}</h2>
            {description}
        </div>
    }
}

#[component]
pub fn SectionContainer(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=join_classes(&["max-w-7xl mx-auto", &class])>{children()}</div> }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AspectRatio {
    #[default]
    Video,
    Square,
    Wide,
    Portrait,
}

impl AspectRatio {
    fn classes(self) -> &'static str {
        match self {
            Self::Video => "aspect-video",
            Self::Square => "aspect-square",
            Self::Wide => "aspect-[21/9]",
            Self::Portrait => "aspect-[9/16]",
        }
    }
}

/// Image or video for a catalog media path, chosen by [`classify`].
///
/// `src` and `poster` are catalog-relative and resolved against the
/// deployment base here. An empty `src` renders the empty frame only. The
/// frame carries the classification as `data-media`.
#[component]
pub fn MediaDisplay(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    poster: Option<String>,
    #[prop(optional)] autoplay: bool,
    #[prop(optional)] looped: bool,
    #[prop(optional)] muted: bool,
    #[prop(optional)] controls: bool,
    #[prop(optional)] aspect: AspectRatio,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] media_class: String,
) -> impl IntoView {
    let container = join_classes(&[aspect.classes(), &class]);
    let media_class = join_classes(&["w-full h-full object-cover", &media_class]);
    if src.is_empty() {
        return view! { <div class=container></div> }.into_any();
    }

    let assets = assets();
    let url = assets.resolve(&src);
    let kind = classify(&src);
    match kind {
        MediaKind::Video => {
            let poster = poster.map(|p| assets.resolve(&p));
            view! {
                <div class=container data-media=kind.as_str()>
                    <video
                        src=url
                        autoplay=autoplay
                        loop=looped
                        muted=muted
                        controls=controls
                        playsinline=true
                        poster=poster
                        class=media_class
                    >
                        "Your browser does not support the video tag."
                    </video>
                </div>
            }
            .into_any()
        }
        // unknown extensions fall back to an image
        MediaKind::Image | MediaKind::Unknown => view! {
            <div class=container data-media=kind.as_str()>
                <img src=url alt=alt class=media_class />
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn ArrowLeftIcon(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg
            class=join_classes(&["h-4 w-4", &class])
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
        >
            <path d="M19 12H5" />
            <path d="m12 19-7-7 7-7" />
        </svg>
    }
}

/// Render a view to HTML with `base` as the asset base.
#[cfg(test)]
pub(crate) fn render<F, V>(base: &str, view: F) -> String
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    let assets = AssetResolver::new(base);
    Owner::new_root(None).with(move || {
        provide_context(assets);
        view().to_html()
    })
}
