use std::{collections::BTreeMap, sync::Arc};

use leptos::prelude::*;
use serde_json::{json, Map, Value};

#[cfg(not(debug_assertions))]
use minify_html::{minify, Cfg as HtmlMinCfg};

use crate::{
    asset::{absolute_url, AssetResolver},
    catalog::{Catalog, Project},
    category::Category,
    components::{HomePage, NotFound, ProjectPage},
    config::Config,
    profile::PROFILE,
    resolve::{project_path, NotFoundCopy},
};

pub const CSP_NONCE_TOKEN: &str = "__CSP_NONCE__";

/// Everything a page needs besides its data: URL base and public origin.
#[derive(Clone, Debug)]
pub struct RenderContext {
    pub assets: AssetResolver,
    pub site_url: String,
}

impl RenderContext {
    pub fn from_config(config: &Config) -> Self {
        Self {
            assets: AssetResolver::new(&config.base_url),
            site_url: config.site_url.clone(),
        }
    }

    fn absolute(&self, path: &str) -> String {
        absolute_url(&self.site_url, &self.assets.resolve(path))
    }

    /// Render a view tree with the asset resolver in context.
    fn render<F, V>(&self, view: F) -> String
    where
        F: FnOnce() -> V,
        V: RenderHtml,
    {
        let assets = self.assets.clone();
        Owner::new_root(None).with(move || {
            provide_context(assets);
            view().to_html()
        })
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct HtmlOptions {
    pub meta: BTreeMap<String, String>,
    pub structured_data: Vec<String>,
}

pub(crate) fn wrap_html_with_options(
    ctx: &RenderContext,
    body: &str,
    title: &str,
    opts: &HtmlOptions,
) -> String {
    let meta_tags = render_meta_tags(&opts.meta);
    let structured_json = opts
        .structured_data
        .iter()
        .map(|s| {
            format!(r#"<script type="application/ld+json" nonce="{CSP_NONCE_TOKEN}">{s}</script>"#)
        })
        .collect::<Vec<_>>()
        .join("\n  ");
    let title = escape_html(title);
    let stylesheet = ctx.assets.resolve("assets/app.css");
    let favicon = ctx.assets.resolve("favicon.ico");
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title}</title>
  {meta_tags}
  {structured_json}
  <link rel="icon" href="{favicon}" />
  <link rel="preconnect" href="https://fonts.googleapis.com" />
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous" />
  <link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Inter:ital,opsz,wght@0,14..32,100..900;1,14..32,100..900&display=swap" />
  <link rel="stylesheet" href="{stylesheet}" />
</head>
<body>
{body}
</body>
</html>"##
    )
}

pub fn prerender_home_page(ctx: &RenderContext, catalog: &Arc<Catalog>) -> String {
    let catalog = Arc::clone(catalog);
    let rendered = ctx.render(move || view! { <HomePage catalog=catalog /> });
    let opts = HtmlOptions {
        meta: home_meta(ctx),
        structured_data: vec![build_site_structured_data(ctx)],
    };
    maybe_minify(wrap_html_with_options(
        ctx,
        &rendered,
        &format!("{} - Portfolio", PROFILE.name),
        &opts,
    ))
}

pub fn prerender_project_page(ctx: &RenderContext, project: &Project) -> String {
    let owned = project.clone();
    let rendered = ctx.render(move || view! { <ProjectPage project=owned /> });

    let canonical = ctx.absolute(&project_path(&project.id));
    let mut meta = BTreeMap::new();
    meta.insert("description".to_string(), project.description.clone());
    meta.insert("og:description".to_string(), project.description.clone());
    meta.insert("og:title".to_string(), project.title.clone());
    meta.insert("og:type".to_string(), "article".to_string());
    meta.insert("og:url".to_string(), canonical.clone());
    meta.insert("link:canonical".to_string(), canonical);
    if let Some(image) = share_image(project) {
        meta.insert("og:image".to_string(), ctx.absolute(image));
    }

    let opts = HtmlOptions {
        meta,
        structured_data: vec![
            build_project_structured_data(ctx, project),
            build_breadcrumb_structured_data(ctx, project),
        ],
    };
    maybe_minify(wrap_html_with_options(
        ctx,
        &rendered,
        &format!("{} - {}", project.title, PROFILE.name),
        &opts,
    ))
}

pub fn prerender_not_found_page(ctx: &RenderContext, copy: &NotFoundCopy) -> String {
    let owned = copy.clone();
    let rendered = ctx.render(move || view! { <NotFound copy=owned /> });
    let mut meta = BTreeMap::new();
    meta.insert("description".to_string(), "Project details".to_string());
    meta.insert("robots".to_string(), "noindex".to_string());
    let opts = HtmlOptions {
        meta,
        ..Default::default()
    };
    maybe_minify(wrap_html_with_options(ctx, &rendered, &copy.title, &opts))
}

pub fn inject_runtime_tokens(template: &str, nonce: &str) -> String {
    template.replace(CSP_NONCE_TOKEN, nonce)
}

/// Static hosts get no per-request nonce; drop the attribute entirely.
pub fn strip_runtime_tokens(template: &str) -> String {
    // minified output drops the quotes
    template
        .replace(&format!(r#" nonce="{CSP_NONCE_TOKEN}""#), "")
        .replace(&format!(" nonce={CSP_NONCE_TOKEN}"), "")
}

fn render_meta_tags(meta: &BTreeMap<String, String>) -> String {
    meta.iter()
        .map(|(k, v)| {
            let v = escape_html(v);
            if let Some(rel) = k.strip_prefix("link:") {
                return format!(r#"<link rel="{rel}" href="{v}" />"#);
            }
            let attr = if k.starts_with("og:") { "property" } else { "name" };
            format!(r#"<meta {attr}="{k}" content="{v}" />"#)
        })
        .collect::<Vec<_>>()
        .join("\n  ")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn home_meta(ctx: &RenderContext) -> BTreeMap<String, String> {
    let mut titles = Category::ALL
        .iter()
        .map(|c| c.metadata().title)
        .collect::<Vec<_>>();
    let last = titles.pop().unwrap_or_default();
    let description = format!(
        "Creative developer and designer portfolio showcasing {}, and {last} work.",
        titles.join(", ")
    );
    let mut m = BTreeMap::new();
    m.insert("description".to_string(), description.clone());
    m.insert("og:description".to_string(), description);
    m.insert("og:title".to_string(), format!("{} - Portfolio", PROFILE.name));
    m.insert("og:site_name".to_string(), PROFILE.name.to_string());
    m.insert("og:type".to_string(), "website".to_string());
    m.insert("link:canonical".to_string(), ctx.absolute(""));
    m
}

/// First still image usable as a link preview.
fn share_image(project: &Project) -> Option<&str> {
    std::iter::once(project.thumbnail.as_str())
        .chain(project.images.iter().map(String::as_str))
        .find(|path| crate::media::is_image(path))
}

fn build_site_structured_data(ctx: &RenderContext) -> String {
    let home = ctx.absolute("");
    json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "Person",
                "@id": format!("{home}#person"),
                "name": PROFILE.name,
                "jobTitle": PROFILE.tagline,
                "description": PROFILE.bio,
                "url": home,
                "sameAs": [PROFILE.github]
            },
            {
                "@type": "WebSite",
                "@id": format!("{home}#website"),
                "url": home,
                "name": format!("{} - Portfolio", PROFILE.name),
                "inLanguage": "en",
                "author": { "@id": format!("{home}#person") }
            }
        ]
    })
    .to_string()
}

fn build_project_structured_data(ctx: &RenderContext, project: &Project) -> String {
    let home = ctx.absolute("");
    let mut obj = Map::new();
    obj.insert("@context".into(), json!("https://schema.org"));
    obj.insert("@type".into(), json!("CreativeWork"));
    obj.insert("name".into(), json!(project.title));
    obj.insert("description".into(), json!(project.description));
    obj.insert("url".into(), json!(ctx.absolute(&project_path(&project.id))));
    obj.insert("genre".into(), json!(project.category.metadata().title));
    obj.insert("author".into(), json!({ "@id": format!("{home}#person") }));
    if !project.technologies.is_empty() {
        obj.insert("keywords".into(), json!(project.technologies));
    }
    if !project.collaborators.is_empty() {
        let contributors = project
            .collaborators
            .iter()
            .map(|name| json!({ "@type": "Person", "name": name }))
            .collect::<Vec<_>>();
        obj.insert("contributor".into(), Value::Array(contributors));
    }
    if let Some(image) = share_image(project) {
        obj.insert("image".into(), json!(ctx.absolute(image)));
    }
    if let Some(video) = project
        .video_url
        .as_deref()
        .or(Some(project.thumbnail.as_str()))
        .filter(|p| crate::media::is_video(p))
    {
        obj.insert(
            "video".into(),
            json!({ "@type": "VideoObject", "contentUrl": ctx.absolute(video) }),
        );
    }
    Value::Object(obj).to_string()
}

fn build_breadcrumb_structured_data(ctx: &RenderContext, project: &Project) -> String {
    let section = project.category.metadata();
    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": [
            {
                "@type": "ListItem",
                "position": 1,
                "name": "Home",
                "item": ctx.absolute("")
            },
            {
                "@type": "ListItem",
                "position": 2,
                "name": section.title,
                "item": format!("{}#{}", ctx.absolute(""), section.id)
            },
            {
                "@type": "ListItem",
                "position": 3,
                "name": project.title,
                "item": ctx.absolute(&project_path(&project.id))
            }
        ]
    })
    .to_string()
}

#[cfg(not(debug_assertions))]
fn maybe_minify(html: String) -> String {
    let cfg = HtmlMinCfg {
        minify_js: true,
        minify_css: false,
        ..Default::default()
    };
    let min = minify(html.as_bytes(), &cfg);
    String::from_utf8(min).unwrap_or(html)
}

#[cfg(debug_assertions)]
fn maybe_minify(html: String) -> String {
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ctx() -> RenderContext {
        RenderContext::from_config(&Config::default().with_site_url("https://folio.dev"))
    }

    #[test]
    fn meta_tags_escape_values() {
        let mut meta = BTreeMap::new();
        meta.insert("og:title".to_string(), "\"Quotes\" & more".to_string());
        meta.insert("link:canonical".to_string(), "https://folio.dev/".to_string());
        assert_eq!(
            render_meta_tags(&meta),
            "<link rel=\"canonical\" href=\"https://folio.dev/\" />\n  <meta property=\"og:title\" content=\"&quot;Quotes&quot; &amp; more\" />"
        );
    }

    #[test]
    fn home_description_lists_categories() {
        let meta = home_meta(&ctx());
        assert_eq!(
            meta["description"],
            "Creative developer and designer portfolio showcasing Touch Designer, Grasshopper, University Projects, and P5.js work."
        );
        assert_eq!(meta["link:canonical"], "https://folio.dev/");
    }

    #[test]
    fn share_image_skips_videos() {
        let project = Project::new("p", "P", Category::P5js)
            .thumbnail("clip.mp4")
            .images(&["still.webp"]);
        assert_eq!(share_image(&project), Some("still.webp"));
    }

    #[test]
    fn nonce_tokens() {
        let html = r#"<script nonce="__CSP_NONCE__"></script>"#;
        assert_eq!(inject_runtime_tokens(html, "abc"), r#"<script nonce="abc"></script>"#);
        assert_eq!(strip_runtime_tokens(html), "<script></script>");
        assert_eq!(
            strip_runtime_tokens("<script nonce=__CSP_NONCE__ type=a></script>"),
            "<script type=a></script>"
        );
    }

    #[test]
    fn breadcrumb_points_at_category_section() {
        let project = Project::new("gh-1", "Shell", Category::Grasshopper);
        let crumbs: Value = serde_json::from_str(&build_breadcrumb_structured_data(&ctx(), &project)).unwrap();
        assert_eq!(crumbs["itemListElement"][1]["item"], "https://folio.dev/#grasshopper");
        assert_eq!(crumbs["itemListElement"][2]["item"], "https://folio.dev/project/gh-1");
    }

    #[test]
    fn empty_base_project_page_uses_root_urls() {
        let ctx = RenderContext::from_config(&Config::default().with_base_url(""));
        let project = Project::new("td-1", "Clip", Category::TouchDesigner)
            .thumbnail("videos/td/clip.mp4");
        let html = prerender_project_page(&ctx, &project);

        assert!(html.contains("src=\"/videos/td/clip.mp4\""));
        assert!(html.contains("href=\"/assets/app.css\""));
        assert!(html.contains("href=\"/\""));
        assert!(!html.contains("href=\"\""));
        assert!(!html.contains("src=\"videos/"));
    }
}
