use folio::{
    app::render::{prerender_not_found_page, prerender_project_page, RenderContext},
    asset::AssetResolver,
    catalog::{Catalog, Project},
    category::Category,
    config::Config,
    error::CatalogError,
    media::{classify, poster_for, MediaKind},
    resolve::{resolve, FallbackLink, HeroMedia, NotFoundCopy, Resolution},
};
use pretty_assertions::assert_eq;

fn ctx() -> RenderContext {
    RenderContext::from_config(&Config::default())
}

#[test]
fn by_category_filters_in_catalog_order() {
    let catalog = Catalog::builtin().unwrap();
    for category in Category::ALL {
        let expected: Vec<_> = catalog
            .all()
            .iter()
            .filter(|p| p.category == category)
            .collect();
        let actual: Vec<_> = catalog.by_category(category).collect();
        assert_eq!(actual, expected);
    }
}

#[test]
fn every_project_resolves_to_itself() {
    let catalog = Catalog::builtin().unwrap();
    for project in catalog.all() {
        assert_eq!(catalog.by_id(&project.id), Some(project));
    }
    assert!(catalog.by_id("__nonexistent__").is_none());
}

#[test]
fn categories_partition_the_catalog() {
    let catalog = Catalog::builtin().unwrap();
    let total: usize = Category::ALL
        .iter()
        .map(|c| catalog.by_category(*c).count())
        .sum();
    assert_eq!(total, catalog.len());

    let grouped = catalog.grouped();
    let order: Vec<_> = grouped.iter().map(|g| g.metadata.id).collect();
    assert_eq!(order, Category::ALL);
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = Catalog::new(vec![
        Project::new("dup", "A", Category::University),
        Project::new("dup", "B", Category::P5js),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        CatalogError::DuplicateId {
            id: "dup".into(),
            index: 1
        }
    );
}

#[test]
fn media_classification() {
    assert_eq!(classify("a.MP4"), MediaKind::Video);
    assert_eq!(classify("a.png"), MediaKind::Image);
    assert_eq!(classify("a.svg"), MediaKind::Image);
    assert_eq!(classify("a.txt"), MediaKind::Unknown);
    assert_eq!(poster_for("v.mp4", Some("p.png")), Some("p.png"));
    assert_eq!(poster_for("v.mp4", Some("p.mp4")), None);
    assert_eq!(poster_for("v.mp4", None), None);
}

#[test]
fn asset_resolution_ignores_leading_slash() {
    for base in ["/", "/my-site/", ""] {
        let assets = AssetResolver::new(base);
        assert_eq!(assets.resolve("/a/b.png"), assets.resolve("a/b.png"));
    }
}

#[test]
fn video_thumbnail_renders_without_poster() {
    let catalog = Catalog::new(vec![
        Project::new("p1", "Particles", Category::P5js).thumbnail("x.mp4")
    ])
    .unwrap();

    let project = resolve(&catalog, "p1").into_option().unwrap();
    assert_eq!(project.id, "p1");
    assert_eq!(classify(&project.thumbnail), MediaKind::Video);
    assert_eq!(poster_for("x.mp4", None), None);

    let hero = HeroMedia::for_project(project);
    assert_eq!(hero.kind, MediaKind::Video);
    assert_eq!(hero.poster, None);

    let html = prerender_project_page(&ctx(), project);
    assert!(html.contains("<video"));
    assert!(html.contains("/x.mp4"));
    assert!(!html.contains("poster="));
}

#[test]
fn missing_id_falls_back_to_portfolio() {
    let catalog = Catalog::builtin().unwrap();
    assert!(matches!(resolve(&catalog, "missing-id"), Resolution::NotFound));

    let link = FallbackLink::default();
    assert_eq!(link.target, "/");
    assert_eq!(link.label, "Back to Portfolio");

    let html = prerender_not_found_page(&ctx(), &NotFoundCopy::default());
    assert!(html.contains("Back to Portfolio"));
    assert!(html.contains("href=\"/\""));
}
