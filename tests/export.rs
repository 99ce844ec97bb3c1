use std::{fs, path::PathBuf, sync::Arc};

use folio::{
    app::render::RenderContext, catalog::Catalog, config::Config, export::export_site,
};
use pretty_assertions::assert_eq;

#[test]
fn writes_one_page_per_project() {
    let out = tempfile::tempdir().unwrap();
    let catalog = Arc::new(Catalog::builtin().unwrap());
    let ctx = RenderContext::from_config(&Config::default().with_site_url("https://folio.dev"));

    let report = export_site(&catalog, &ctx, out.path(), None).unwrap();

    assert_eq!(report.pages.len(), catalog.len() + 2);
    assert_eq!(report.public_files, 0);
    assert_eq!(report.pages.first(), Some(&PathBuf::from("index.html")));
    assert_eq!(report.pages.last(), Some(&PathBuf::from("404.html")));
    for project in catalog.all() {
        let page = out.path().join("project").join(&project.id).join("index.html");
        let html = fs::read_to_string(&page).unwrap();
        assert!(html.contains(&project.title), "{}", page.display());
        assert!(!html.contains("__CSP_NONCE__"));
    }

    let sitemap = fs::read_to_string(out.path().join("sitemap.xml")).unwrap();
    assert!(sitemap.contains("<loc>https://folio.dev/project/td-project-1</loc>"));
    let not_found = fs::read_to_string(out.path().join("404.html")).unwrap();
    assert!(not_found.contains("Back to Portfolio"));
}

#[test]
fn copies_public_media_under_base() {
    let out = tempfile::tempdir().unwrap();
    let public = tempfile::tempdir().unwrap();
    fs::create_dir_all(public.path().join("images")).unwrap();
    fs::write(public.path().join("images/still.webp"), b"webp").unwrap();

    let catalog = Arc::new(Catalog::builtin().unwrap());
    let ctx = RenderContext::from_config(&Config::default().with_base_url("/my-site/"));
    let report = export_site(&catalog, &ctx, out.path(), Some(public.path())).unwrap();

    assert_eq!(report.public_files, 1);
    assert!(out.path().join("images/still.webp").is_file());
    let index = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(index.contains("/my-site/project/td-project-1"));
}

#[test]
fn missing_public_dir_is_not_an_error() {
    let out = tempfile::tempdir().unwrap();
    let catalog = Arc::new(Catalog::builtin().unwrap());
    let ctx = RenderContext::from_config(&Config::default());
    let missing = out.path().join("does-not-exist");

    let report = export_site(&catalog, &ctx, out.path(), Some(&missing)).unwrap();
    assert_eq!(report.public_files, 0);
    assert!(out.path().join("index.html").is_file());
}
