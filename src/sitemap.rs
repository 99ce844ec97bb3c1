use crate::{
    asset::{absolute_url, AssetResolver},
    catalog::Catalog,
    resolve::project_path,
};

#[derive(Clone, Debug, PartialEq, Eq)]
struct SitemapEntry {
    loc: String,
    priority: &'static str,
}

/// Home page plus one entry per project, in catalog order.
pub fn render_sitemap(catalog: &Catalog, assets: &AssetResolver, site_url: &str) -> String {
    let mut urls = Vec::with_capacity(catalog.len() + 1);
    urls.push(SitemapEntry {
        loc: absolute_url(site_url, &assets.resolve("")),
        priority: "1.0",
    });
    for project in catalog.all() {
        urls.push(SitemapEntry {
            loc: absolute_url(site_url, &assets.resolve(&project_path(&project.id))),
            priority: "0.8",
        });
    }
    tracing::debug!(urls = urls.len(), "rendered sitemap");
    render_xml(&urls)
}

fn render_xml(urls: &[SitemapEntry]) -> String {
    let mut body = String::new();
    for entry in urls {
        body.push_str("  <url>\n");
        body.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
        body.push_str(&format!("    <priority>{}</priority>\n", entry.priority));
        body.push_str("  </url>\n");
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{body}</urlset>
"#
    )
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::Project, category::Category};
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Project::new("td-1", "One", Category::TouchDesigner),
            Project::new("p5-1", "Two", Category::P5js),
        ])
        .unwrap()
    }

    #[test]
    fn lists_home_then_projects() {
        let xml = render_sitemap(&catalog(), &AssetResolver::default(), "https://folio.dev");
        let locs = xml
            .lines()
            .filter_map(|l| l.trim().strip_prefix("<loc>"))
            .filter_map(|l| l.strip_suffix("</loc>"))
            .collect::<Vec<_>>();
        assert_eq!(
            locs,
            vec![
                "https://folio.dev/",
                "https://folio.dev/project/td-1",
                "https://folio.dev/project/p5-1",
            ]
        );
        assert!(xml.starts_with("<?xml"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn respects_base_path() {
        let xml = render_sitemap(
            &catalog(),
            &AssetResolver::new("/my-site/"),
            "https://folio.dev",
        );
        assert!(xml.contains("<loc>https://folio.dev/my-site/</loc>"));
        assert!(xml.contains("<loc>https://folio.dev/my-site/project/td-1</loc>"));
    }

    #[test]
    fn escapes_ampersands() {
        assert_eq!(escape_xml("a&b<c>"), "a&amp;b&lt;c&gt;");
    }
}
