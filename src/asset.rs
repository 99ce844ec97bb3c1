use crate::config::normalize_base;

/// Maps catalog-relative media and page paths to URLs under the deployment
/// base, e.g. `videos/a.mp4` to `/my-site/videos/a.mp4`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetResolver {
    base: String,
}

impl AssetResolver {
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize_base(base),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn resolve(&self, path: &str) -> String {
        resolve_with_base(&self.base, path)
    }
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_BASE_URL)
    }
}

/// Strip one leading `/` from `path` and prepend `base` verbatim.
pub fn resolve_with_base(base: &str, path: &str) -> String {
    let clean = path.strip_prefix('/').unwrap_or(path);
    format!("{base}{clean}")
}

/// Turn a resolved URL into an absolute one on `site_url`.
pub fn absolute_url(site_url: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else if url.starts_with('/') {
        format!("{site_url}{url}")
    } else {
        format!("{site_url}/{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn leading_slash_is_irrelevant() {
        let assets = AssetResolver::new("/my-site/");
        assert_eq!(assets.resolve("/a/b.png"), assets.resolve("a/b.png"));
        assert_eq!(assets.resolve("a/b.png"), "/my-site/a/b.png");
    }

    #[test]
    fn only_one_slash_is_stripped() {
        assert_eq!(resolve_with_base("/", "//x.png"), "//x.png");
    }

    #[test]
    fn empty_path_yields_base() {
        assert_eq!(resolve_with_base("/my-site/", ""), "/my-site/");
        assert_eq!(resolve_with_base("", ""), "");
        assert_eq!(AssetResolver::default().resolve(""), "/");
    }

    #[test]
    fn empty_base_means_site_root() {
        let assets = AssetResolver::new("");
        assert_eq!(assets.base(), "/");
        assert_eq!(assets.resolve("videos/a.mp4"), "/videos/a.mp4");
        assert_eq!(assets.resolve("/"), "/");
    }

    #[test]
    fn absolute_urls() {
        assert_eq!(
            absolute_url("https://folio.dev", "/project/a"),
            "https://folio.dev/project/a"
        );
        assert_eq!(
            absolute_url("https://folio.dev", "project/a"),
            "https://folio.dev/project/a"
        );
        assert_eq!(
            absolute_url("https://folio.dev", "https://cdn.dev/x.png"),
            "https://cdn.dev/x.png"
        );
    }
}
