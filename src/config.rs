use std::{env, path::PathBuf};

pub const DEFAULT_BASE_URL: &str = "/";
pub const DEFAULT_SITE_URL: &str = "https://example.com";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Process configuration, read once from the environment at startup.
///
/// | variable              | default                 |
/// |-----------------------|-------------------------|
/// | `FOLIO_BASE_URL`      | `/`                     |
/// | `FOLIO_SITE_URL`      | `https://example.com`   |
/// | `FOLIO_PUBLIC_DIR`    | `public`                |
/// | `BIND_ADDRESS`        | `0.0.0.0`               |
/// | `PORT`                | `3000`                  |
/// | `FOLIO_CACHE_ENABLED` | off                     |
/// | `TRUST_PROXY`         | off                     |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Deployment base prepended to every asset and page URL. Always ends
    /// with `/`.
    pub base_url: String,
    /// Origin used for canonical links and the sitemap, without a trailing `/`.
    pub site_url: String,
    pub public_dir: PathBuf,
    pub bind_address: String,
    pub port: u16,
    pub cache_enabled: bool,
    pub trust_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            cache_enabled: false,
            trust_proxy: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("FOLIO_BASE_URL")
                .map(|v| normalize_base(&v))
                .unwrap_or(defaults.base_url),
            site_url: env::var("FOLIO_SITE_URL")
                .map(|v| normalize_site_url(&v))
                .unwrap_or(defaults.site_url),
            public_dir: env::var("FOLIO_PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
            bind_address: env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            cache_enabled: env_flag("FOLIO_CACHE_ENABLED").unwrap_or(defaults.cache_enabled),
            trust_proxy: env_flag("TRUST_PROXY").unwrap_or(defaults.trust_proxy),
        }
    }

    pub fn with_base_url(mut self, base: &str) -> Self {
        self.base_url = normalize_base(base);
        self
    }

    pub fn with_site_url(mut self, site: &str) -> Self {
        self.site_url = normalize_site_url(site);
        self
    }

    /// Path prefix the router is mounted under, e.g. `/my-site` for a base
    /// of `/my-site/`. `None` for the root base, an empty base, or a base
    /// pointing at another origin.
    pub fn mount_path(&self) -> Option<&str> {
        let trimmed = self.base_url.trim_end_matches('/');
        if trimmed.is_empty() || !trimmed.starts_with('/') {
            None
        } else {
            Some(trimmed)
        }
    }
}

/// Ensure the base ends with exactly one `/`. An empty base means the site
/// root: page-relative URLs would break on nested pages like `/project/{id}`.
pub fn normalize_base(raw: &str) -> String {
    format!("{}/", raw.trim().trim_end_matches('/'))
}

fn normalize_site_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

pub(crate) fn is_truthy(value: &str) -> bool {
    matches!(
        value,
        "true" | "1" | "yes" | "on" | "TRUE" | "True" | "ON" | "YES"
    )
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name).ok().map(|v| is_truthy(v.trim()))
}
