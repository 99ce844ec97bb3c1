use std::{collections::HashMap, sync::Arc};

use crate::{
    asset::AssetResolver,
    catalog::Catalog,
    config::Config,
    resolve::NotFoundCopy,
    sitemap::render_sitemap,
};

use super::render::{
    prerender_home_page, prerender_not_found_page, prerender_project_page, RenderContext,
};

#[derive(Clone)]
pub struct AppState {
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) assets: AssetResolver,
    pub(crate) prerender_home: Arc<str>,
    pub(crate) prerender_not_found: Arc<str>,
    pub(crate) project_pages: Arc<HashMap<String, Arc<str>>>,
    pub(crate) sitemap: Arc<str>,
    pub(crate) cache_enabled: bool,
    pub(crate) trust_proxy: bool,
}

/// Render every page once; handlers only inject the request nonce.
pub fn build_prerendered_state(config: &Config, catalog: Arc<Catalog>) -> AppState {
    let ctx = RenderContext::from_config(config);

    let project_pages = catalog
        .all()
        .iter()
        .map(|project| {
            let html = Arc::<str>::from(prerender_project_page(&ctx, project));
            (project.id.clone(), html)
        })
        .collect::<HashMap<_, _>>();
    tracing::debug!(pages = project_pages.len(), "prerendered project pages");

    let home = Arc::<str>::from(prerender_home_page(&ctx, &catalog));
    let not_found = Arc::<str>::from(prerender_not_found_page(&ctx, &NotFoundCopy::default()));
    let sitemap = Arc::<str>::from(render_sitemap(&catalog, &ctx.assets, &ctx.site_url));

    AppState {
        catalog,
        assets: ctx.assets,
        prerender_home: home,
        prerender_not_found: not_found,
        project_pages: Arc::new(project_pages),
        sitemap,
        cache_enabled: config.cache_enabled,
        trust_proxy: config.trust_proxy,
    }
}
