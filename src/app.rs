mod handlers;
pub mod render;
mod state;

pub use handlers::{client_ip, CspNonce};
pub use state::{build_prerendered_state, AppState};

use std::{convert::Infallible, net::SocketAddr, path::Path, sync::Arc};

use anyhow::Context;
use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request, Response},
    middleware,
    routing::{get, get_service},
    Router, ServiceExt,
};
use tokio::net::TcpListener;
use tower::{service_fn, Layer};
use tower_http::{
    compression::CompressionLayer, normalize_path::NormalizePathLayer, services::ServeDir,
};

use crate::{catalog::Catalog, config::Config, logging, media};

const GIT_HASH: &str = env!("GIT_HASH");

pub async fn run(config: Config) -> anyhow::Result<()> {
    let catalog = Arc::new(Catalog::builtin().context("invalid project catalog")?);
    tracing::info!(
        projects = catalog.len(),
        base = %config.base_url,
        "catalog loaded"
    );
    let state = build_prerendered_state(&config, catalog);

    let app = build_app(state.clone(), &config).layer(middleware::from_fn_with_state(
        state,
        logging::access_log_middleware,
    ));
    let app = NormalizePathLayer::trim_trailing_slash().layer(app);

    let listener = TcpListener::bind((config.bind_address.as_str(), config.port))
        .await
        .with_context(|| format!("binding {}:{}", config.bind_address, config.port))?;
    tracing::info!(
        "server running on http://{}:{}{}",
        config.bind_address,
        config.port,
        config.mount_path().unwrap_or("/")
    );

    axum::serve(
        listener,
        ServiceExt::<Request<Body>>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Full application router, mounted under the configured base path.
pub fn build_app(state: AppState, config: &Config) -> Router {
    let routes = routes(state.clone(), &config.public_dir);
    let routes = match config.mount_path() {
        Some(mount) => Router::new()
            .nest(mount, routes)
            .fallback(handlers::not_found_handler),
        None => routes,
    };

    routes
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(handlers::security_middleware))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            cache_headers_middleware,
        ))
        .with_state(state)
}

fn routes(state: AppState, public_dir: &Path) -> Router<AppState> {
    // public media lives at the site root, like the catalog paths expect
    let public = ServeDir::new(public_dir).fallback(service_fn(move |req: Request<Body>| {
        let state = state.clone();
        async move {
            let nonce = req
                .extensions()
                .get::<CspNonce>()
                .map(|n| n.0.clone())
                .unwrap_or_default();
            Ok::<_, Infallible>(handlers::not_found_response(&state, &nonce))
        }
    }));

    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/project/{id}", get(handlers::project_handler))
        .route("/sitemap.xml", get(handlers::sitemap_handler))
        .fallback_service(get_service(public))
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = sigterm.recv() => {},
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "SIGTERM handler unavailable");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    tracing::info!("shutting down");
}

async fn cache_headers_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: middleware::Next,
) -> Response<Body> {
    let path = req.uri().path().to_ascii_lowercase();
    let mut res = next.run(req).await;
    if !state.cache_enabled {
        return res;
    }

    let mime = media::content_type(&path);
    let is_document = mime.is_none_or(|m| m.starts_with("text/html") || m == "application/xml");
    let headers = res.headers_mut();
    if is_document {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, must-revalidate"),
        );
        return res;
    }

    // ServeDir falls back to octet-stream for some media
    let needs_type = headers
        .get(header::CONTENT_TYPE)
        .map(|v| v == "application/octet-stream")
        .unwrap_or(true);
    if let (true, Some(mime)) = (needs_type, mime) {
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(mime));
    }
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=300, stale-while-revalidate=604800"),
    );
    if let Ok(val) = HeaderValue::from_str(&format!("W/\"{GIT_HASH}\"")) {
        headers.insert(header::ETAG, val);
    }
    headers.insert(header::VARY, HeaderValue::from_static("Accept-Encoding"));
    res
}
