use axum::{
    body::Body,
    extract::{Extension, Path, State},
    http::{header, HeaderMap, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
};
use std::net::SocketAddr;

use super::{render::inject_runtime_tokens, state::AppState};
use crate::resolve::{project_path, resolve, Resolution};

const CSP_PREFIX: &str = "default-src 'self'; script-src 'self' 'nonce-";
const CSP_SUFFIX: &str = "' 'strict-dynamic'; style-src 'self' 'unsafe-inline' fonts.googleapis.com; img-src 'self' data:; media-src 'self'; font-src 'self' fonts.gstatic.com; connect-src 'self'; object-src 'none'; frame-ancestors 'self'; base-uri 'self'";
const MAX_PATH_LEN: usize = 200;

/// Per-request nonce inserted by [`security_middleware`].
#[derive(Clone, Debug)]
pub struct CspNonce(pub String);

pub async fn index_handler(
    State(state): State<AppState>,
    Extension(CspNonce(nonce)): Extension<CspNonce>,
) -> Response {
    Html(inject_runtime_tokens(&state.prerender_home, &nonce)).into_response()
}

pub async fn project_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Extension(CspNonce(nonce)): Extension<CspNonce>,
) -> Response {
    // "/project/{id}.html" links from older static exports
    let mut id = raw_id.as_str();
    let mut stripped = false;
    while let Some(rest) = id.strip_suffix(".html") {
        id = rest;
        stripped = true;
    }
    if stripped {
        // the id came percent-decoded; only plain slugs go back into Location
        if !is_slug(id) {
            return not_found_response(&state, &nonce);
        }
        let location = state.assets.resolve(&project_path(id));
        return Redirect::permanent(&location).into_response();
    }

    match resolve(&state.catalog, id) {
        Resolution::Found(project) => match state.project_pages.get(&project.id) {
            Some(page) => Html(inject_runtime_tokens(page, &nonce)).into_response(),
            None => {
                tracing::warn!(id = %project.id, "project resolved without a prerendered page");
                not_found_response(&state, &nonce)
            }
        },
        Resolution::NotFound => {
            tracing::debug!(id = %raw_id, "unknown project id");
            not_found_response(&state, &nonce)
        }
    }
}

fn is_slug(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

pub async fn sitemap_handler(State(state): State<AppState>) -> Response {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        state.sitemap.to_string(),
    )
        .into_response()
}

pub async fn not_found_handler(
    State(state): State<AppState>,
    Extension(CspNonce(nonce)): Extension<CspNonce>,
) -> Response {
    not_found_response(&state, &nonce)
}

pub fn not_found_response(state: &AppState, nonce: &str) -> Response {
    let html = inject_runtime_tokens(&state.prerender_not_found, nonce);
    (StatusCode::NOT_FOUND, Html(html)).into_response()
}

pub async fn security_middleware(mut req: Request<Body>, next: Next) -> Response {
    if req.uri().path().len() >= MAX_PATH_LEN {
        return StatusCode::URI_TOO_LONG.into_response();
    }
    let nonce = generate_nonce();
    req.extensions_mut().insert(CspNonce(nonce.clone()));

    let mut res = next.run(req).await;
    let headers = res.headers_mut();
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        header::STRICT_TRANSPORT_SECURITY,
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN"));
    headers.insert(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    let csp = format!("{CSP_PREFIX}{nonce}{CSP_SUFFIX}");
    if let Ok(val) = HeaderValue::from_str(&csp) {
        headers.insert(header::CONTENT_SECURITY_POLICY, val);
    }
    headers.insert(
        "Permissions-Policy",
        HeaderValue::from_static("geolocation=(), microphone=(), camera=(), payment=()"),
    );
    headers.insert(
        "Cross-Origin-Opener-Policy",
        HeaderValue::from_static("same-origin"),
    );
    res
}

/// Client address, preferring proxy headers when the proxy is trusted.
pub fn client_ip(headers: &HeaderMap, addr: &SocketAddr, trust_proxy: bool) -> String {
    if trust_proxy {
        let forwarded = headers
            .get("CF-Connecting-IP")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or_else(|| {
                headers
                    .get("X-Forwarded-For")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.split(',').next())
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
            });
        if let Some(ip) = forwarded {
            return ip.to_string();
        }
    }
    addr.ip().to_string()
}

fn generate_nonce() -> String {
    use rand::Rng;
    let charset = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();
    (0..16)
        .map(|_| charset[rng.random_range(0..charset.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn addr() -> SocketAddr {
        "10.0.0.7:4000".parse().unwrap()
    }

    #[test]
    fn proxy_headers_ignored_unless_trusted() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Forwarded-For", HeaderValue::from_static("1.2.3.4, 5.6.7.8"));
        assert_eq!(client_ip(&headers, &addr(), false), "10.0.0.7");
        assert_eq!(client_ip(&headers, &addr(), true), "1.2.3.4");
    }

    #[test]
    fn cloudflare_header_wins() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Forwarded-For", HeaderValue::from_static("1.2.3.4"));
        headers.insert("CF-Connecting-IP", HeaderValue::from_static(" 9.9.9.9 "));
        assert_eq!(client_ip(&headers, &addr(), true), "9.9.9.9");
    }

    #[test]
    fn redirect_slugs() {
        assert!(is_slug("td-project-1"));
        assert!(is_slug("p5_sketch"));
        assert!(!is_slug(""));
        assert!(!is_slug("a b"));
        assert!(!is_slug("\n"));
        assert!(!is_slug("../etc"));
        assert!(!is_slug("é"));
    }

    #[test]
    fn nonce_is_alphanumeric() {
        let nonce = generate_nonce();
        assert_eq!(nonce.len(), 16);
        assert!(nonce.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
