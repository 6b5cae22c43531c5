// src/utils/guard.rs

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    config::Config,
    utils::jwt::{token_from_headers, verify_jwt},
};

const PROTECTED_PREFIXES: [&str; 4] = ["/dashboard", "/subjects", "/topics", "/quiz"];
const AUTH_PREFIX: &str = "/auth";

pub const LOGIN_PAGE: &str = "/auth/login";
pub const HOME_PAGE: &str = "/dashboard";

/// What the page guard does with a non-API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAccess {
    Serve,
    Redirect(&'static str),
}

pub fn route_access(path: &str, signed_in: bool) -> PageAccess {
    let protected = PROTECTED_PREFIXES.iter().any(|prefix| path.starts_with(prefix));

    if protected && !signed_in {
        return PageAccess::Redirect(LOGIN_PAGE);
    }
    if path.starts_with(AUTH_PREFIX) && signed_in {
        return PageAccess::Redirect(HOME_PAGE);
    }
    PageAccess::Serve
}

/// Redirects page requests based on the session cookie before the static
/// frontend is served. An invalid or expired token counts as signed out.
pub async fn page_guard(State(config): State<Config>, req: Request<Body>, next: Next) -> Response {
    let signed_in = token_from_headers(req.headers())
        .is_some_and(|token| verify_jwt(&token, &config.jwt_secret).is_ok());

    match route_access(req.uri().path(), signed_in) {
        PageAccess::Serve => next.run(req).await,
        PageAccess::Redirect(location) => {
            tracing::debug!(path = %req.uri().path(), location, "Page guard redirect");
            Redirect::temporary(location).into_response()
        }
    }
}
