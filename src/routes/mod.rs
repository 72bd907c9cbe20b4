//! HTTP routes
//!
//! Request dispatch and shared response helpers. The observable surface is
//! small: a landing page, register/login forms, a protected dashboard, and
//! logout. Everything else is a 404.

pub mod account;
pub mod forms;
pub mod pages;

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::{Method, Request, Response, StatusCode};
use std::sync::Arc;

use crate::server::AppState;

use forms::SESSION_COOKIE;

/// Dispatches a request to its handler.
pub async fn handle_request(
    state: Arc<AppState>,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = match (method, path.as_str()) {
        (Method::GET, "/") => html_response(pages::index()),
        (Method::GET, "/register") => html_response(pages::register_form("")),
        (Method::POST, "/register") => return account::handle_register(state, req).await,
        (Method::GET, "/login") => html_response(pages::login_form("")),
        (Method::POST, "/login") => return account::handle_login(state, req).await,
        (Method::GET, "/dashboard") => account::handle_dashboard(state, &req).await,
        (Method::GET, "/logout") => account::handle_logout(state, &req).await,
        _ => not_found_response(),
    };

    Ok(response)
}

/// 200 response carrying a rendered HTML page.
pub fn html_response(body: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}

/// 302 redirect without touching the session cookie.
pub fn redirect_response(location: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::FOUND)
        .header("Location", location)
        .body(Full::new(Bytes::new()))
        .unwrap()
}

/// 302 redirect that hands the client a new session cookie.
pub fn redirect_with_session(location: &str, token: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::FOUND)
        .header("Location", location)
        .header(
            "Set-Cookie",
            format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, token),
        )
        .body(Full::new(Bytes::new()))
        .unwrap()
}

/// 302 redirect that expires the session cookie.
pub fn redirect_expire_session(location: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::FOUND)
        .header("Location", location)
        .header(
            "Set-Cookie",
            format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE),
        )
        .body(Full::new(Bytes::new()))
        .unwrap()
}

/// 404 response
fn not_found_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Full::new(Bytes::from(pages::not_found())))
        .unwrap()
}
