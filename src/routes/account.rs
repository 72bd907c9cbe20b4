//! Account routes
//!
//! Handlers for register, login, logout, and the session-gated dashboard.
//! Every failure maps to a redisplayed form or a redirect; nothing here
//! surfaces an internal error to the client.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::{Request, Response};
use log::{info, warn};
use std::sync::Arc;

use crate::auth;
use crate::error::AuthError;
use crate::server::AppState;

use super::forms;
use super::pages;
use super::{html_response, redirect_expire_session, redirect_response, redirect_with_session};

/// Reads a form field submitted by the client, defaulting to empty so that
/// an absent field fails validation the same way a blank one does.
fn form_field<'a>(form: &'a std::collections::HashMap<String, String>, name: &str) -> &'a str {
    form.get(name).map(String::as_str).unwrap_or("")
}

/// Extracts the session token from the request's Cookie header.
fn request_token(req: &Request<Incoming>) -> Option<String> {
    let header = req
        .headers()
        .get(hyper::header::COOKIE)
        .and_then(|h| h.to_str().ok());
    forms::session_token(header)
}

/// POST /register - create an account and establish a session for it.
pub async fn handle_register(
    state: Arc<AppState>,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let body = req.into_body().collect().await?.to_bytes();
    let form = forms::parse_form(&String::from_utf8_lossy(&body));
    let email = form_field(&form, "email");
    let password = form_field(&form, "password");

    // Lock held across check-then-insert so duplicate detection is atomic
    let result = {
        let mut store = state.credentials.lock().await;
        auth::register(&mut store, email, password, &state.config)
    };

    match result {
        Ok(()) => {
            info!("Registered new account: {}", email);
            let token = state.sessions.lock().await.open(email);
            Ok(redirect_with_session("/dashboard", &token))
        }
        Err(AuthError::DuplicateIdentity(_)) => {
            warn!("Registration rejected, identity already exists: {}", email);
            Ok(html_response(pages::register_form("User already exists.")))
        }
        Err(_) => Ok(html_response(pages::register_form(
            "Email and password are required.",
        ))),
    }
}

/// POST /login - validate credentials and establish a session.
pub async fn handle_login(
    state: Arc<AppState>,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let body = req.into_body().collect().await?.to_bytes();
    let form = forms::parse_form(&String::from_utf8_lossy(&body));
    let email = form_field(&form, "email");
    let password = form_field(&form, "password");

    let result = {
        let store = state.credentials.lock().await;
        auth::authenticate(&store, email, password, &state.config)
    };

    match result {
        Ok(()) => {
            info!("Login successful: {}", email);
            let token = state.sessions.lock().await.open(email);
            Ok(redirect_with_session("/dashboard", &token))
        }
        Err(_) => {
            warn!("Login failed for identity: {}", email);
            Ok(html_response(pages::login_form("Invalid credentials.")))
        }
    }
}

/// GET /dashboard - protected page; anonymous clients bounce to login.
pub async fn handle_dashboard(
    state: Arc<AppState>,
    req: &Request<Incoming>,
) -> Response<Full<Bytes>> {
    let token = request_token(req).unwrap_or_default();

    let identity = {
        let sessions = state.sessions.lock().await;
        sessions.require(&token).map(str::to_string)
    };

    match identity {
        Ok(identity) => html_response(pages::dashboard(&identity)),
        Err(_) => redirect_response("/login"),
    }
}

/// GET /logout - clear the session and bounce to the landing page.
pub async fn handle_logout(
    state: Arc<AppState>,
    req: &Request<Incoming>,
) -> Response<Full<Bytes>> {
    if let Some(token) = request_token(req) {
        state.sessions.lock().await.close(&token);
        info!("Session closed");
    }

    redirect_expire_session("/")
}
