//! Session Domain Module
//!
//! Server-side session state, one entry per visitor. The store only exposes
//! a get/set/save contract; what lives inside a session (the cart) is the
//! cart module's business.

pub mod store;

pub use store::{SessionHandle, SessionStore};

use axum::http::HeaderMap;
use uuid::Uuid;

/// Name of the cookie carrying the visitor's session id
pub const SESSION_COOKIE: &str = "session_id";

/// Resolves the visitor's session id from the request cookies.
///
/// Returns the id plus a flag telling the caller whether the id was freshly
/// minted (and therefore needs a `Set-Cookie` on the response).
pub fn resolve_session_id(headers: &HeaderMap) -> (String, bool) {
    let from_cookie = headers
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').find_map(|pair| {
                let (name, value) = pair.trim().split_once('=')?;
                (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
            })
        });

    match from_cookie {
        Some(id) => (id, false),
        None => (Uuid::new_v4().simple().to_string(), true),
    }
}
